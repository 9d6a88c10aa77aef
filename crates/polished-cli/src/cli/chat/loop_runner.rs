//! Main chat loop orchestration.
//!
//! Drives one active review session: banner, initial analysis, suggested
//! prompts, the input loop with single-flight sends, slash commands, and
//! preview updates when a reply carries rewritten resume content.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use console::style;
use tracing::{debug, warn};

use polished_client::ReviewApi;
use polished_core::preview::{extract_rewrite, SETTLE_DELAY_MS};
use polished_core::transcript::SUGGESTED_PROMPTS;
use polished_core::upload::validate_resume_file;
use polished_core::workspace::ActiveReview;

use super::banner::print_session_banner;
use super::commands::{self, ChatCommand};
use super::input::{InputEvent, ReviewInput};
use super::renderer::ReviewRenderer;

/// How the chat loop ended.
#[derive(Debug)]
pub enum ChatOutcome {
    /// User is done; tear the session down.
    Exit,
    /// User wants to start over with another resume file.
    NewResume(PathBuf),
}

/// Run the interactive chat loop for an active review.
pub async fn run_chat_loop(
    api: &ReviewApi,
    review: &mut ActiveReview,
) -> anyhow::Result<ChatOutcome> {
    let renderer = ReviewRenderer::new();

    print_session_banner(&review.session);

    // The transcript is seeded with the initial analysis; render it.
    let seed = &review.chat.transcript().messages()[0];
    println!("{}", renderer.render(&seed.content).trim_end());
    println!();

    print_suggestions();

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut input, _writer) = ReviewInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = input.read_event().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                return Ok(ChatOutcome::Exit);
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Line(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::Clear => {
                            input.clear();
                            continue;
                        }
                        ChatCommand::Preview => {
                            renderer.print_preview(&review.preview);
                            continue;
                        }
                        ChatCommand::Save(path) => {
                            save_preview(review, &path).await;
                            continue;
                        }
                        ChatCommand::Info => {
                            if let Err(e) =
                                super::super::info::show_session(api, &review.session.session_id)
                                    .await
                            {
                                println!(
                                    "\n  {} Could not fetch session info: {e}\n",
                                    style("!").yellow().bold()
                                );
                            }
                            continue;
                        }
                        ChatCommand::New(file) => {
                            // Validate before tearing anything down so a bad
                            // path leaves the current session intact.
                            if let Err(err) = validate_resume_file(&file) {
                                println!(
                                    "\n  {} {}\n",
                                    style("!").red().bold(),
                                    err.user_message()
                                );
                                continue;
                            }
                            println!("\n  {}", style("Starting over with a new resume.").dim());
                            return Ok(ChatOutcome::NewResume(file));
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            return Ok(ChatOutcome::Exit);
                        }
                        ChatCommand::Unknown(detail) => {
                            println!(
                                "\n  {} {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(detail).dim()
                            );
                            continue;
                        }
                    }
                }

                // A bare number picks a suggested prompt while they're offered.
                let text = resolve_suggestion(review, &text);

                // Single-flight and blank-input gating live in the turn state.
                let Some(message) = review.chat.begin_turn(&text) else {
                    continue;
                };

                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("thinking...");
                spinner.enable_steady_tick(Duration::from_millis(80));

                let start_time = Instant::now();
                let result = api.chat(&review.session.session_id, &message).await;
                spinner.finish_and_clear();

                match result {
                    Ok(resp) => {
                        review.chat.complete_turn(resp.response.clone());

                        println!(
                            "\n  {}",
                            style("Resume Expert").cyan().bold()
                        );
                        println!("{}", renderer.render(&resp.response).trim_end());
                        renderer.print_latency_footer(start_time.elapsed().as_millis() as u64);
                        println!();

                        if let Some(rewrite) = extract_rewrite(&resp.response) {
                            debug!(len = rewrite.len(), "reply contains a resume rewrite");
                            review.preview.stage(rewrite);
                            tokio::time::sleep(Duration::from_millis(SETTLE_DELAY_MS)).await;
                            review.preview.settle();
                            println!(
                                "  {}\n",
                                style("Preview updated \u{00b7} /preview to view, /save <file> to keep it")
                                    .dim()
                            );
                        }
                    }
                    Err(err) => {
                        // Chat errors stay behind the fixed apology; only the
                        // log carries the detail.
                        warn!(error = %err, "chat request failed");
                        review.chat.fail_turn();
                        let apology = &review.chat.transcript().last().unwrap().content;
                        println!("\n  {}", style("Resume Expert").cyan().bold());
                        println!("{}", renderer.render(apology).trim_end());
                        println!();
                    }
                }
            }
        }
    }
}

/// Print the numbered suggested prompts offered before the first user turn.
fn print_suggestions() {
    println!("  {}", style("Try asking:").bold());
    for (i, prompt) in SUGGESTED_PROMPTS.iter().enumerate() {
        println!(
            "  {} {}",
            style(format!("{}.", i + 1)).cyan(),
            style(prompt).dim()
        );
    }
    println!(
        "  {}",
        style("(type a number, or ask anything about your resume)").dim()
    );
    println!();
}

/// Map a bare suggestion number to its prompt while suggestions are offered.
fn resolve_suggestion(review: &ActiveReview, text: &str) -> String {
    if review.chat.transcript().suggestions_visible() {
        if let Ok(n) = text.parse::<usize>() {
            if (1..=SUGGESTED_PROMPTS.len()).contains(&n) {
                return SUGGESTED_PROMPTS[n - 1].to_string();
            }
        }
    }
    text.to_string()
}

/// Write the settled preview content to a file.
async fn save_preview(review: &ActiveReview, path: &PathBuf) {
    if !review.preview.has_content() {
        println!(
            "\n  {} {}\n",
            style("!").yellow().bold(),
            style("No rewrite to save yet. Ask for one first.").dim()
        );
        return;
    }
    match tokio::fs::write(path, review.preview.content()).await {
        Ok(()) => println!(
            "\n  {} Saved rewritten resume to {}\n",
            style("\u{2713}").green().bold(),
            style(path.display()).cyan()
        ),
        Err(e) => println!(
            "\n  {} Could not save: {e}\n",
            style("!").red().bold()
        ),
    }
}
