//! The review flow: validate, upload, chat.
//!
//! Drives the workspace lifecycle from the CLI: validates the file
//! locally (no network on rejection), uploads it with a progress
//! indicator, then enters the chat loop. `/new <file>` tears the session
//! down and goes around again with the next file.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, warn};

use polished_client::ReviewApi;
use polished_core::upload::validate_resume_file;
use polished_core::workspace::Workspace;
use polished_types::session::Session;

use super::chat::{self, ChatOutcome};

/// Run the full review flow starting from one resume file.
pub async fn run_review(api: &ReviewApi, file: PathBuf) -> anyhow::Result<()> {
    let mut workspace = Workspace::new();
    let mut next_file = Some(file);

    while let Some(file) = next_file.take() {
        // Client-side validation: a rejected file never issues a request.
        if let Err(err) = validate_resume_file(&file) {
            anyhow::bail!(err.user_message());
        }

        let spinner = indicatif::ProgressBar::new_spinner();
        spinner.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message("Analyzing your resume...");
        spinner.enable_steady_tick(Duration::from_millis(80));

        let upload = api.upload_resume(&file).await;
        spinner.finish_and_clear();

        let session = match upload {
            Ok(resp) => {
                debug!(session_id = %resp.session_id, "session started");
                Session::from(resp)
            }
            Err(err) => {
                warn!(error = %err, "upload failed");
                anyhow::bail!(err.user_message());
            }
        };

        let review = workspace.start(session);
        let outcome = chat::run_chat_loop(api, review).await?;

        // Session and transcript are torn down together; the server-side
        // delete is best-effort.
        if let Some(session_id) = workspace.reset() {
            if let Err(err) = api.delete_session(&session_id).await {
                debug!(error = %err, "session delete failed (ignored)");
            }
        }

        match outcome {
            ChatOutcome::Exit => break,
            ChatOutcome::NewResume(file) => next_file = Some(file),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polished_types::config::ClientConfig;
    use polished_types::error::UNSUPPORTED_TYPE_MESSAGE;

    #[tokio::test]
    async fn test_rejected_file_fails_without_network() {
        // Validation runs before any request, so no backend is needed;
        // the flow must return an error (non-zero exit) with the fixed
        // validation message, not exit cleanly.
        let api = ReviewApi::new(&ClientConfig::default());
        let err = run_review(&api, PathBuf::from("resume.exe"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), UNSUPPORTED_TYPE_MESSAGE);
    }
}
