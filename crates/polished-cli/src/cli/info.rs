//! `polished info <session-id>` -- session status display.

use console::style;

use polished_client::ReviewApi;

/// Fetch and print status for a session.
pub async fn show_session(api: &ReviewApi, session_id: &str) -> anyhow::Result<()> {
    let info = api.session_info(session_id).await?;

    let check_mark = |ok: bool| {
        if ok {
            format!("{}", style("\u{2713}").green())
        } else {
            format!("{}", style("\u{2717}").red())
        }
    };

    println!();
    println!(
        "  {} Session {}",
        style("\u{2728}").bold(),
        style(&info.session_id).cyan()
    );
    println!();
    println!("  {} Resume uploaded", check_mark(info.has_resume));
    println!(
        "  {}  {}",
        style("Messages:").bold(),
        style(info.message_count).dim()
    );
    println!(
        "  {}  {}",
        style("Started:").bold(),
        style(info.created_at.format("%Y-%m-%d %H:%M UTC")).dim()
    );
    println!();

    Ok(())
}
