//! Session banner shown when the chat loop starts.

use console::style;

use polished_types::session::Session;

/// Print the banner at the start of a review session.
///
/// Shows the product identity, the short session id, and a hint about
/// slash commands.
pub fn print_session_banner(session: &Session) {
    println!();
    println!(
        "  {} {}",
        "\u{2728}",
        style("Polished \u{00b7} Resume Expert").cyan().bold()
    );
    println!(
        "  {}",
        style("Expert AI with 20 years of tech hiring experience").dim()
    );
    println!();
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(session.short_id()).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
