//! Polished CLI entry point.
//!
//! Binary name: `polished`
//!
//! Parses CLI arguments, resolves configuration, then dispatches to the
//! landing page, the review flow, or the session info command. All
//! intelligence lives behind the backend API; this binary is interaction
//! plumbing only.

mod cli;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use polished_client::config::{load_config, resolve_data_dir};
use polished_client::ReviewApi;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match args.verbose {
        0 if args.quiet => "error",
        0 => "warn",
        1 => "info,polished=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // No subcommand: show the landing page.
    let Some(command) = args.command else {
        cli::landing::print_landing();
        return Ok(());
    };

    // Shell completions don't need config or a client.
    if let Commands::Completions { shell } = &command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "polished", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = load_config(&resolve_data_dir())?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    let api = ReviewApi::new(&config);

    match command {
        Commands::Review { file } => {
            cli::review::run_review(&api, file).await?;
        }

        Commands::Info { session_id } => {
            cli::info::show_session(&api, &session_id).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
