//! CLI command definitions and dispatch for the `polished` binary.
//!
//! Uses clap derive macros for argument parsing. Running without a
//! subcommand shows the landing page; `polished review <file>` is the
//! main flow.

pub mod chat;
pub mod info;
pub mod landing;
pub mod review;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// AI resume review in your terminal.
#[derive(Parser)]
#[command(name = "polished", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Backend base URL (overrides config file and POLISHED_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a resume and start an interactive review session.
    #[command(alias = "r")]
    Review {
        /// Resume file to review (PDF, DOCX, DOC, or TXT).
        file: PathBuf,
    },

    /// Show status of a review session.
    Info {
        /// Session ID to inspect.
        session_id: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
