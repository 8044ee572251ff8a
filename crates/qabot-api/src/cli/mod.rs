//! CLI command definitions for the `qabot` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod config;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Ask a language model questions from the terminal or a small web page.
#[derive(Parser)]
#[command(name = "qabot", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web UI.
    Serve {
        /// Port to listen on (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Ask a single question and print the answer.
    Ask {
        /// The question text, passed to the model verbatim.
        question: String,
    },

    /// Show the effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
