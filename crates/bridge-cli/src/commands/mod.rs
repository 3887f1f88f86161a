//! CLI command definitions and handlers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod comment;
pub mod completions;
pub mod create;
pub mod doctor;
pub mod issues;
pub mod run;
mod utils;

/// Bridge - relay a GitHub issue tracker into Discord.
///
/// Runs a Discord bot that lists, opens and comments on GitHub issues,
/// and exposes the same operations on the command line.
#[derive(Parser)]
#[command(name = "bridge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress informational output.
    ///
    /// Only errors and essential results (like issue URLs) are printed.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// GitHub API base URL (for GitHub Enterprise).
    #[arg(long, global = true, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the Discord bot.
    ///
    /// Connects to the Discord gateway and answers issue commands
    /// until interrupted.
    Run {
        /// Path to a TOML settings file (prefix, default labels, channels).
        #[arg(long, short)]
        settings: Option<PathBuf>,
    },

    /// List issue titles in the configured repository.
    #[command(alias = "ls")]
    Issues {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Open a new issue.
    Create {
        /// Issue title.
        #[arg(long, short)]
        title: String,

        /// Issue body.
        #[arg(long, short, default_value = "")]
        body: String,

        /// Label to apply (repeatable).
        #[arg(long = "label", short)]
        labels: Vec<String>,
    },

    /// Comment on an existing issue.
    Comment {
        /// Issue number.
        number: u64,

        /// Comment text.
        body: String,
    },

    /// Check configuration and GitHub connectivity.
    #[command(alias = "doc")]
    Doctor {
        /// Path to a TOML settings file to validate.
        #[arg(long, short)]
        settings: Option<PathBuf>,
    },

    /// Generate shell completions.
    ///
    /// Outputs completion script to stdout. Redirect to a file and
    /// source it in your shell configuration.
    #[command(alias = "comp")]
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
