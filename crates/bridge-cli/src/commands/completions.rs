//! `bridge completions` command - Generate shell completions.

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use super::Cli;

/// Write the completion script for `shell` to stdout.
pub fn run(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
