//! Bridge CLI - relay a GitHub issue tracker into Discord.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bot;
mod commands;
mod output;

use commands::{Cli, Commands};

fn main() {
    // A missing .env file is fine; variables may come from the environment.
    // Loaded before parsing so `GITHUB_API_URL` can come from it too.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_logging(cli.verbose);
    output::set_quiet(cli.quiet);

    let api_url = cli.api_url.as_deref();
    let result = match cli.command {
        Commands::Run { settings } => commands::run::run(settings.as_deref(), api_url),
        Commands::Issues { json } => commands::issues::run(json, api_url),
        Commands::Create {
            title,
            body,
            labels,
        } => commands::create::run(&title, &body, labels, api_url),
        Commands::Comment { number, body } => commands::comment::run(number, &body, api_url),
        Commands::Doctor { settings } => commands::doctor::run(settings.as_deref(), api_url),
        Commands::Completions { shell } => {
            commands::completions::run(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

/// Log to stderr, honouring `RUST_LOG` and falling back to `info`
/// (`debug` with `--verbose`).
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
