//! `bridge doctor` command - Diagnose configuration and connectivity.

use std::path::Path;

use anyhow::Result;
use bridge_core::{DiscordConfig, Settings};
use bridge_github::{Error as GitHubError, GitHubClient, GitHubConfig};
use colored::Colorize;

use super::utils;
use crate::output;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

/// A problem found by the doctor.
#[derive(Debug, Clone)]
struct Finding {
    severity: Severity,
    message: String,
    suggestion: Option<String>,
}

impl Finding {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            suggestion: None,
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            suggestion: None,
        }
    }

    fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Run the doctor command.
///
/// Fails (exit code 1) when any error-level finding was reported.
pub fn run(settings_path: Option<&Path>, api_url: Option<&str>) -> Result<()> {
    let mut findings: Vec<Finding> = Vec::new();

    let github = run_check(
        "Checking GitHub configuration...",
        &mut findings,
        check_github_config,
    );
    run_check(
        "Checking Discord configuration...",
        &mut findings,
        check_discord_config,
    );
    run_check("Checking bot settings...", &mut findings, |f| {
        check_settings(settings_path, f);
    });

    if let Some(config) = github {
        run_check("Checking GitHub...", &mut findings, |f| {
            check_github(config, api_url, f);
        });
    }

    println!();
    print_findings(&findings);
    print_summary(&findings)
}

fn check_github_config(findings: &mut Vec<Finding>) -> Option<GitHubConfig> {
    match GitHubConfig::from_env() {
        Ok(config) => Some(config),
        Err(e) => {
            findings.push(
                Finding::error(e.to_string())
                    .with_suggestion("Set the variables in the environment or a .env file"),
            );
            None
        }
    }
}

fn check_discord_config(findings: &mut Vec<Finding>) {
    if let Err(e) = DiscordConfig::from_env() {
        findings.push(
            Finding::error(e.to_string())
                .with_suggestion("Create a bot at https://discord.com/developers and export its token"),
        );
    }
}

fn check_settings(path: Option<&Path>, findings: &mut Vec<Finding>) {
    match Settings::load_or_default(path) {
        Ok(settings) if settings.allowed_channels.is_empty() => {
            findings.push(
                Finding::warning("Bot listens in every channel")
                    .with_suggestion("Set `allowed_channels` in the settings file to restrict it"),
            );
        }
        Ok(_) => {}
        Err(e) => findings.push(Finding::error(e.to_string())),
    }
}

/// Check that the repository is reachable with the configured token.
fn check_github(config: GitHubConfig, api_url: Option<&str>, findings: &mut Vec<Finding>) {
    let client = match api_url {
        Some(url) => GitHubClient::with_base_url(config, url),
        None => GitHubClient::new(config),
    };
    let Ok(client) = client else {
        findings.push(Finding::error("Could not build the HTTP client"));
        return;
    };
    check_reachability(&client, utils::runtime(), findings);
}

fn check_reachability(
    client: &GitHubClient,
    rt: Result<tokio::runtime::Runtime>,
    findings: &mut Vec<Finding>,
) {
    let rt = match rt {
        Ok(rt) => rt,
        Err(e) => {
            findings.push(Finding::error(format!("Could not check GitHub: {e:#}")));
            return;
        }
    };

    let slug = utils::repo_slug(client);
    match rt.block_on(client.list_issues()) {
        Ok(_) => {}
        Err(GitHubError::AuthenticationFailed { .. }) => findings.push(
            Finding::error("GitHub rejected the token")
                .with_suggestion("Check GITHUB_TOKEN is valid and not expired"),
        ),
        Err(GitHubError::ApiError { status: 404, .. }) => findings.push(
            Finding::error(format!("Repository {slug} not found"))
                .with_suggestion("Check GITHUB_AUTHOR and GITHUB_REPO, and the token's access"),
        ),
        Err(e) => findings.push(Finding::error(format!("Could not reach {slug}: {e}"))),
    }
}

/// Print `label`, run `check`, then print a status icon for the findings
/// that check added.
fn run_check<T>(
    label: &str,
    findings: &mut Vec<Finding>,
    check: impl FnOnce(&mut Vec<Finding>) -> T,
) -> T {
    print!("  {label}");
    let before = findings.len();
    let result = check(findings);
    print_status(worst_severity(&findings[before..]));
    result
}

fn worst_severity(findings: &[Finding]) -> Option<Severity> {
    if findings.iter().any(|f| f.severity == Severity::Error) {
        Some(Severity::Error)
    } else if findings.iter().any(|f| f.severity == Severity::Warning) {
        Some(Severity::Warning)
    } else {
        None
    }
}

fn print_status(severity: Option<Severity>) {
    match severity {
        Some(Severity::Error) => println!(" {}", "✗".red()),
        Some(Severity::Warning) => println!(" {}", "⚠".yellow()),
        None => println!(" {}", "✓".green()),
    }
}

fn print_findings(findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }

    for finding in findings {
        let icon = match finding.severity {
            Severity::Error => "✗".red(),
            Severity::Warning => "⚠".yellow(),
        };

        println!("  {icon} {}", finding.message);

        if let Some(suggestion) = &finding.suggestion {
            println!("    {} {suggestion}", "→".dimmed());
        }
    }
    println!();
}

fn print_summary(findings: &[Finding]) -> Result<()> {
    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warnings = findings.len() - errors;

    if errors == 0 && warnings == 0 {
        output::success("No issues found!");
        return Ok(());
    }

    let summary = format!(
        "Found {} problem(s) ({} error(s), {} warning(s))",
        errors + warnings,
        errors,
        warnings
    );
    if errors > 0 {
        anyhow::bail!(summary);
    }
    output::warn(&summary);
    Ok(())
}
