//! Chat reply formatting.

use std::fmt::Write;

use bridge_github::{Issue, IssueCreated};

/// Discord's maximum message length, in characters.
pub const MAX_REPLY_CHARS: usize = 2000;

const TRUNCATION_MARKER: &str = "…";

/// Format an issue listing, one issue per line.
#[must_use]
pub fn issue_list(repo: &str, issues: &[Issue]) -> String {
    if issues.is_empty() {
        return format!("No open issues in {repo}.");
    }

    let mut out = format!("Issues in {repo}:\n");
    for issue in issues {
        match issue.number {
            Some(number) => {
                let _ = writeln!(out, "#{number} {}", issue.title);
            }
            None => {
                let _ = writeln!(out, "- {}", issue.title);
            }
        }
    }
    truncate(out.trim_end())
}

/// Format the confirmation for a newly created issue.
#[must_use]
pub fn issue_created(created: &IssueCreated) -> String {
    format!("Opened issue #{}: {}", created.number, created.html_url)
}

/// Format the confirmation for a new comment.
#[must_use]
pub fn comment_created(number: u64) -> String {
    format!("Commented on issue #{number}.")
}

/// Usage text for the given prefix.
#[must_use]
pub fn help(prefix: &str) -> String {
    format!(
        "Commands:\n\
         `{prefix}issues` list open issues\n\
         `{prefix}issue <title> | <body> | <label>, <label>` open an issue\n\
         `{prefix}comment <number> <text>` comment on an issue\n\
         `{prefix}help` show this message"
    )
}

/// Format an error reply.
#[must_use]
pub fn error(message: &str) -> String {
    truncate(&format!("Error: {message}"))
}

/// Shorten `text` to fit in one Discord message.
///
/// Cuts on the last line break that fits when there is one, and appends a
/// marker line so readers know the reply was shortened.
#[must_use]
pub fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_REPLY_CHARS {
        return text.to_string();
    }

    // Leave room for "\n" plus the marker
    let budget = MAX_REPLY_CHARS - 1 - TRUNCATION_MARKER.chars().count();
    let cut = text
        .char_indices()
        .nth(budget)
        .map_or(text.len(), |(idx, _)| idx);
    let head = &text[..cut];
    let head = head.rfind('\n').map_or(head, |nl| &head[..nl]);

    format!("{head}\n{TRUNCATION_MARKER}")
}
