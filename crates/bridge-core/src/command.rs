//! Chat command grammar.
//!
//! A command is a message that starts with the configured prefix followed by
//! a keyword:
//!
//! ```text
//! !issues
//! !issue <title> | <body> | <label>, <label>
//! !comment <number> <text>
//! !help
//! ```
//!
//! The `issue` body may also be given on the lines after the title. Only the
//! first line is split on `|`, so later lines may contain it freely.

use bridge_github::CreateIssue;

use crate::error::{Error, Result};

/// A parsed bridge command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the repository's issues.
    Issues,

    /// Open a new issue.
    CreateIssue {
        /// Issue title.
        title: String,
        /// Issue body, possibly empty.
        body: String,
        /// Labels given in the message.
        labels: Vec<String>,
    },

    /// Comment on an existing issue.
    Comment {
        /// Issue number.
        number: u64,
        /// Comment text.
        body: String,
    },

    /// Show usage.
    Help,
}

impl Command {
    /// Parse a chat message.
    ///
    /// Returns `Ok(None)` for messages that are not addressed to the bridge
    /// (no prefix, or nothing after it).
    ///
    /// # Errors
    ///
    /// Returns a usage error (see [`Error::is_usage_error`]) if the message
    /// has the prefix but is not a well-formed command.
    ///
    /// # Examples
    ///
    /// ```
    /// use bridge_core::Command;
    ///
    /// let cmd = Command::parse("!comment #42 looks good", "!").unwrap();
    /// assert_eq!(
    ///     cmd,
    ///     Some(Command::Comment { number: 42, body: "looks good".to_string() })
    /// );
    ///
    /// assert_eq!(Command::parse("hello there", "!").unwrap(), None);
    /// ```
    pub fn parse(message: &str, prefix: &str) -> Result<Option<Self>> {
        let Some(rest) = message.trim_start().strip_prefix(prefix) else {
            return Ok(None);
        };

        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Ok(None);
        }

        let (keyword, args) = rest
            .split_once(char::is_whitespace)
            .map_or((rest, ""), |(k, a)| (k, a.trim()));

        let command = match keyword.to_lowercase().as_str() {
            "issues" => Self::Issues,
            "issue" => parse_issue(args)?,
            "comment" => parse_comment(args)?,
            "help" => Self::Help,
            _ => return Err(Error::UnknownCommand(keyword.to_string())),
        };

        Ok(Some(command))
    }
}

/// Build the API request for a `CreateIssue` command's fields, appending
/// `default_labels` that are not already present.
#[must_use]
pub fn issue_request(
    title: &str,
    body: &str,
    labels: &[String],
    default_labels: &[String],
) -> CreateIssue {
    let mut merged = labels.to_vec();
    for label in default_labels {
        if !merged.contains(label) {
            merged.push(label.clone());
        }
    }

    CreateIssue::new(title)
        .with_body(body)
        .with_labels(merged)
}

fn parse_issue(args: &str) -> Result<Command> {
    // Only the first line carries `|` separators; later lines are body text.
    let (first_line, rest) = args.split_once('\n').unwrap_or((args, ""));

    let mut parts = first_line.splitn(3, '|');
    let title = parts.next().unwrap_or_default().trim();
    let inline_body = parts.next().unwrap_or_default().trim();
    let labels = parts.next().map(parse_labels).unwrap_or_default();

    if title.is_empty() {
        return Err(Error::MissingTitle);
    }

    let rest = rest.trim();
    let body = match (inline_body.is_empty(), rest.is_empty()) {
        (_, true) => inline_body.to_string(),
        (true, false) => rest.to_string(),
        (false, false) => format!("{inline_body}\n{rest}"),
    };

    Ok(Command::CreateIssue {
        title: title.to_string(),
        body,
        labels,
    })
}

fn parse_labels(raw: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for label in raw.split(',').map(str::trim).filter(|l| !l.is_empty()) {
        if !labels.iter().any(|l| l == label) {
            labels.push(label.to_string());
        }
    }
    labels
}

fn parse_comment(args: &str) -> Result<Command> {
    if args.is_empty() {
        return Err(Error::MissingIssueNumber);
    }

    let (number, body) = args
        .split_once(char::is_whitespace)
        .map_or((args, ""), |(n, b)| (n, b.trim()));

    let digits = number.strip_prefix('#').unwrap_or(number);
    let number = match digits.parse::<u64>() {
        Ok(n) if n > 0 => n,
        _ => return Err(Error::InvalidIssueNumber(number.to_string())),
    };

    if body.is_empty() {
        return Err(Error::MissingCommentBody);
    }

    Ok(Command::Comment {
        number,
        body: body.to_string(),
    })
}
