//! Command grammar.
//!
//! Five explicit user directives bypass free-text classification. The
//! grammar is closed: adding a command means adding a variant here and
//! the compiler points at every dispatch site that must handle it.

use std::sync::LazyLock;

use regex::Regex;

/// A parsed user command. Parsed once per turn; variants are mutually
/// exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Recommend,
    /// `book <free text>`; payload is the trimmed treatment name.
    Book(String),
    /// `symptom: <free text>`; payload is the trimmed description.
    Symptom(String),
}

static BOOK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^book\s+(.+)$").expect("invalid book pattern"));

static SYMPTOM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^symptom:\s*(.+)$").expect("invalid symptom pattern"));

/// Recognize a command in normalized text.
///
/// Checked in priority order, first match wins: exact `start` / `help` /
/// `recommend`, then the `book` and `symptom:` prefixed forms. Anything
/// else is `None` and falls through to the greeting/safety/category
/// pipeline.
pub fn parse_command(normalized: &str) -> Option<Command> {
    match normalized {
        "start" => return Some(Command::Start),
        "help" => return Some(Command::Help),
        "recommend" => return Some(Command::Recommend),
        _ => {}
    }
    if let Some(caps) = BOOK_RE.captures(normalized) {
        return Some(Command::Book(caps[1].trim().to_string()));
    }
    if let Some(caps) = SYMPTOM_RE.captures(normalized) {
        return Some(Command::Symptom(caps[1].trim().to_string()));
    }
    None
}
