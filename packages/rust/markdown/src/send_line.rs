//! Splitting a free-text send line into color, grade, and meta.
//!
//! A send line reads like `Red V4+ flash`: an optional label, a grade token,
//! then trailing notes. The split is a single declarative pattern so the
//! label/grade boundary (shortest label that still lets a grade match) stays
//! exactly reproducible.

use std::sync::LazyLock;

use regex::Regex;

use sends_shared::SendRecord;

/// `color`: reluctant run of ASCII word chars, whitespace and apostrophes,
/// plus at most one whitespace. `grade`: optional `V` then digits and
/// `.+?-`. `meta`: everything left on the line.
static SEND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<color>(?-u:[\w\s'])*?(?-u:\s)?)(?P<grade>V?[0-9.+?-]+)(?P<meta>(?-u:\s)?.*)",
    )
    .expect("valid regex")
});

/// The three captured parts of a send line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendParts<'a> {
    pub color: &'a str,
    pub grade: &'a str,
    pub meta: &'a str,
}

/// Split a send line. Returns `None` when no grade token can be found.
///
/// The search is unanchored: if the line starts with characters outside the
/// label class (a comma, say), the match begins after them and those
/// characters are dropped.
pub fn split_send(line: &str) -> Option<SendParts<'_>> {
    let caps = SEND_RE.captures(line)?;
    let grade = caps.name("grade")?.as_str();
    if grade.is_empty() {
        return None;
    }

    Some(SendParts {
        color: caps.name("color").map_or("", |m| m.as_str()),
        grade,
        meta: caps.name("meta").map_or("", |m| m.as_str()),
    })
}

/// Split a send line into a [`SendRecord`] stamped with `date`.
pub fn parse_send(line: &str, date: &str) -> Option<SendRecord> {
    split_send(line).map(|parts| SendRecord::new(parts.color, parts.grade, parts.meta, date))
}
