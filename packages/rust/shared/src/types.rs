//! Core domain types for send logs.

use std::fmt;

// ---------------------------------------------------------------------------
// SendRecord
// ---------------------------------------------------------------------------

/// One logged send, split out of a frontmatter `sends` entry.
///
/// `grade` is always non-empty: the extractor only builds a record when the
/// grade part of the send line matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRecord {
    /// Leading free text before the grade (hold color, climber, attempt notes).
    /// Keeps its trailing space, may be empty.
    pub color: String,
    /// The raw grade token, e.g. `V4+`, `5.10-`, `900`, `?`.
    pub grade: String,
    /// Trailing free text after the grade, including its leading space.
    pub meta: String,
    /// Date of the owning document, copied verbatim from its frontmatter.
    pub date: String,
}

impl SendRecord {
    /// Build a record from its parts.
    pub fn new(
        color: impl Into<String>,
        grade: impl Into<String>,
        meta: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            color: color.into(),
            grade: grade.into(),
            meta: meta.into(),
            date: date.into(),
        }
    }
}

/// Renders the send line back as `color ++ grade ++ meta`.
impl fmt::Display for SendRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.color, self.grade, self.meta)
    }
}

// ---------------------------------------------------------------------------
// Frontmatter
// ---------------------------------------------------------------------------

/// The fields of a document header that matter for send logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// `date` scalar (ISO `YYYY-MM-DD` expected, not validated).
    pub date: String,
    /// `sends` list, in document order.
    pub sends: Vec<String>,
}
