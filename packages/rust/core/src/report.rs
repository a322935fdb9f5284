//! Rendering sorted sends as list, count, or dates output.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::io::{self, Write};

use chrono::NaiveDate;

use sends_shared::SendRecord;

use crate::grade::sort_sends;

/// What to print.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Every send, one per line.
    #[default]
    List,
    /// One line per distinct grade string with its send count.
    Count,
    /// Unique dates, oldest first, of sends with exactly this grade.
    Dates { grade: String },
}

impl ReportMode {
    /// Pick a mode from CLI flags. A non-empty `dates` grade wins over `count`.
    pub fn from_flags(count: bool, dates: Option<&str>) -> Self {
        match dates {
            Some(grade) if !grade.is_empty() => Self::Dates {
                grade: grade.to_string(),
            },
            _ if count => Self::Count,
            _ => Self::List,
        }
    }
}

/// A set of sends, sorted by grade then color on construction.
#[derive(Debug, Clone)]
pub struct Report {
    sends: Vec<SendRecord>,
}

impl Report {
    /// Sort `sends` and wrap them for rendering.
    pub fn new(mut sends: Vec<SendRecord>) -> Self {
        sort_sends(&mut sends);
        Self { sends }
    }

    /// The sorted sends.
    pub fn sends(&self) -> &[SendRecord] {
        &self.sends
    }

    /// Render the output lines for `mode`.
    pub fn render(&self, mode: &ReportMode) -> Vec<String> {
        match mode {
            ReportMode::List => self.list_lines(),
            ReportMode::Count => self.count_lines(),
            ReportMode::Dates { grade } => self.date_lines(grade),
        }
    }

    /// Write the lines for `mode` to `out`, newline-terminated.
    pub fn write_to<W: Write>(&self, mode: &ReportMode, out: &mut W) -> io::Result<()> {
        for line in self.render(mode) {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }

    fn list_lines(&self) -> Vec<String> {
        self.sends.iter().map(ToString::to_string).collect()
    }

    /// Counts keyed by the raw grade string, in first-seen order.
    fn count_lines(&self) -> Vec<String> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for send in &self.sends {
            let grade = send.grade.as_str();
            let i = *index.entry(grade).or_insert_with(|| {
                counts.push((grade, 0));
                counts.len() - 1
            });
            counts[i].1 += 1;
        }

        counts
            .into_iter()
            .map(|(grade, count)| format!("{count:>7} {grade}"))
            .collect()
    }

    fn date_lines(&self, grade: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut dates: Vec<&str> = self
            .sends
            .iter()
            .filter(|send| send.grade == grade && !send.date.is_empty())
            .map(|send| send.date.as_str())
            .filter(|date| seen.insert(*date))
            .collect();

        dates.sort_by(|a, b| compare_dates(a, b));
        dates.into_iter().map(String::from).collect()
    }
}

/// Chronological when both sides are `YYYY-MM-DD` dates, lexical otherwise.
fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_iso_date(a), parse_iso_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// Parse a strictly shaped `YYYY-MM-DD` date.
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
