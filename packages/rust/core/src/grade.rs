//! Grade parsing and send ordering.
//!
//! Free-text grades are mapped onto one numeric sort key. The bands, lowest
//! first:
//!
//! | band                                | key                 |
//! |-------------------------------------|---------------------|
//! | point grades (`900`, `1000`)        | the number          |
//! | unknown (`?`, `5.?`) and bad `5.x`  | `10_000`            |
//! | rope grades (`5.10`, `5.11+`)       | `20_000 + x ± 0.1`  |
//! | boulder grades (`V4`, `V4-`)        | `100_000 + x ± 0.1` |
//! | bad `Vx` and anything else          | `1_000_000`         |
//!
//! Malformed rope grades share the unknown band while malformed boulder
//! grades share the terminal band. Both ties are intentional.

use std::cmp::Ordering;

use sends_shared::SendRecord;

/// Key for grades containing `?` and for unparseable `5.x` grades.
pub const UNKNOWN_KEY: f64 = 10_000.0;

/// Offset added to rope (`5.x`) grades.
pub const ROPE_BASE: f64 = 20_000.0;

/// Offset added to boulder (`Vx`) grades.
pub const BOULDER_BASE: f64 = 100_000.0;

/// Key for unparseable `Vx` grades and unrecognised strings.
pub const UNPARSEABLE_KEY: f64 = 1_000_000.0;

/// Adjustment for a trailing `+` or `-`.
const MODIFIER_STEP: f64 = 0.1;

/// Trailing `+`/`-` on a rope or boulder grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modifier {
    Plus,
    Minus,
    None,
}

impl Modifier {
    fn apply(self, key: f64) -> f64 {
        match self {
            Self::Plus => key + MODIFIER_STEP,
            Self::Minus => key - MODIFIER_STEP,
            Self::None => key,
        }
    }
}

/// Map a raw grade token to its sort key. Total and pure.
pub fn parse_grade(grade: &str) -> f64 {
    if grade.contains('?') {
        return UNKNOWN_KEY;
    }

    if let Some(rest) = grade.strip_prefix('V') {
        return match parse_modified(rest) {
            Some((value, modifier)) => modifier.apply(BOULDER_BASE + value),
            None => UNPARSEABLE_KEY,
        };
    }

    if let Some(rest) = grade.strip_prefix("5.") {
        return match parse_modified(rest) {
            Some((value, modifier)) => modifier.apply(ROPE_BASE + value),
            None => UNKNOWN_KEY,
        };
    }

    grade.parse().unwrap_or(UNPARSEABLE_KEY)
}

/// Strip a trailing `+`, then a trailing `-`, and parse what remains.
/// A `+` takes precedence when both were present.
fn parse_modified(value: &str) -> Option<(f64, Modifier)> {
    let modifier = if value.ends_with('+') {
        Modifier::Plus
    } else if value.ends_with('-') {
        Modifier::Minus
    } else {
        Modifier::None
    };

    let bare = value.strip_suffix('+').unwrap_or(value);
    let bare = bare.strip_suffix('-').unwrap_or(bare);

    bare.parse().ok().map(|v| (v, modifier))
}

/// Order two sends by grade key, then by color.
///
/// Keys compare numerically, so `-0` and `0` tie. NaN keys fall back to IEEE
/// total order.
pub fn compare_sends(a: &SendRecord, b: &SendRecord) -> Ordering {
    let (ka, kb) = (parse_grade(&a.grade), parse_grade(&b.grade));
    ka.partial_cmp(&kb)
        .unwrap_or_else(|| ka.total_cmp(&kb))
        .then_with(|| a.color.cmp(&b.color))
}

/// Stable sort by grade key, then color.
pub fn sort_sends(sends: &mut [SendRecord]) {
    sends.sort_by(compare_sends);
}
