//! Grade ordering, content collection, and reporting for sends.
//!
//! This crate ties the pieces together:
//! - [`grade`] maps free-text grades onto one sort key
//! - [`collector`] walks a content tree and gathers sends
//! - [`report`] sorts sends and renders list, count, or dates output

pub mod collector;
pub mod grade;
pub mod report;

pub use collector::{collect_sends, scan};
pub use grade::{compare_sends, parse_grade, sort_sends};
pub use report::{Report, ReportMode};
