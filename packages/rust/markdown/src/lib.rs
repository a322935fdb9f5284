//! Frontmatter extraction and send-line splitting for content documents.
//!
//! A document carries its send log in a YAML header between two `---` lines:
//!
//! ```text
//! ---
//! date: 2024-03-15
//! sends:
//!   - Red V4
//!   - Blue V4+ flash
//! ---
//! ```
//!
//! [`read_frontmatter`] turns a document into a [`Frontmatter`], and
//! [`extract_sends`] turns that into zero or more [`SendRecord`]s.

mod send_line;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use sends_shared::{Frontmatter, Result, SendRecord, SendsError};

pub use send_line::{SendParts, parse_send, split_send};

/// Header delimiter line.
const DELIMITER: &str = "---";

// ---------------------------------------------------------------------------
// Frontmatter
// ---------------------------------------------------------------------------

/// Raw YAML shape; absent or null fields become empty values.
#[derive(Debug, Default, Deserialize)]
struct RawFrontmatter {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    sends: Option<Vec<String>>,
}

impl From<RawFrontmatter> for Frontmatter {
    fn from(raw: RawFrontmatter) -> Self {
        Self {
            date: raw.date.unwrap_or_default(),
            sends: raw.sends.unwrap_or_default(),
        }
    }
}

/// Return the header text between the first two `---` lines.
///
/// Anything before the opening delimiter is ignored. Both delimiters are
/// required.
pub fn split_frontmatter(text: &str) -> Result<String> {
    let mut lines = text.lines();

    if !lines.by_ref().any(|line| line == DELIMITER) {
        return Err(SendsError::parse("missing opening frontmatter delimiter"));
    }

    let mut header = Vec::new();
    for line in lines {
        if line == DELIMITER {
            return Ok(header.join("\n"));
        }
        header.push(line);
    }

    Err(SendsError::parse("missing closing frontmatter delimiter"))
}

/// Parse the frontmatter of a document's full text.
pub fn parse_frontmatter(text: &str) -> Result<Frontmatter> {
    let header = split_frontmatter(text)?;

    if header.trim().is_empty() {
        return Ok(Frontmatter::default());
    }

    let raw: RawFrontmatter = serde_yaml::from_str(&header)
        .map_err(|e| SendsError::parse(format!("invalid frontmatter: {e}")))?;

    Ok(raw.into())
}

/// Read a document from disk and parse its frontmatter.
///
/// Only the header is read and decoded, so the body may hold any bytes.
#[instrument(level = "trace", skip_all, fields(path = %path.display()))]
pub fn read_frontmatter(path: &Path) -> Result<Frontmatter> {
    let file = File::open(path).map_err(|e| SendsError::io(path, e))?;
    let header = read_header(BufReader::new(file)).map_err(|e| SendsError::io(path, e))?;
    let text = String::from_utf8(header)
        .map_err(|e| SendsError::parse(format!("frontmatter is not valid UTF-8: {e}")))?;
    parse_frontmatter(&text)
}

/// Collect the bytes from the opening `---` line through the closing one.
///
/// Lines before the opening delimiter are dropped and nothing after the
/// closing delimiter is read.
fn read_header<R: BufRead>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut header = Vec::new();
    let mut line = Vec::new();
    let mut delimiters = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        let content = line.strip_suffix(b"\n").unwrap_or(&line[..]);
        let content = content.strip_suffix(b"\r").unwrap_or(content);
        let is_delimiter = content == DELIMITER.as_bytes();

        if is_delimiter {
            delimiters += 1;
        }
        if delimiters > 0 {
            header.extend_from_slice(&line);
        }
        if delimiters == 2 {
            break;
        }
    }

    Ok(header)
}

// ---------------------------------------------------------------------------
// Sends
// ---------------------------------------------------------------------------

/// Split every `sends` entry into a record carrying the document date.
///
/// Entries with no recognisable grade are dropped; their siblings are kept.
pub fn extract_sends(frontmatter: &Frontmatter) -> Vec<SendRecord> {
    frontmatter
        .sends
        .iter()
        .filter_map(|line| {
            let send = parse_send(line, &frontmatter.date);
            if send.is_none() {
                debug!(line = %line, "send line has no grade, skipping");
            }
            send
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
