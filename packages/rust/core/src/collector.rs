//! Content tree traversal.
//!
//! Walks `<site>/content/<type>`, parses the frontmatter of every index
//! document, and gathers the sends they log. A document that cannot be read
//! or parsed contributes nothing; a traversal error aborts the walk.

use std::path::Path;

use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use sends_markdown::{extract_sends, read_frontmatter};
use sends_shared::{Result, ScanConfig, SendRecord, SendsError};

/// Collect sends from the content directory named by `config`.
///
/// Fails with [`SendsError::MissingContent`] when that directory does not
/// exist.
pub fn scan(config: &ScanConfig) -> Result<Vec<SendRecord>> {
    let content_path = config.content_path();

    // Anything other than a definite "not found" is left for the walk to report.
    if let Ok(false) = content_path.try_exists() {
        return Err(SendsError::MissingContent { path: content_path });
    }

    collect_sends(&content_path, &config.index_file)
}

/// Walk `root` and collect the sends of every file named `index_file`
/// (case-insensitive), in file-name order.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn collect_sends(root: &Path, index_file: &str) -> Result<Vec<SendRecord>> {
    let wanted = index_file.to_lowercase();
    let mut sends = Vec::new();
    let mut documents = 0usize;
    let mut skipped = 0usize;

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| SendsError::walk(root, e))?;

        if entry.file_type().is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().to_lowercase() != wanted {
            continue;
        }

        documents += 1;
        match read_frontmatter(entry.path()) {
            Ok(frontmatter) => {
                let found = extract_sends(&frontmatter);
                debug!(path = %entry.path().display(), sends = found.len(), "parsed document");
                sends.extend(found);
            }
            Err(e) => {
                skipped += 1;
                debug!(path = %entry.path().display(), error = %e, "skipping document");
            }
        }
    }

    info!(documents, skipped, sends = sends.len(), "content walk complete");

    Ok(sends)
}
