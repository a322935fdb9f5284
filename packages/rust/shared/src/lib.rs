//! Shared types, error model, and configuration for sends.
//!
//! This crate is the foundation depended on by all other sends crates.
//! It provides:
//! - [`SendsError`] — the unified error type
//! - Domain types ([`SendRecord`], [`Frontmatter`])
//! - Configuration ([`AppConfig`], [`ScanConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, ScanConfig, config_dir, config_file_path, load_config,
    load_config_from,
};
pub use error::{Result, SendsError};
pub use types::{Frontmatter, SendRecord};
