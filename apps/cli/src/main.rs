//! sends CLI: report climbing sends logged in a static site's frontmatter.
//!
//! Walks `<site>/content/<type>` for index documents, sorts their sends by
//! grade, and prints them as a list, per-grade counts, or the dates a grade
//! was sent.

mod commands;

use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = commands::parse_args();
    commands::init_tracing(&cli);
    commands::run(cli)
}
