//! Binary entrypoint.
//!
//! The crate is split into Clean Architecture layers:
//! - domain: link records, ports, error kinds
//! - usecase: extract → render → write workflow
//! - infrastructure: scraper parsing, file I/O, template, logging
//! - interface: CLI wiring

use anyhow::Result;

fn main() -> Result<()> {
    pocket_to_bookmarks::interface::cli::run()
}
