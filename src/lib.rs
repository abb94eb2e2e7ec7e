//! Release notes generation from forge pull requests and tags.
//!
//! Pull requests are assigned to the release they shipped in by comparing
//! merge times with tag commit times, grouped by the bracketed marker in
//! their titles, and rendered as a Markdown document.
pub mod analyzer;
pub mod cli;
pub mod collect;
pub mod command;
pub mod config;
pub mod error;
pub mod forge;

pub use error::{PrNotesError, Result};

#[cfg(test)]
pub mod test_helpers;
