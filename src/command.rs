//! Command execution for prnotes.
//!
//! Each subcommand has an `execute` entry point taking its parsed CLI
//! arguments, and a `run` function holding the command's logic without
//! process-level side effects so it can be tested directly.

/// Release notes generation from forge pull requests and tags.
pub mod generate;

/// Extraction of changelog bullets that reference a pull request.
pub mod collect;
