//! Changelog bullet collection command implementation.
use log::*;
use std::{fs, path::Path};

use crate::{
    PrNotesError, Result,
    cli::CollectArgs,
    collect::{extract_marked_bullets, pr_marker},
};

/// Execute collect command to print changelog bullets referencing a pull
/// request.
pub fn execute(args: &CollectArgs) -> Result<()> {
    let output = run(&args.changelog_path, args.pr_number)?;
    println!("{output}");
    Ok(())
}

/// Returns the matching bullet blocks, or a notice when nothing matches.
pub fn run(changelog_path: &Path, pr_number: u64) -> Result<String> {
    if !changelog_path.is_file() {
        return Err(PrNotesError::invalid_args(format!(
            "{} does not exist or is not a file",
            changelog_path.display()
        )));
    }

    let marker = pr_marker(pr_number);
    let content = fs::read_to_string(changelog_path)?;

    debug!("scanning {} for {marker}", changelog_path.display());

    let extracted = extract_marked_bullets(content.lines(), &marker);

    if extracted.is_empty() {
        return Ok(format!("No items found that reference {marker}"));
    }

    Ok(extracted.join("\n"))
}
