//! Release notes generation command implementation.
use log::*;
use std::{fs, path::Path};

use crate::{
    Result,
    analyzer::{Analyzer, config::AnalyzerConfig},
    cli::GenerateArgs,
    config::Config,
    forge::{
        config::FetchOptions, github::Github, manager::ForgeManager,
        traits::Forge,
    },
};

/// Execute generate command to fetch pull requests and tags and render
/// release notes.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let options = args.fetch_options(&config.fetch)?;
    let remote = args.remote_config()?;

    info!("generating release notes for {}", remote.path());

    let forge = Github::new(remote)?;
    let notes = run(Box::new(forge), options, config.analyzer_config())?;

    write_notes(&notes, args.output.as_deref())
}

/// Fetches everything up front, then buckets and renders.
pub fn run(
    forge: Box<dyn Forge>,
    options: FetchOptions,
    analyzer_config: AnalyzerConfig,
) -> Result<String> {
    let manager = ForgeManager::new(forge, options);

    let pull_requests = manager.fetch_pull_requests()?;
    let tags = manager.fetch_tags()?;

    Analyzer::new(analyzer_config).generate(&tags, &pull_requests)
}

fn write_notes(notes: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, notes)?;
            info!("release notes written to {}", path.display());
        }
        None => print!("{notes}"),
    }

    Ok(())
}
