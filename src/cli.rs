//! CLI argument parsing and forge platform configuration.
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use std::{env, path::PathBuf};
use url::Url;

use crate::{
    PrNotesError, Result,
    config::FetchConfig,
    forge::{
        config::{
            DEFAULT_API_URL, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, FetchOptions,
            RemoteConfig,
        },
        request::PrState,
    },
};

/// Environment variable consulted when no token is passed on the command
/// line.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Global CLI arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Release notes subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch pull requests and tags and render release notes.
    Generate(GenerateArgs),

    /// Print changelog bullets that reference a pull request.
    Collect(CollectArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    #[arg(long)]
    /// Repository owner (user or organization).
    pub owner: String,

    #[arg(long)]
    /// Repository name.
    pub repo: String,

    #[arg(long, default_value = "")]
    /// GitHub access token. Falls back to GITHUB_TOKEN env var.
    pub token: String,

    #[arg(long, default_value = DEFAULT_API_URL)]
    /// REST API root, for GitHub Enterprise instances.
    pub api_url: String,

    #[arg(long, value_enum)]
    /// Pull request state filter [default: all].
    pub state: Option<PrState>,

    #[arg(long)]
    /// Items per API request, at most 100 [default: 100].
    pub per_page: Option<u32>,

    #[arg(long)]
    /// Maximum number of pages to fetch [default: 10].
    pub max_pages: Option<u32>,

    #[arg(long, short)]
    /// Write release notes to this file instead of stdout.
    pub output: Option<PathBuf>,

    #[arg(long)]
    /// Path to a prnotes.toml config file.
    pub config: Option<PathBuf>,
}

/// Arguments for the `collect` subcommand.
#[derive(clap::Args, Debug)]
pub struct CollectArgs {
    /// Path to the changelog Markdown file.
    pub changelog_path: PathBuf,

    /// Pull request number to search for, e.g. 31 for #31. The marker must
    /// not be followed by a letter or digit, so 31 does not match #310.
    pub pr_number: u64,
}

impl GenerateArgs {
    /// Configure remote repository connection from CLI arguments.
    pub fn remote_config(&self) -> Result<RemoteConfig> {
        self.remote_config_with_env_token(env::var(TOKEN_ENV_VAR).ok())
    }

    fn remote_config_with_env_token(
        &self,
        env_token: Option<String>,
    ) -> Result<RemoteConfig> {
        if self.owner.is_empty() || self.repo.is_empty() {
            return Err(PrNotesError::invalid_args(
                "owner and repo must not be empty",
            ));
        }

        validate_api_url(&self.api_url)?;

        let mut token = self.token.clone();

        if token.is_empty()
            && let Some(env_var_token) = env_token
        {
            token = env_var_token;
        }

        if token.is_empty() {
            return Err(PrNotesError::invalid_args(format!(
                "must set github token with --token or {TOKEN_ENV_VAR}"
            )));
        }

        Ok(RemoteConfig {
            api_url: self.api_url.clone(),
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            token: SecretString::from(token),
        })
    }

    /// Fetch settings from explicit flags, then the config file, then
    /// defaults.
    pub fn fetch_options(&self, file: &FetchConfig) -> Result<FetchOptions> {
        FetchOptions::new(
            self.state.or(file.state).unwrap_or_default(),
            self.per_page
                .or(file.per_page)
                .unwrap_or(DEFAULT_PAGE_SIZE.into()),
            self.max_pages.or(file.max_pages).unwrap_or(DEFAULT_MAX_PAGES),
        )
    }
}

/// Validate API URL uses HTTP or HTTPS scheme.
fn validate_api_url(api_url: &str) -> Result<()> {
    let parsed = Url::parse(api_url)?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(PrNotesError::invalid_args(
            "only http and https schemes are supported for api urls",
        )),
    }
}
