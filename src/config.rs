//! Configuration loading and parsing for `prnotes.toml` files.
//!
//! Every field is optional. Values given on the command line take
//! precedence over values read from the file.
use log::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::{
    PrNotesError, Result,
    analyzer::config::{
        AnalyzerConfig, DEFAULT_INTRO, DEFAULT_MOTIVATION_PLACEHOLDER,
        DEFAULT_TEMPLATE, DEFAULT_TITLE,
    },
    forge::request::PrState,
};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "prnotes.toml";

/// Release notes document configuration using Tera syntax.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct NotesConfig {
    /// Document title.
    pub title: String,
    /// Paragraph under the document heading.
    pub intro: String,
    /// Tera template for the whole document.
    pub template: String,
    /// Text used when a pull request has no motivation section.
    pub motivation_placeholder: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            intro: DEFAULT_INTRO.into(),
            template: DEFAULT_TEMPLATE.into(),
            motivation_placeholder: DEFAULT_MOTIVATION_PLACEHOLDER.into(),
        }
    }
}

/// Forge fetch settings. Unset values fall back to CLI defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub per_page: Option<u32>,
    pub max_pages: Option<u32>,
    pub state: Option<PrState>,
}

/// Root configuration structure for `prnotes.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document settings.
    pub notes: NotesConfig,
    /// Forge fetch settings.
    pub fetch: FetchConfig,
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads configuration from `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Loads configuration from an explicit path, or from
    /// [`DEFAULT_CONFIG_FILE`] in the working directory when it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(PrNotesError::invalid_args(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }

            info!("loading config from {}", path.display());
            return Self::from_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);

        if default_path.is_file() {
            info!("loading config from {DEFAULT_CONFIG_FILE}");
            return Self::from_file(default_path);
        }

        debug!("no {DEFAULT_CONFIG_FILE} found: using defaults");
        Ok(Self::default())
    }

    /// Analyzer settings derived from the `[notes]` table.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            title: self.notes.title.clone(),
            intro: self.notes.intro.clone(),
            template: self.notes.template.clone(),
            motivation_placeholder: self.notes.motivation_placeholder.clone(),
            ..AnalyzerConfig::default()
        }
    }
}
