use serde::Deserialize;
use std::fmt::Display;

/// Pull request lifecycle filter accepted by the forge.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PrState {
    Open,
    Closed,
    #[default]
    All,
}

impl PrState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrState::Open => "open",
            PrState::Closed => "closed",
            PrState::All => "all",
        }
    }
}

impl Display for PrState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Request for one page of a listing, 1-based.
pub struct PageRequest {
    pub page: u32,
    pub per_page: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Request for one page of pull requests, oldest first.
pub struct PullRequestPageRequest {
    pub state: PrState,
    pub page: PageRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Pull request as listed by a forge, timestamps still textual.
pub struct ForgePullRequest {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    /// ISO-8601 merge time, absent when never merged.
    pub merged_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Tag as listed by a forge, before its commit date is resolved.
pub struct ForgeTag {
    pub name: String,
    pub sha: String,
}
