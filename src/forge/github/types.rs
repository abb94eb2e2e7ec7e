use serde::Deserialize;

use crate::forge::request::{ForgePullRequest, ForgeTag};

#[derive(Debug, Deserialize)]
pub struct GithubPullRequest {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub merged_at: Option<String>,
}

impl From<GithubPullRequest> for ForgePullRequest {
    fn from(pr: GithubPullRequest) -> Self {
        Self {
            number: pr.number,
            title: pr.title,
            body: pr.body,
            merged_at: pr.merged_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GithubTagCommit {
    pub sha: String,
}

#[derive(Debug, Deserialize)]
pub struct GithubTag {
    pub name: String,
    pub commit: GithubTagCommit,
}

impl From<GithubTag> for ForgeTag {
    fn from(tag: GithubTag) -> Self {
        Self {
            name: tag.name,
            sha: tag.commit.sha,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GithubSignature {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GithubCommitDetails {
    pub committer: Option<GithubSignature>,
}

#[derive(Debug, Deserialize)]
pub struct GithubCommit {
    pub commit: GithubCommitDetails,
}

impl GithubCommit {
    pub fn committer_date(self) -> Option<String> {
        self.commit.committer.and_then(|c| c.date)
    }
}
