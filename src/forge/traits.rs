//! Traits related to remote git forges
#[cfg(test)]
use mockall::automock;

use crate::{
    Result,
    forge::request::{
        ForgePullRequest, ForgeTag, PageRequest, PullRequestPageRequest,
    },
};

/// Page-level operations a forge provides. Callers drive pagination.
#[cfg_attr(test, automock)]
pub trait Forge {
    /// One page of pull requests. An empty page marks the end.
    fn list_pull_requests(
        &self,
        req: PullRequestPageRequest,
    ) -> Result<Vec<ForgePullRequest>>;

    /// One page of tags. An empty page marks the end.
    fn list_tags(&self, req: PageRequest) -> Result<Vec<ForgeTag>>;

    /// ISO-8601 committer date of a commit.
    fn get_commit_date(&self, sha: &str) -> Result<String>;
}
