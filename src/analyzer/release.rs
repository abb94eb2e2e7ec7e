//! Data types for tags, pull requests, and release buckets.
use chrono::{DateTime, Utc};
use log::*;
use semver::Version;
use std::fmt::Display;

use crate::analyzer::version;

/// Git tag that marks a release boundary, resolved to the instant of the
/// commit it points at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// Tag name.
    pub name: String,
    /// Git commit SHA of the tag.
    pub sha: String,
    /// Committer timestamp of the tagged commit.
    pub timestamp: DateTime<Utc>,
    /// Semantic version parsed from tag name, if it is one.
    pub semver: Option<Version>,
}

impl Tag {
    /// Build a tag and parse its name as a semantic version. Names that are
    /// not semver keep `semver` empty.
    pub fn new(
        name: impl Into<String>,
        sha: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let name = name.into();
        let semver = version::parse_tag_version(&name);

        if semver.is_none() {
            warn!("tag {name} is not a semantic version");
        }

        Self {
            name,
            sha: sha.into(),
            timestamp,
            semver,
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Pull request snapshot as needed for bucketing and rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    /// Absent for pull requests that were never merged.
    pub merged_at: Option<DateTime<Utc>>,
}

/// Pull requests attributed to one release, or to the unreleased bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseBucket {
    /// Human readable heading, e.g. `v1.2.0 (2024-05-01)`.
    pub label: String,
    /// Ordered by ascending pull request number.
    pub pull_requests: Vec<PullRequest>,
    /// Whether this is the synthetic bucket for work not yet tagged.
    pub unreleased: bool,
}

impl ReleaseBucket {
    /// Bucket for a tag, labelled with the tag name and its commit date.
    pub fn for_tag(tag: &Tag, pull_requests: Vec<PullRequest>) -> Self {
        Self {
            label: format!(
                "{} ({})",
                tag.name,
                tag.timestamp.format("%Y-%m-%d")
            ),
            pull_requests,
            unreleased: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pull_requests.is_empty()
    }
}

/// Ordered bucket sequence handed to the renderer. The unreleased bucket is
/// always first, tag buckets follow newest to oldest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    pub(crate) buckets: Vec<ReleaseBucket>,
    pub(crate) dropped: Vec<u64>,
}

impl Buckets {
    /// The synthetic unreleased bucket, possibly empty.
    pub fn unreleased(&self) -> Option<&ReleaseBucket> {
        self.buckets.first().filter(|b| b.unreleased)
    }

    /// Tag buckets in descending commit order.
    pub fn tagged(&self) -> &[ReleaseBucket] {
        match self.unreleased() {
            Some(_) => &self.buckets[1..],
            None => &self.buckets,
        }
    }

    /// Every bucket, unreleased first.
    pub fn all(&self) -> &[ReleaseBucket] {
        &self.buckets
    }

    /// Buckets that appear in rendered output: an empty unreleased bucket is
    /// left out, empty tag buckets are kept.
    pub fn visible(&self) -> impl Iterator<Item = &ReleaseBucket> {
        self.buckets.iter().filter(|b| !(b.unreleased && b.is_empty()))
    }

    /// Numbers of merged pull requests that could not be placed in any
    /// bucket.
    pub fn dropped(&self) -> &[u64] {
        &self.dropped
    }
}
