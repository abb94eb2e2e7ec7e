//! Pull request bucketing and release notes generation.
//!
//! Assigns each pull request to the tag it shipped in, synthesizes a version
//! for untagged work, and renders categorized notes using Tera templates.

use log::*;

use crate::{
    Result,
    analyzer::release::{Buckets, PullRequest, Tag},
};

pub mod bucket;
pub mod config;
pub mod group;
pub mod helpers;
pub mod notes;
pub mod release;
pub mod timestamp;
pub mod version;

/// Buckets pull requests by release and renders them as release notes.
pub struct Analyzer {
    config: config::AnalyzerConfig,
    category_parser: group::CategoryParser,
}

impl Analyzer {
    /// Create analyzer with tolerance and template configuration.
    pub fn new(config: config::AnalyzerConfig) -> Self {
        Self {
            config,
            category_parser: group::CategoryParser::new(),
        }
    }

    /// Assign every pull request to a release bucket.
    pub fn bucket(&self, tags: &[Tag], pull_requests: &[PullRequest]) -> Buckets {
        let buckets = bucket::bucket_pull_requests(
            tags,
            pull_requests,
            self.config.tolerance,
        );

        if !buckets.dropped().is_empty() {
            warn!(
                "{} pull request(s) could not be matched to a tag: {:?}",
                buckets.dropped().len(),
                buckets.dropped()
            );
        }

        buckets
    }

    /// Render bucketed pull requests as Markdown.
    pub fn render(&self, buckets: &Buckets) -> Result<String> {
        notes::render(buckets, &self.config, &self.category_parser)
    }

    /// Bucket and render in one step.
    pub fn generate(
        &self,
        tags: &[Tag],
        pull_requests: &[PullRequest],
    ) -> Result<String> {
        info!(
            "bucketing {} pull requests across {} tags",
            pull_requests.len(),
            tags.len()
        );

        let buckets = self.bucket(tags, pull_requests);
        self.render(&buckets)
    }
}
