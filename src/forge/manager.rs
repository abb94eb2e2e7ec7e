//! Manager that wraps forge implementations
use log::*;

use crate::{
    Result,
    analyzer::{
        release::{PullRequest, Tag},
        timestamp::parse_timestamp,
    },
    forge::{
        config::FetchOptions,
        request::{ForgePullRequest, PageRequest, PullRequestPageRequest},
        traits::Forge,
    },
};

/// Drives forge pagination and converts forge records into bucketing
/// inputs.
pub struct ForgeManager {
    forge: Box<dyn Forge>,
    options: FetchOptions,
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>, options: FetchOptions) -> Self {
        Self { forge, options }
    }

    /// Fetches pages in increasing order until an empty page or the page
    /// ceiling is reached.
    fn paginate<T>(
        &self,
        kind: &str,
        mut fetch: impl FnMut(PageRequest) -> Result<Vec<T>>,
    ) -> Result<Vec<T>> {
        let mut items = vec![];

        for page in 1..=self.options.max_pages {
            info!("fetching {kind} page={page}");

            let batch = fetch(PageRequest {
                page,
                per_page: self.options.per_page,
            })?;

            if batch.is_empty() {
                break;
            }

            debug!("received {} {kind} on page {page}", batch.len());
            items.extend(batch);

            if page == self.options.max_pages {
                warn!(
                    "reached max pages ({}) while fetching {kind}: results may be incomplete",
                    self.options.max_pages
                );
            }
        }

        Ok(items)
    }

    /// Fetches every pull request allowed by the configured state filter.
    pub fn fetch_pull_requests(&self) -> Result<Vec<PullRequest>> {
        let state = self.options.state;

        let records = self.paginate("pull requests", |page| {
            self.forge
                .list_pull_requests(PullRequestPageRequest { state, page })
        })?;

        info!("fetched {} pull requests", records.len());

        records.into_iter().map(to_pull_request).collect()
    }

    /// Fetches every tag and resolves its commit timestamp.
    pub fn fetch_tags(&self) -> Result<Vec<Tag>> {
        let records =
            self.paginate("tags", |page| self.forge.list_tags(page))?;

        let mut tags = Vec::with_capacity(records.len());

        for record in records {
            let date = self.forge.get_commit_date(&record.sha)?;
            let timestamp = parse_timestamp(&date)?;
            debug!("tag {} committed at {timestamp}", record.name);
            tags.push(Tag::new(record.name, record.sha, timestamp));
        }

        info!("fetched {} tags", tags.len());

        Ok(tags)
    }
}

fn to_pull_request(record: ForgePullRequest) -> Result<PullRequest> {
    let merged_at = record
        .merged_at
        .as_deref()
        .map(parse_timestamp)
        .transpose()?;

    Ok(PullRequest {
        number: record.number,
        title: record.title,
        body: record.body,
        merged_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::PrNotesError,
        forge::{request::PrState, traits::MockForge},
        test_helpers::{forge_pr, forge_tag, ts},
    };
    use mockall::predicate::eq;

    fn options(max_pages: u32) -> FetchOptions {
        FetchOptions::new(PrState::Closed, 2, max_pages).unwrap()
    }

    #[test]
    fn fetches_pages_until_empty() {
        let mut forge = MockForge::new();

        forge
            .expect_list_pull_requests()
            .with(eq(PullRequestPageRequest {
                state: PrState::Closed,
                page: PageRequest {
                    page: 1,
                    per_page: 2,
                },
            }))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    forge_pr(1, Some("2024-01-01T00:00:00Z")),
                    forge_pr(2, None),
                ])
            });

        forge
            .expect_list_pull_requests()
            .withf(|req| req.page.page == 2)
            .times(1)
            .returning(|_| Ok(vec![forge_pr(3, Some("2024-01-03"))]));

        forge
            .expect_list_pull_requests()
            .withf(|req| req.page.page == 3)
            .times(1)
            .returning(|_| Ok(vec![]));

        let manager = ForgeManager::new(Box::new(forge), options(10));
        let prs = manager.fetch_pull_requests().unwrap();

        let numbers: Vec<u64> = prs.iter().map(|pr| pr.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(prs[0].merged_at, Some(ts("2024-01-01T00:00:00Z")));
        assert_eq!(prs[1].merged_at, None);
        assert_eq!(prs[2].merged_at, Some(ts("2024-01-03T00:00:00Z")));
    }

    #[test_log::test]
    fn stops_at_page_ceiling() {
        let mut forge = MockForge::new();

        forge
            .expect_list_pull_requests()
            .times(2)
            .returning(|req| {
                Ok(vec![forge_pr(req.page.page as u64, None)])
            });

        let manager = ForgeManager::new(Box::new(forge), options(2));
        let prs = manager.fetch_pull_requests().unwrap();

        assert_eq!(prs.len(), 2);
    }

    #[test]
    fn malformed_merge_timestamp_is_fatal() {
        let mut forge = MockForge::new();

        forge
            .expect_list_pull_requests()
            .times(1)
            .returning(|_| Ok(vec![forge_pr(7, Some("yesterday"))]));

        let manager = ForgeManager::new(Box::new(forge), options(1));
        let result = manager.fetch_pull_requests();

        assert!(matches!(
            result,
            Err(PrNotesError::Timestamp { ref input }) if input == "yesterday"
        ));
    }

    #[test]
    fn propagates_forge_errors() {
        let mut forge = MockForge::new();

        forge.expect_list_pull_requests().times(1).returning(|_| {
            Err(PrNotesError::ForgeStatus {
                status: 404,
                body: "Not Found".into(),
            })
        });

        let manager = ForgeManager::new(Box::new(forge), options(5));

        assert!(manager.fetch_pull_requests().is_err());
    }

    #[test]
    fn resolves_tag_commit_dates() {
        let mut forge = MockForge::new();

        forge
            .expect_list_tags()
            .withf(|req| req.page == 1)
            .times(1)
            .returning(|_| {
                Ok(vec![forge_tag("v0.2.0"), forge_tag("nightly")])
            });

        forge
            .expect_list_tags()
            .withf(|req| req.page == 2)
            .times(1)
            .returning(|_| Ok(vec![]));

        forge
            .expect_get_commit_date()
            .withf(|sha| sha == "sha-v0.2.0")
            .times(1)
            .returning(|_| Ok("2024-12-31T10:00:00Z".into()));

        forge
            .expect_get_commit_date()
            .withf(|sha| sha == "sha-nightly")
            .times(1)
            .returning(|_| Ok("2025-01-02T08:30:00+02:00".into()));

        let manager = ForgeManager::new(Box::new(forge), options(10));
        let tags = manager.fetch_tags().unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "v0.2.0");
        assert_eq!(tags[0].timestamp, ts("2024-12-31T10:00:00Z"));
        assert!(tags[0].semver.is_some());
        assert_eq!(tags[1].name, "nightly");
        assert_eq!(tags[1].timestamp, ts("2025-01-02T06:30:00Z"));
        assert!(tags[1].semver.is_none());
    }

    #[test]
    fn tag_commit_lookup_failure_is_fatal() {
        let mut forge = MockForge::new();

        forge
            .expect_list_tags()
            .times(1)
            .returning(|_| Ok(vec![forge_tag("v1.0.0")]));

        forge
            .expect_get_commit_date()
            .times(1)
            .returning(|sha| {
                Err(PrNotesError::forge(format!(
                    "commit {sha} has no committer date"
                )))
            });

        let manager = ForgeManager::new(Box::new(forge), options(1));

        assert!(matches!(
            manager.fetch_tags(),
            Err(PrNotesError::ForgeError(_))
        ));
    }
}
