//! Assigns pull requests to the release they shipped in.
//!
//! Bucketing runs in two stages over tags sorted oldest to newest:
//!
//! 1. [`assign`] places each merged pull request in the first tag whose
//!    commit is after the merge, or within the tolerance window of it.
//!    Pull requests older than every tag go to the earliest tag, newer ones
//!    to unreleased, and anything else is dropped with a warning.
//! 2. [`correct`] moves pull requests that ended up in the latest tag but
//!    were merged more than the tolerance window after it into unreleased.
//!
//! [`bucket_pull_requests`] runs both stages and produces the ordered
//! [`Buckets`] the renderer consumes.
use chrono::{DateTime, TimeDelta, Utc};
use log::*;

use crate::analyzer::{
    release::{Buckets, PullRequest, ReleaseBucket, Tag},
    version,
};

/// Seconds within which a merge and a tag commit count as the same release.
pub const DEFAULT_TOLERANCE_SECS: i64 = 10;

/// Outcome of the matching stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// Pull requests per tag, parallel to the ascending tag slice.
    pub by_tag: Vec<Vec<PullRequest>>,
    /// Unmerged pull requests and work merged after the latest tag.
    pub unreleased: Vec<PullRequest>,
    /// Merged pull requests that matched no tag.
    pub dropped: Vec<u64>,
}

/// Sort tags by commit instant, oldest first. Tags sharing an instant keep
/// their input order.
pub fn sort_tags_ascending(tags: &[Tag]) -> Vec<Tag> {
    let mut sorted = tags.to_vec();
    sorted.sort_by_key(|tag| tag.timestamp);
    sorted
}

/// Index of the first tag that is either after the merge or within
/// `tolerance` of it.
pub fn select_tag(
    merged_at: DateTime<Utc>,
    tags_asc: &[Tag],
    tolerance: TimeDelta,
) -> Option<usize> {
    tags_asc.iter().position(|tag| {
        tag.timestamp > merged_at
            || (tag.timestamp - merged_at).abs() < tolerance
    })
}

/// Matching stage. `tags_asc` must be sorted with [`sort_tags_ascending`].
pub fn assign(
    tags_asc: &[Tag],
    pull_requests: &[PullRequest],
    tolerance: TimeDelta,
) -> Assignment {
    let mut assignment = Assignment {
        by_tag: vec![Vec::new(); tags_asc.len()],
        ..Assignment::default()
    };

    let (Some(earliest), Some(latest)) = (tags_asc.first(), tags_asc.last())
    else {
        info!("no tags found: all pull requests are unreleased");
        assignment.unreleased = pull_requests.to_vec();
        return assignment;
    };

    for pr in pull_requests {
        let Some(merged_at) = pr.merged_at else {
            debug!("pull request #{} is not merged: unreleased", pr.number);
            assignment.unreleased.push(pr.clone());
            continue;
        };

        match select_tag(merged_at, tags_asc, tolerance) {
            Some(idx) => {
                debug!(
                    "pull request #{} belongs to tag {}",
                    pr.number, tags_asc[idx]
                );
                assignment.by_tag[idx].push(pr.clone());
            }
            None if merged_at < earliest.timestamp => {
                assignment.by_tag[0].push(pr.clone());
            }
            None if merged_at > latest.timestamp => {
                assignment.unreleased.push(pr.clone());
            }
            None => {
                warn!(
                    "pull request #{} merged at {merged_at} can't be assigned to any tag",
                    pr.number
                );
                assignment.dropped.push(pr.number);
            }
        }
    }

    assignment
}

/// Correction stage: anything in the latest tag's bucket merged after
/// `latest + tolerance` is moved to unreleased.
pub fn correct(
    mut assignment: Assignment,
    tags_asc: &[Tag],
    tolerance: TimeDelta,
) -> Assignment {
    let Some(latest) = tags_asc.last() else {
        return assignment;
    };

    let cutoff = latest.timestamp + tolerance;

    if let Some(latest_bucket) = assignment.by_tag.last_mut() {
        let (stale, kept): (Vec<_>, Vec<_>) = std::mem::take(latest_bucket)
            .into_iter()
            .partition(|pr| pr.merged_at.is_some_and(|m| m > cutoff));

        *latest_bucket = kept;

        for pr in stale.iter() {
            info!(
                "pull request #{} was merged after tag {}: moving to unreleased",
                pr.number, latest
            );
        }

        assignment.unreleased.extend(stale);
    }

    assignment
}

/// Bucket pull requests by the release they shipped in.
///
/// Every merged pull request lands in exactly one bucket unless it is
/// reported in [`Buckets::dropped`]. Unmerged pull requests are always
/// unreleased.
pub fn bucket_pull_requests(
    tags: &[Tag],
    pull_requests: &[PullRequest],
    tolerance: TimeDelta,
) -> Buckets {
    let tags_asc = sort_tags_ascending(tags);

    let assignment = correct(
        assign(&tags_asc, pull_requests, tolerance),
        &tags_asc,
        tolerance,
    );

    let mut unreleased = assignment.unreleased;
    unreleased.sort_by_key(|pr| pr.number);

    let mut buckets = Vec::with_capacity(tags_asc.len() + 1);

    buckets.push(ReleaseBucket {
        label: version::unreleased_label(tags_asc.last()),
        pull_requests: unreleased,
        unreleased: true,
    });

    for (tag, mut pull_requests) in
        tags_asc.iter().zip(assignment.by_tag).rev()
    {
        pull_requests.sort_by_key(|pr| pr.number);
        buckets.push(ReleaseBucket::for_tag(tag, pull_requests));
    }

    Buckets {
        buckets,
        dropped: assignment.dropped,
    }
}

#[cfg(test)]
#[path = "./bucket_tests.rs"]
mod tests;
