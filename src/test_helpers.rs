//! Common test helper functions shared across test modules.
use chrono::{DateTime, TimeDelta, Utc};
use secrecy::SecretString;

use crate::{
    analyzer::{
        bucket::DEFAULT_TOLERANCE_SECS,
        release::{PullRequest, Tag},
        timestamp::parse_timestamp,
    },
    forge::{
        config::RemoteConfig,
        request::{ForgePullRequest, ForgeTag},
    },
};

/// Parse a timestamp literal, panicking on malformed test input.
pub fn ts(input: &str) -> DateTime<Utc> {
    parse_timestamp(input).unwrap()
}

/// The default tolerance window.
pub fn tolerance() -> TimeDelta {
    TimeDelta::seconds(DEFAULT_TOLERANCE_SECS)
}

/// Creates a tag whose commit happened at `at`.
pub fn tag(name: &str, at: &str) -> Tag {
    Tag::new(name, format!("sha-{name}"), ts(at))
}

/// Creates a pull request merged at `at`.
pub fn merged_pr(number: u64, title: &str, at: &str) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        body: None,
        merged_at: Some(ts(at)),
    }
}

/// Creates a pull request that was never merged.
pub fn open_pr(number: u64, title: &str) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        body: None,
        merged_at: None,
    }
}

/// Creates a test RemoteConfig pointing at `api_url`.
pub fn create_test_remote_config(api_url: &str) -> RemoteConfig {
    RemoteConfig {
        api_url: api_url.to_string(),
        owner: "owner".to_string(),
        repo: "repo".to_string(),
        token: SecretString::from("test-token".to_string()),
    }
}

/// Creates a forge pull request record as returned by a forge page.
pub fn forge_pr(number: u64, merged_at: Option<&str>) -> ForgePullRequest {
    ForgePullRequest {
        number,
        title: format!("[FEAT] change {number}"),
        body: None,
        merged_at: merged_at.map(String::from),
    }
}

/// Creates a forge tag record as returned by a forge page.
pub fn forge_tag(name: &str) -> ForgeTag {
    ForgeTag {
        name: name.to_string(),
        sha: format!("sha-{name}"),
    }
}
