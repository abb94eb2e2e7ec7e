//! Implements the Forge trait for Github
use log::*;
use reqwest::{
    StatusCode, Url,
    blocking::{Client, Response},
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use secrecy::ExposeSecret;
use std::thread::sleep;

use crate::{
    Result,
    error::PrNotesError,
    forge::{
        config::{
            CONNECT_TIMEOUT, MAX_RETRIES, REQUEST_TIMEOUT, RETRY_BACKOFF,
            RemoteConfig,
        },
        github::types::{GithubCommit, GithubPullRequest, GithubTag},
        request::{
            ForgePullRequest, ForgeTag, PageRequest, PullRequestPageRequest,
        },
        traits::Forge,
    },
};

mod types;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Github forge implementation using the blocking reqwest client against
/// the REST API.
pub struct Github {
    config: RemoteConfig,
    base_url: Url,
    client: Client,
}

impl Github {
    /// Create Github client with token authentication and API base URL
    /// configuration for Enterprise instances.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let token = config.token.expose_secret();

        let mut headers = HeaderMap::new();

        let mut token_value =
            HeaderValue::from_str(format!("token {}", token).as_str())?;
        token_value.set_sensitive(true);

        headers.append(AUTHORIZATION, token_value);
        headers.append(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.append(
            USER_AGENT,
            HeaderValue::from_static(concat!(
                "prnotes/",
                env!("CARGO_PKG_VERSION")
            )),
        );

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let base_url = Url::parse(&format!(
            "{}/repos/{}/{}/",
            config.api_url.trim_end_matches('/'),
            config.owner,
            config.repo
        ))?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    /// Sends a GET request, retrying transport failures and 5xx responses.
    fn get(&self, url: Url) -> Result<Response> {
        let mut attempt = 0;

        loop {
            let result = self
                .client
                .get(url.clone())
                .send()
                .map_err(PrNotesError::from)
                .and_then(check_status);

            match result {
                Err(err) if err.is_retryable() && attempt < MAX_RETRIES => {
                    attempt += 1;
                    let delay = RETRY_BACKOFF * attempt;
                    warn!(
                        "{}: request to {} failed, retrying in {:?}: {err}",
                        self.config.path(),
                        url.path(),
                        delay
                    );
                    sleep(delay);
                }
                other => return other,
            }
        }
    }
}

/// Converts non-2xx responses into errors carrying the response body.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(PrNotesError::AuthenticationError(format!(
                "status {}: {body}",
                status.as_u16()
            )))
        }
        _ => Err(PrNotesError::ForgeStatus {
            status: status.as_u16(),
            body,
        }),
    }
}

impl Forge for Github {
    fn list_pull_requests(
        &self,
        req: PullRequestPageRequest,
    ) -> Result<Vec<ForgePullRequest>> {
        let mut url = self.base_url.join("pulls")?;

        url.query_pairs_mut()
            .append_pair("state", req.state.as_str())
            .append_pair("per_page", &req.page.per_page.to_string())
            .append_pair("page", &req.page.page.to_string())
            .append_pair("direction", "asc");

        debug!("fetching pull requests: {url}");

        let pulls: Vec<GithubPullRequest> = self.get(url)?.json()?;

        Ok(pulls.into_iter().map(ForgePullRequest::from).collect())
    }

    fn list_tags(&self, req: PageRequest) -> Result<Vec<ForgeTag>> {
        let mut url = self.base_url.join("tags")?;

        url.query_pairs_mut()
            .append_pair("per_page", &req.per_page.to_string())
            .append_pair("page", &req.page.to_string());

        debug!("fetching tags: {url}");

        let tags: Vec<GithubTag> = self.get(url)?.json()?;

        Ok(tags.into_iter().map(ForgeTag::from).collect())
    }

    fn get_commit_date(&self, sha: &str) -> Result<String> {
        let url = self.base_url.join(&format!("commits/{sha}"))?;

        let commit: GithubCommit = self.get(url)?.json()?;

        commit.committer_date().ok_or_else(|| {
            PrNotesError::forge(format!("commit {sha} has no committer date"))
        })
    }
}
