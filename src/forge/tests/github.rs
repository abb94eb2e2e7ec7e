//! Tests for the Github client against a local mock server.
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

use crate::{
    Result,
    error::PrNotesError,
    forge::{
        github::Github,
        request::{
            ForgePullRequest, ForgeTag, PageRequest, PrState,
            PullRequestPageRequest,
        },
        traits::Forge,
    },
    test_helpers::create_test_remote_config,
};

/// The blocking client owns its own runtime, so it must be created, used
/// and dropped off the async test runtime.
async fn with_github<T, F>(server: &MockServer, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&Github) -> Result<T> + Send + 'static,
{
    let remote = create_test_remote_config(&server.uri());

    tokio::task::spawn_blocking(move || {
        let github = Github::new(remote)?;
        f(&github)
    })
    .await
    .unwrap()
}

fn page(page: u32, per_page: u8) -> PageRequest {
    PageRequest { page, per_page }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_pull_requests_sends_query_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/pulls"))
        .and(query_param("state", "closed"))
        .and(query_param("per_page", "50"))
        .and(query_param("page", "2"))
        .and(query_param("direction", "asc"))
        .and(header("Authorization", "token test-token"))
        .and(header("Accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "number": 15,
                "title": "[FEAT] Implement ROS task executor",
                "body": "## Motivation\nexample",
                "merged_at": "2024-12-30T09:00:00Z",
                "state": "closed"
            },
            {
                "number": 16,
                "title": "[FIX] flaky test",
                "body": null,
                "merged_at": null
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let prs = with_github(&server, |github| {
        github.list_pull_requests(PullRequestPageRequest {
            state: PrState::Closed,
            page: page(2, 50),
        })
    })
    .await
    .unwrap();

    assert_eq!(
        prs,
        vec![
            ForgePullRequest {
                number: 15,
                title: "[FEAT] Implement ROS task executor".into(),
                body: Some("## Motivation\nexample".into()),
                merged_at: Some("2024-12-30T09:00:00Z".into()),
            },
            ForgePullRequest {
                number: 16,
                title: "[FIX] flaky test".into(),
                body: None,
                merged_at: None,
            },
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_tags_and_commit_date() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/tags"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "v0.2.0", "commit": { "sha": "abc123", "url": "x" } }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/commits/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "abc123",
            "commit": {
                "author": { "date": "2024-12-31T09:00:00Z" },
                "committer": { "date": "2024-12-31T10:00:00Z" }
            }
        })))
        .mount(&server)
        .await;

    let (tags, date) = with_github(&server, |github| {
        let tags = github.list_tags(page(1, 100))?;
        let date = github.get_commit_date(&tags[0].sha)?;
        Ok((tags, date))
    })
    .await
    .unwrap();

    assert_eq!(
        tags,
        vec![ForgeTag {
            name: "v0.2.0".into(),
            sha: "abc123".into()
        }]
    );
    assert_eq!(date, "2024-12-31T10:00:00Z");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_committer_date_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/commits/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "commit": { "committer": null }
        })))
        .mount(&server)
        .await;

    let result =
        with_github(&server, |github| github.get_commit_date("abc123")).await;

    assert!(matches!(result, Err(PrNotesError::ForgeError(_))));
}

#[test_log::test(tokio::test(flavor = "multi_thread"))]
async fn test_retries_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/tags"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let tags = with_github(&server, |github| github.list_tags(page(1, 100)))
        .await
        .unwrap();

    assert!(tags.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gives_up_after_max_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/tags"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(3)
        .mount(&server)
        .await;

    let result =
        with_github(&server, |github| github.list_tags(page(1, 100))).await;

    assert!(matches!(
        result,
        Err(PrNotesError::ForgeStatus { status: 502, ref body }) if body == "bad gateway"
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/pulls"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "Not Found" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = with_github(&server, |github| {
        github.list_pull_requests(PullRequestPageRequest {
            state: PrState::All,
            page: page(1, 100),
        })
    })
    .await;

    match result {
        Err(PrNotesError::ForgeStatus { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("Not Found"));
        }
        other => panic!("expected 404 forge status, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unauthorized_is_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/tags"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let result =
        with_github(&server, |github| github.list_tags(page(1, 100))).await;

    assert!(matches!(result, Err(PrNotesError::AuthenticationError(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_json_is_forge_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/tags"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("{ not json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result =
        with_github(&server, |github| github.list_tags(page(1, 100))).await;

    assert!(matches!(result, Err(PrNotesError::ForgeError(_))));
}
