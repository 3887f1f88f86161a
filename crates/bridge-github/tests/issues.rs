//! Integration tests for the issue operations against a mock GitHub server.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use bridge_github::{CreateIssue, Error, GitHubClient, GitHubConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> GitHubClient {
    let config = GitHubConfig::new("t", "acme", "octo").expect("valid config");
    GitHubClient::with_base_url(config, server.uri()).expect("client builds")
}

// ============================================================================
// List issues
// ============================================================================

#[tokio::test]
async fn test_list_issue_titles_preserves_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/acme/issues"))
        .and(header("Authorization", "token t"))
        .and(header("X-GitHub-Api-Version", "2022-11-28"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"title": "bug A"}, {"title": "bug B"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let titles = client(&server).list_issue_titles().await.unwrap();
    assert_eq!(titles, vec!["bug A", "bug B"]);
}

#[tokio::test]
async fn test_list_issue_titles_returns_every_issue() {
    let server = MockServer::start().await;

    let issues: Vec<_> = (1..=25)
        .map(|n| json!({"title": format!("issue {n}"), "number": n}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/repos/octo/acme/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(issues)))
        .mount(&server)
        .await;

    let titles = client(&server).list_issue_titles().await.unwrap();
    assert_eq!(titles.len(), 25);
    assert_eq!(titles.first().map(String::as_str), Some("issue 1"));
    assert_eq!(titles.last().map(String::as_str), Some("issue 25"));
}

#[tokio::test]
async fn test_list_issue_titles_empty_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/acme/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let titles = client(&server).list_issue_titles().await.unwrap();
    assert!(titles.is_empty());
}

#[tokio::test]
async fn test_list_issues_keeps_numbers_and_urls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/acme/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"title": "bug A", "number": 3, "html_url": "https://github.com/octo/acme/issues/3"}
        ])))
        .mount(&server)
        .await;

    let issues = client(&server).list_issues().await.unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].number, Some(3));
    assert_eq!(
        issues[0].html_url.as_deref(),
        Some("https://github.com/octo/acme/issues/3")
    );
}

#[tokio::test]
async fn test_list_issues_invalid_json_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/acme/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).list_issue_titles().await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_list_issues_server_error_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/acme/issues"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client(&server).list_issue_titles().await.unwrap_err();
    match err {
        Error::ApiError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_error_body_that_decodes_is_still_an_error() {
    let server = MockServer::start().await;

    // A 404 body that happens to be a valid (empty) array
    Mock::given(method("GET"))
        .and(path("/repos/octo/acme/issues"))
        .respond_with(ResponseTemplate::new(404).set_body_string("[]"))
        .mount(&server)
        .await;

    let err = client(&server).list_issue_titles().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/acme/issues"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Bad credentials"})),
        )
        .mount(&server)
        .await;

    let err = client(&server).list_issues().await.unwrap_err();
    match err {
        Error::AuthenticationFailed { message } => assert!(message.contains("Bad credentials")),
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Create issue
// ============================================================================

#[tokio::test]
async fn test_create_issue_sends_configured_owner_and_repo() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/octo/acme/issues"))
        .and(header("Authorization", "token t"))
        .and(header("X-GitHub-Api-Version", "2022-11-28"))
        .and(body_json(json!({
            "owner": "octo",
            "repo": "acme",
            "title": "Crash on start",
            "body": "Steps to reproduce",
            "labels": ["bug", "discord"],
            "headers": {"X-GitHub-Api-Version": "2022-11-28"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 12,
            "url": "https://api.github.com/repos/octo/acme/issues/12",
            "html_url": "https://github.com/octo/acme/issues/12",
            "title": "Crash on start"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateIssue::new("Crash on start")
        .with_body("Steps to reproduce")
        .with_labels(["bug", "discord"]);

    let created = client(&server).create_issue(&request).await.unwrap();
    assert_eq!(created.number, 12);
    assert_eq!(
        created.url,
        "https://api.github.com/repos/octo/acme/issues/12"
    );
    assert_eq!(created.html_url, "https://github.com/octo/acme/issues/12");
}

#[tokio::test]
async fn test_create_issue_empty_labels_serialize_as_array() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/octo/acme/issues"))
        .and(body_json(json!({
            "owner": "octo",
            "repo": "acme",
            "title": "Title only",
            "body": "",
            "labels": [],
            "headers": {"X-GitHub-Api-Version": "2022-11-28"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 1,
            "url": "https://api.github.com/repos/octo/acme/issues/1",
            "html_url": "https://github.com/octo/acme/issues/1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server)
        .create_issue(&CreateIssue::new("Title only"))
        .await
        .unwrap();
    assert_eq!(created.number, 1);
}

#[tokio::test]
async fn test_create_issue_validation_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/octo/acme/issues"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "Validation Failed"})),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .create_issue(&CreateIssue::new("x"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert!(err.to_string().contains("Validation Failed"));
}

#[tokio::test]
async fn test_create_issue_missing_fields_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/octo/acme/issues"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = client(&server)
        .create_issue(&CreateIssue::new("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

// ============================================================================
// Create issue comment
// ============================================================================

#[tokio::test]
async fn test_create_issue_comment_posts_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/octo/acme/issues/42/comments"))
        .and(header("Authorization", "token t"))
        .and(header("X-GitHub-Api-Version", "2022-11-28"))
        .and(body_json(json!({"body": "looks good"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1001,
            "url": "https://api.github.com/repos/octo/acme/issues/comments/1001",
            "html_url": "https://github.com/octo/acme/issues/42#issuecomment-1001"
        })))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .create_issue_comment(42, "looks good")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_issue_comment_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/octo/acme/issues/9999/comments"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let err = client(&server)
        .create_issue_comment(9999, "hello")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_create_issue_comment_twice_posts_twice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/octo/acme/issues/7/comments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    client.create_issue_comment(7, "same").await.unwrap();
    client.create_issue_comment(7, "same").await.unwrap();
}

// ============================================================================
// Client construction
// ============================================================================

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let config = GitHubConfig::new("t", "acme", "octo").unwrap();
    let client = GitHubClient::with_base_url(config, "https://ghe.example.com/api/v3/").unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("\"https://ghe.example.com/api/v3\""));
    assert!(!debug.contains("token t"));
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let config = GitHubConfig::new("t", "acme", "octo").unwrap();
    // Port 9 (discard) on localhost is not expected to run an HTTP server
    let client = GitHubClient::with_base_url(config, "http://127.0.0.1:9").unwrap();

    let err = client.list_issues().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}
