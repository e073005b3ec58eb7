mod common;

use dynopay_smoke::{CheckFailure, Config, ProbeRunner};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn passing_check_decodes_json_and_counts() {
    let server = MockServer::start().await;
    common::mount_healthy(&server).await;

    let mut runner = common::test_runner(&server);
    let outcome = runner
        .run_check(
            "Health Check",
            Method::GET,
            "api/health",
            StatusCode::OK,
            None::<&Value>,
            None,
        )
        .await;

    assert!(outcome.passed);
    assert_eq!(outcome.status, Some(200));
    assert_eq!(outcome.payload["status"], "ok");
    assert_eq!(runner.tally().attempted, 1);
    assert_eq!(runner.tally().passed, 1);
}

#[tokio::test]
async fn status_mismatch_fails_with_empty_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let mut runner = common::test_runner(&server);
    let outcome = runner
        .run_check(
            "Health Check",
            Method::GET,
            "api/health",
            StatusCode::OK,
            None::<&Value>,
            None,
        )
        .await;

    assert!(!outcome.passed);
    assert_eq!(outcome.status, Some(500));
    assert_eq!(outcome.payload, json!({}));
    assert!(matches!(
        outcome.failure,
        Some(CheckFailure::UnexpectedStatus {
            expected: 200,
            actual: 500,
            ..
        })
    ));
    assert_eq!(runner.tally().attempted, 1);
    assert_eq!(runner.tally().passed, 0);
}

#[tokio::test]
async fn transport_failure_is_captured_not_propagated() {
    // Grab an address nothing is listening on anymore.
    let server = MockServer::start().await;
    let config = common::test_config(&server);
    drop(server);

    let mut runner = ProbeRunner::new(&config).expect("Failed to build probe runner");
    let outcome = runner
        .run_check(
            "Health Check",
            Method::GET,
            "api/health",
            StatusCode::OK,
            None::<&Value>,
            None,
        )
        .await;

    assert!(!outcome.passed);
    assert_eq!(outcome.status, None);
    assert_eq!(outcome.payload, json!({}));
    assert!(matches!(outcome.failure, Some(CheckFailure::Transport(_))));
    assert_eq!(runner.tally().attempted, 1);
    assert_eq!(runner.tally().passed, 0);
}

#[tokio::test]
async fn slow_backend_times_out_as_failed_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&server)
        .await;

    let config = Config {
        base_url: server.uri(),
        timeout_secs: 1,
    };
    let mut runner = ProbeRunner::new(&config).expect("Failed to build probe runner");
    let outcome = runner
        .run_check(
            "Health Check",
            Method::GET,
            "api/health",
            StatusCode::OK,
            None::<&Value>,
            None,
        )
        .await;

    assert!(!outcome.passed);
    assert_eq!(outcome.status, None);
    assert!(matches!(outcome.failure, Some(CheckFailure::Transport(_))));
    assert_eq!(runner.tally().attempted, 1);
}

#[tokio::test]
async fn non_json_body_falls_back_to_raw_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&server)
        .await;

    let mut runner = common::test_runner(&server);
    let outcome = runner
        .run_check(
            "Health Check",
            Method::GET,
            "api/health",
            StatusCode::OK,
            None::<&Value>,
            None,
        )
        .await;

    assert!(outcome.passed);
    assert_eq!(outcome.payload, Value::String("pong".to_string()));
    assert_eq!(runner.tally().passed, 1);
}

#[tokio::test]
async fn caller_headers_override_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pay/addPayment"))
        .and(header("content-type", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

    let mut runner = common::test_runner(&server);
    let outcome = runner
        .run_check(
            "Payment Creation - SOL",
            Method::POST,
            "pay/addPayment",
            StatusCode::OK,
            Some(&json!({"data": {}})),
            Some(headers),
        )
        .await;

    assert!(outcome.passed);
}

#[tokio::test]
async fn stray_slashes_do_not_break_url_joining() {
    let server = MockServer::start().await;
    common::mount_healthy(&server).await;

    let config = Config {
        base_url: format!("{}/", server.uri()),
        timeout_secs: 2,
    };
    let mut runner = ProbeRunner::new(&config).expect("Failed to build probe runner");
    let outcome = runner
        .run_check(
            "Health Check",
            Method::GET,
            "/api/health",
            StatusCode::OK,
            None::<&Value>,
            None,
        )
        .await;

    assert!(outcome.passed);
}
