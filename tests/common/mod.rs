//! Shared helpers for probe integration tests.

use dynopay_smoke::{Config, ProbeRunner};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config pointing at a mock backend, with a short timeout to keep tests fast.
pub fn test_config(server: &MockServer) -> Config {
    Config {
        base_url: server.uri(),
        timeout_secs: 2,
    }
}

#[allow(dead_code)]
pub fn test_runner(server: &MockServer) -> ProbeRunner {
    ProbeRunner::new(&test_config(server)).expect("Failed to build probe runner")
}

/// Mount a healthy `GET /api/health` endpoint.
#[allow(dead_code)]
pub async fn mount_healthy(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(server)
        .await;
}
