//! Sequential HTTP probe runner.
//!
//! One request is issued and fully resolved before the next begins; the tally
//! is owned by the runner, so a run's counters never outlive it.

use crate::config::Config;
use crate::models::{CheckFailure, CheckOutcome, RunTally};
use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// How much of a mismatched response body gets logged.
const BODY_EXCERPT_CHARS: usize = 200;

pub struct ProbeRunner {
    client: Client,
    base_url: String,
    tally: RunTally,
}

impl ProbeRunner {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tally: RunTally::default(),
        })
    }

    pub fn tally(&self) -> RunTally {
        self.tally
    }

    /// Run one named check against the backend.
    ///
    /// Every invocation counts exactly one attempt, whatever the outcome.
    /// Default headers carry a JSON content type; caller-supplied headers win
    /// on collision. Transport faults (timeout, connection refused, DNS) are
    /// captured in the returned outcome instead of propagating, so a dead
    /// backend fails checks rather than the run.
    pub async fn run_check<B>(
        &mut self,
        name: &str,
        method: Method,
        path: &str,
        expected_status: StatusCode,
        body: Option<&B>,
        headers: Option<HeaderMap>,
    ) -> CheckOutcome
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let mut merged = HeaderMap::new();
        merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(extra) = headers {
            for (key, value) in extra.iter() {
                merged.insert(key, value.clone());
            }
        }

        self.tally.record_attempt();
        tracing::info!(check = name, method = %method, url = %url, "Running check");

        let mut request = self.client.request(method, &url).headers(merged);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(check = name, error = %e, "Check failed: transport error");
                return Self::failed(name, None, CheckFailure::Transport(e));
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(check = name, error = %e, "Check failed: could not read body");
                return Self::failed(name, Some(status.as_u16()), CheckFailure::Transport(e));
            }
        };

        if status != expected_status {
            let excerpt = truncate_chars(&text, BODY_EXCERPT_CHARS);
            tracing::warn!(
                check = name,
                expected = expected_status.as_u16(),
                actual = status.as_u16(),
                body = %excerpt,
                "Check failed: unexpected status"
            );
            return Self::failed(
                name,
                Some(status.as_u16()),
                CheckFailure::UnexpectedStatus {
                    expected: expected_status.as_u16(),
                    actual: status.as_u16(),
                    body_excerpt: excerpt,
                },
            );
        }

        self.tally.record_pass();
        tracing::info!(check = name, status = status.as_u16(), "Check passed");

        // A non-JSON body on a matching status is kept as raw text, not failed.
        let payload = serde_json::from_str(&text).unwrap_or(Value::String(text));

        CheckOutcome {
            name: name.to_string(),
            passed: true,
            status: Some(status.as_u16()),
            payload,
            failure: None,
        }
    }

    fn failed(name: &str, status: Option<u16>, failure: CheckFailure) -> CheckOutcome {
        CheckOutcome {
            name: name.to_string(),
            passed: false,
            status,
            payload: Value::Object(Default::default()),
            failure: Some(failure),
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
