//! Configured-currency coverage check.

use crate::runner::ProbeRunner;
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// Currency codes the backend is expected to accept, bare or with a network
/// suffix such as `-XRPL` or `-ERC20`.
pub const EXPECTED_CURRENCIES: [&str; 5] = ["SOL", "XRP", "POLYGON", "RLUSD", "BCH"];

/// What the backend advertises, measured against [`EXPECTED_CURRENCIES`].
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencySupport {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub usdt_polygon: bool,
    pub rlusd_xrpl: bool,
    pub rlusd_erc20: bool,
}

impl CurrencySupport {
    fn from_configured(configured: &[String]) -> Self {
        let mut found = Vec::new();
        let mut missing = Vec::new();
        for code in EXPECTED_CURRENCIES {
            if is_supported(configured, code) {
                found.push(code.to_string());
            } else {
                missing.push(code.to_string());
            }
        }

        Self {
            found,
            missing,
            // USDT-POLYGON must appear verbatim, not via suffix matching.
            usdt_polygon: configured.iter().any(|c| c == "USDT-POLYGON"),
            rlusd_xrpl: configured.iter().any(|c| c.contains("RLUSD-XRPL")),
            rlusd_erc20: configured.iter().any(|c| c.contains("RLUSD-ERC20")),
        }
    }
}

/// A bare code is satisfied by an exact entry or any `CODE-<network>` variant.
fn is_supported(configured: &[String], code: &str) -> bool {
    configured
        .iter()
        .any(|c| c == code || c.starts_with(&format!("{code}-")))
}

/// Read `configured_currencies` out of the response payload, unwrapping the
/// optional `data` envelope.
fn configured_currencies(payload: &Value) -> Vec<String> {
    let data = payload.get("data").unwrap_or(payload);
    data.get("configured_currencies")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub async fn check_configured_currencies(
    runner: &mut ProbeRunner,
) -> (bool, Option<CurrencySupport>) {
    let outcome = runner
        .run_check(
            "Configured Currencies",
            Method::GET,
            "pay/configured-currencies",
            StatusCode::OK,
            None::<&Value>,
            None,
        )
        .await;
    if !outcome.passed {
        return (false, None);
    }

    let support = CurrencySupport::from_configured(&configured_currencies(&outcome.payload));
    tracing::info!(
        found = ?support.found,
        missing = ?support.missing,
        usdt_polygon = support.usdt_polygon,
        rlusd_xrpl = support.rlusd_xrpl,
        rlusd_erc20 = support.rlusd_erc20,
        "Configured currency coverage"
    );

    let passed = support.missing.is_empty();
    (passed, Some(support))
}
