//! Currency-rate lookup check.

use crate::dtos::RateQuery;
use crate::runner::ProbeRunner;
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// Recently added currencies whose rate coverage is tracked.
pub const TRACKED_CURRENCIES: [&str; 4] = ["SOL", "XRP", "POLYGON", "RLUSD"];

/// Full list sent to the rate lookup.
const RATE_QUERY_CURRENCIES: [&str; 7] = ["USDT", "BTC", "ETH", "SOL", "XRP", "POLYGON", "RLUSD"];

#[derive(Debug, Clone, PartialEq)]
pub struct RateReport {
    /// Every currency the backend returned a rate entry for.
    pub available_rates: Vec<String>,
    /// Subset of [`TRACKED_CURRENCIES`] present in `available_rates`.
    pub new_currencies: Vec<String>,
}

impl RateReport {
    fn from_payload(payload: &Value) -> Self {
        let data = payload.get("data").unwrap_or(payload);
        let available_rates: Vec<String> = data
            .as_array()
            .map(|rates| {
                rates
                    .iter()
                    .filter_map(|rate| rate.get("currency"))
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let new_currencies = TRACKED_CURRENCIES
            .iter()
            .filter(|code| available_rates.iter().any(|rate| rate == *code))
            .map(|code| code.to_string())
            .collect();

        Self {
            available_rates,
            new_currencies,
        }
    }
}

/// The rate lists are informational; the check verdict is the HTTP exchange.
pub async fn check_currency_rates(runner: &mut ProbeRunner) -> (bool, Option<RateReport>) {
    let query = RateQuery {
        source: "USD".to_string(),
        amount: 100,
        currency_list: RATE_QUERY_CURRENCIES.iter().map(|c| c.to_string()).collect(),
        fixed_decimal: false,
    };

    let outcome = runner
        .run_check(
            "Currency Rates",
            Method::POST,
            "pay/getCurrencyRates",
            StatusCode::OK,
            Some(&query),
            None,
        )
        .await;
    if !outcome.passed {
        return (false, None);
    }

    let report = RateReport::from_payload(&outcome.payload);
    tracing::info!(
        available = ?report.available_rates,
        tracked = ?report.new_currencies,
        "Currency rate coverage"
    );

    (true, Some(report))
}
