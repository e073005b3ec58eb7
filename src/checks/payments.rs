//! Payment-creation check.

use crate::dtos::{PaymentEnvelope, PaymentRequest};
use crate::runner::ProbeRunner;
use reqwest::{Method, StatusCode};
use std::collections::BTreeMap;

/// Fixed (currency, amount) pairs attempted against `pay/addPayment`.
pub const PAYMENT_ATTEMPTS: [(&str, f64); 6] = [
    ("SOL", 1.5),
    ("XRP", 100.0),
    ("POLYGON", 50.0),
    ("USDT-POLYGON", 100.0),
    ("RLUSD-XRPL", 100.0),
    ("RLUSD-ERC20", 100.0),
];

/// Per-currency pass/fail detail for payment creation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReport {
    pub results: BTreeMap<String, bool>,
}

impl PaymentReport {
    /// Payment creation may require encryption the probe does not perform, so
    /// one successful currency is enough to call the endpoint reachable.
    pub fn any_succeeded(&self) -> bool {
        self.results.values().any(|passed| *passed)
    }
}

pub async fn check_payment_creation(runner: &mut ProbeRunner) -> (bool, PaymentReport) {
    check_payment_creation_for(runner, &PAYMENT_ATTEMPTS).await
}

pub async fn check_payment_creation_for(
    runner: &mut ProbeRunner,
    attempts: &[(&str, f64)],
) -> (bool, PaymentReport) {
    let mut results = BTreeMap::new();

    for (currency, amount) in attempts {
        let envelope = PaymentEnvelope {
            data: PaymentRequest {
                currency: currency.to_string(),
                amount: *amount,
                payment_type: "CRYPTO".to_string(),
            },
        };

        let outcome = runner
            .run_check(
                &format!("Payment Creation - {currency}"),
                Method::POST,
                "pay/addPayment",
                StatusCode::OK,
                Some(&envelope),
                None,
            )
            .await;
        results.insert(currency.to_string(), outcome.passed);
    }

    let report = PaymentReport { results };
    let passed = report.any_succeeded();
    tracing::info!(results = ?report.results, passed, "Payment creation attempts");

    (passed, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_success_is_enough() {
        let report = PaymentReport {
            results: BTreeMap::from([("SOL".to_string(), true), ("XRP".to_string(), false)]),
        };
        assert!(report.any_succeeded());
    }

    #[test]
    fn no_successes_fail_the_check() {
        let report = PaymentReport {
            results: BTreeMap::from([("SOL".to_string(), false), ("XRP".to_string(), false)]),
        };
        assert!(!report.any_succeeded());
    }
}
