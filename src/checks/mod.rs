//! Higher-level checks composed on top of [`ProbeRunner::run_check`].
//!
//! Each check supplies fixed request parameters, then post-processes the
//! fetched JSON to verify its own expectations. No network behavior beyond
//! what the runner already does.

mod currencies;
mod payments;
mod rates;

pub use currencies::{check_configured_currencies, CurrencySupport, EXPECTED_CURRENCIES};
pub use payments::{
    check_payment_creation, check_payment_creation_for, PaymentReport, PAYMENT_ATTEMPTS,
};
pub use rates::{check_currency_rates, RateReport, TRACKED_CURRENCIES};

use crate::runner::ProbeRunner;
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// Basic availability probe. Gates the rest of the suite.
pub async fn check_health(runner: &mut ProbeRunner) -> bool {
    runner
        .run_check(
            "Health Check",
            Method::GET,
            "api/health",
            StatusCode::OK,
            None::<&Value>,
            None,
        )
        .await
        .passed
}
