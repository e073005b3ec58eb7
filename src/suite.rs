//! Top-level orchestration: health gate, feature checks, final tally.

use crate::checks::{
    check_configured_currencies, check_currency_rates, check_health, check_payment_creation,
    CurrencySupport, PaymentReport, RateReport,
};
use crate::config::Config;
use crate::models::RunTally;
use crate::runner::ProbeRunner;
use anyhow::Result;

#[derive(Debug)]
pub struct SuiteReport {
    pub health_passed: bool,
    pub currencies_passed: bool,
    pub rates_passed: bool,
    pub payments_passed: bool,
    pub currency_support: Option<CurrencySupport>,
    pub rates: Option<RateReport>,
    pub payments: Option<PaymentReport>,
    pub tally: RunTally,
}

impl SuiteReport {
    /// Overall verdict: every attempted check passed.
    pub fn all_passed(&self) -> bool {
        self.health_passed && self.tally.all_passed()
    }

    fn aborted(tally: RunTally) -> Self {
        Self {
            health_passed: false,
            currencies_passed: false,
            rates_passed: false,
            payments_passed: false,
            currency_support: None,
            rates: None,
            payments: None,
            tally,
        }
    }
}

/// Run the whole probe sequence against the configured backend.
///
/// The health check gates everything else; the remaining checks run
/// unconditionally and independently of one another.
pub async fn run_suite(config: &Config) -> Result<SuiteReport> {
    let mut runner = ProbeRunner::new(config)?;

    if !check_health(&mut runner).await {
        tracing::error!("Backend health check failed, aborting run");
        return Ok(SuiteReport::aborted(runner.tally()));
    }

    let (currencies_passed, currency_support) = check_configured_currencies(&mut runner).await;
    let (rates_passed, rates) = check_currency_rates(&mut runner).await;
    let (payments_passed, payments) = check_payment_creation(&mut runner).await;

    Ok(SuiteReport {
        health_passed: true,
        currencies_passed,
        rates_passed,
        payments_passed,
        currency_support,
        rates,
        payments: Some(payments),
        tally: runner.tally(),
    })
}
