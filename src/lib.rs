//! HTTP smoke probes for the DynoPay payment backend.
//!
//! Issues a fixed, strictly sequential series of requests against a deployed
//! backend, verifies status codes and response shapes, and reports a
//! pass/fail tally. The backend itself is an external collaborator, reached
//! only through its public HTTP endpoints.
//!
//! ## Usage
//!
//! ```bash
//! DYNOPAY_BASE_URL=https://staging.example.com dynopay-smoke
//! ```

pub mod checks;
pub mod config;
pub mod dtos;
pub mod models;
pub mod runner;
pub mod suite;

use std::sync::Once;

pub use config::Config;
pub use models::{CheckFailure, CheckOutcome, RunTally};
pub use runner::ProbeRunner;
pub use suite::{run_suite, SuiteReport};

static INIT: Once = Once::new();

/// Initialize tracing (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .try_init()
            .ok();
    });
}
