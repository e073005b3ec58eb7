use serde_json::Value;
use thiserror::Error;

/// Why a single check failed.
///
/// Transport faults and status mismatches are carried in the check outcome
/// instead of being propagated, so one dead endpoint fails its check without
/// taking down the run.
#[derive(Debug, Error)]
pub enum CheckFailure {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("expected status {expected}, got {actual}: {body_excerpt}")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        body_excerpt: String,
    },
}

/// Result of one named check. Immutable once produced.
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    /// Observed status code, absent on transport failure.
    pub status: Option<u16>,
    /// Decoded JSON body on success (raw text if decoding fails), an empty
    /// object otherwise.
    pub payload: Value,
    pub failure: Option<CheckFailure>,
}

/// Attempted/passed counters for a single run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunTally {
    pub attempted: u32,
    pub passed: u32,
}

impl RunTally {
    pub fn record_attempt(&mut self) {
        self.attempted += 1;
    }

    pub fn record_pass(&mut self) {
        self.passed += 1;
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.attempted
    }

    /// Pass percentage over attempted checks.
    pub fn success_rate(&self) -> f64 {
        if self.attempted == 0 {
            return 0.0;
        }
        f64::from(self.passed) / f64::from(self.attempted) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_tracks_attempts_and_passes() {
        let mut tally = RunTally::default();
        tally.record_attempt();
        assert!(!tally.all_passed());

        tally.record_pass();
        assert!(tally.all_passed());
        assert_eq!(tally.attempted, 1);
        assert_eq!(tally.passed, 1);
    }

    #[test]
    fn success_rate_is_a_percentage() {
        let mut tally = RunTally::default();
        assert_eq!(tally.success_rate(), 0.0);

        for _ in 0..4 {
            tally.record_attempt();
        }
        for _ in 0..3 {
            tally.record_pass();
        }
        assert_eq!(tally.success_rate(), 75.0);
    }
}
