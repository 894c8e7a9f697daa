//! Experiment record table assembled from a measurement run
//!
//! One record per batch: how many requests the load generator issued, how
//! many records the observer captured, and the batch wall-clock time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when deriving the success-rate column
#[derive(Error, Debug)]
pub enum RateError {
    /// Division by a zero attempt count
    #[error("{label}: attempts is zero, success rate is undefined")]
    ZeroAttempts {
        /// Label of the offending record
        label: String,
    },
}

/// A single experiment batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperimentRecord {
    /// Generated label, "Exp1".."ExpN" in input order
    pub label: String,
    /// Records the observer captured during the batch
    pub successes: u64,
    /// Requests the load generator issued
    pub attempts: u64,
    /// Batch wall-clock time in seconds
    pub time_taken: f64,
    /// Derived `successes / attempts`; set once by the analysis pass
    pub success_rate: Option<f64>,
}

impl ExperimentRecord {
    /// Create a record with no derived rate yet
    pub fn new(label: impl Into<String>, successes: u64, attempts: u64, time_taken: f64) -> Self {
        Self {
            label: label.into(),
            successes,
            attempts,
            time_taken,
            success_rate: None,
        }
    }

    /// Derive and cache the success rate (exact IEEE-754 division)
    pub fn derive_success_rate(&mut self) -> Result<f64, RateError> {
        if self.attempts == 0 {
            return Err(RateError::ZeroAttempts {
                label: self.label.clone(),
            });
        }
        let rate = self.successes as f64 / self.attempts as f64;
        self.success_rate = Some(rate);
        Ok(rate)
    }
}
