//! Analysis pass over the experiment table
//!
//! Pure computation: derives the rate column and produces an
//! [`AnalysisReport`] value. Rendering lives in the `report` and `plots`
//! modules so every step here is testable without a display.

use crate::hypothesis::{self, HypothesisError, Significance, TTestOutcome};
use crate::record::{ExperimentRecord, RateError};
use crate::stats::{self, ExtendedStats, StatsError, SummaryStats, Totals};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised by the analysis pass
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Rate derivation failed
    #[error(transparent)]
    Rate(#[from] RateError),

    /// A statistics routine failed
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// The hypothesis test failed
    #[error(transparent)]
    Hypothesis(#[from] HypothesisError),

    /// Nothing to analyze
    #[error("no records to analyze")]
    EmptyTable,
}

/// Analysis options, independent of presentation concerns
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Fixed benchmark for the t-test; `None` reproduces the original
    /// self-mean comparison
    pub null_mean: Option<f64>,
    /// Include the percentile breakdown
    pub extended: bool,
}

/// Everything the analysis pass computed, ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The experiment table with the derived rate column filled in
    pub records: Vec<ExperimentRecord>,
    /// Mean / sample std-dev / range of the success rates
    pub rate_summary: SummaryStats,
    /// Column totals for the run
    pub totals: Totals,
    /// Percentile breakdown, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_extended: Option<ExtendedStats>,
    /// Pearson r between batch time and success rate; `None` when a column
    /// has zero variance or holds a single observation
    pub time_rate_correlation: Option<f64>,
    /// One-sample t-test outcome
    pub ttest: TTestOutcome,
    /// Verdict at the 0.05 level
    pub significant: bool,
}

/// Run the full analysis pass, consuming the loaded table
pub fn analyze(
    mut records: Vec<ExperimentRecord>,
    options: &AnalysisOptions,
) -> Result<AnalysisReport, AnalysisError> {
    if records.is_empty() {
        return Err(AnalysisError::EmptyTable);
    }

    for record in &mut records {
        record.derive_success_rate()?;
    }
    let rates: Vec<f64> = records
        .iter()
        .map(|r| r.success_rate.unwrap_or_default())
        .collect();
    let times: Vec<f64> = records.iter().map(|r| r.time_taken).collect();

    let rate_summary = stats::summarize(&rates)?;
    let totals = stats::totals(&records);
    let rate_extended = if options.extended {
        stats::extended_stats(&rates)
    } else {
        None
    };

    let time_rate_correlation = match stats::pearson(&times, &rates) {
        Ok(r) => Some(r),
        Err(StatsError::ZeroVariance) | Err(StatsError::TooFewValues { .. }) => {
            warn!("time/rate correlation undefined for this sample");
            None
        }
        Err(e) => return Err(e.into()),
    };

    if options.null_mean.is_none() {
        warn!(
            "t-test reference is the sample mean; outcome is fixed at t = 0, p = 1 \
             (pass --null-mean for a benchmark comparison)"
        );
    }
    let ttest = hypothesis::one_sample_ttest(&rates, options.null_mean)?;
    let significant = ttest.significance() == Significance::Significant;

    debug!(n = records.len(), "analysis complete");

    Ok(AnalysisReport {
        records,
        rate_summary,
        totals,
        rate_extended,
        time_rate_correlation,
        ttest,
        significant,
    })
}
