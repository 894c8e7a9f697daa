//! One-sample hypothesis testing for capture rates
//!
//! The t statistic is computed from the sample in f64; the two-tailed
//! p-value comes from statrs' Student's t distribution.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use thiserror::Error;

/// Errors raised by the hypothesis test
#[derive(Error, Debug)]
pub enum HypothesisError {
    /// Empty sample
    #[error("cannot run a t-test on an empty sample")]
    EmptySample,

    /// Zero spread with a nonzero offset from the reference mean
    #[error("sample has zero variance; t is undefined away from its mean")]
    ZeroVariance,

    /// statrs rejected the degrees of freedom
    #[error("t distribution rejected df={0}")]
    BadDistribution(f64),
}

/// Result of a one-sample t-test
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TTestOutcome {
    /// t statistic
    pub statistic: f64,
    /// Degrees of freedom (n - 1)
    pub df: f64,
    /// Two-tailed p-value
    pub p_value: f64,
    /// Reference mean the sample was tested against
    pub null_mean: f64,
    /// True when the reference is the sample's own mean
    pub self_referential: bool,
}

/// Significance verdict at the 0.05 level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Significance {
    /// p < 0.05
    Significant,
    /// p >= 0.05
    NotSignificant,
}

impl TTestOutcome {
    /// Verdict at the conventional 0.05 level
    pub fn significance(&self) -> Significance {
        if self.p_value < 0.05 {
            Significance::Significant
        } else {
            Significance::NotSignificant
        }
    }
}

/// Two-sided one-sample t-test of `sample` against `null_mean`.
///
/// When `null_mean` is `None` the sample's own mean is used, matching the
/// original evaluation procedure. That comparison is fixed at t = 0,
/// p = 1 by construction; callers surface it as self-referential so the
/// reader knows the verdict carries no information.
pub fn one_sample_ttest(
    sample: &[f64],
    null_mean: Option<f64>,
) -> Result<TTestOutcome, HypothesisError> {
    let n = sample.len();
    if n == 0 {
        return Err(HypothesisError::EmptySample);
    }

    let mean = sample.iter().sum::<f64>() / n as f64;
    let std_dev = if n > 1 {
        (sample.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt()
    } else {
        0.0
    };

    let self_referential = null_mean.is_none();
    let reference = null_mean.unwrap_or(mean);
    let offset = mean - reference;
    let df = (n - 1) as f64;

    let statistic = if offset == 0.0 {
        // Exact zero regardless of spread
        0.0
    } else if std_dev == 0.0 {
        return Err(HypothesisError::ZeroVariance);
    } else {
        offset / (std_dev / (n as f64).sqrt())
    };

    // A zero statistic is p = 1 by symmetry; skip the CDF to keep it exact
    let p_value = if statistic == 0.0 {
        1.0
    } else {
        let dist =
            StudentsT::new(0.0, 1.0, df).map_err(|_| HypothesisError::BadDistribution(df))?;
        2.0 * (1.0 - dist.cdf(statistic.abs()))
    };

    Ok(TTestOutcome {
        statistic,
        df,
        p_value,
        null_mean: reference,
        self_referential,
    })
}
