//! Descriptive statistics over the experiment table
//!
//! Report figures (rate mean, sample std-dev, Pearson r) are computed in
//! f64. Column totals and the percentile breakdown go through Trueno's
//! SIMD vectors; quartiles come from aprender's `DescriptiveStats`.

use crate::record::ExperimentRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the statistics routines
#[derive(Error, Debug)]
pub enum StatsError {
    /// Not enough values for the requested statistic
    #[error("need at least {needed} values, got {got}")]
    TooFewValues {
        /// Minimum sample size for the statistic
        needed: usize,
        /// Actual sample size
        got: usize,
    },

    /// Paired columns of different lengths
    #[error("column lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Correlation of a constant column
    #[error("correlation is undefined for a zero-variance column")]
    ZeroVariance,

    /// Quantile computation failed
    #[error("quantile computation failed: {0}")]
    Quantile(String),
}

type Result<T> = std::result::Result<T, StatsError>;

/// Sample summary of one numeric column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryStats {
    /// Sample size
    pub n: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

/// Column totals for the run, summed with Trueno's SIMD vectors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Totals {
    /// Sum of captured counts
    pub successes: u64,
    /// Sum of issued counts
    pub attempts: u64,
    /// Total batch time in whole seconds
    pub time_taken_secs: u64,
}

/// Percentile breakdown of a column (for `--stats-extended`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtendedStats {
    pub mean: f32,
    pub stddev: f32,
    pub min: f32,
    pub max: f32,
    pub median: f32, // P50
    pub p75: f32,
    pub p90: f32,
    pub p95: f32,
    pub p99: f32,
}

/// Quartiles of a column, for the box chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Quartiles {
    pub q1: f32,
    pub median: f32,
    pub q3: f32,
}

/// Mean, sample standard deviation, and range of a column
pub fn summarize(values: &[f64]) -> Result<SummaryStats> {
    if values.is_empty() {
        return Err(StatsError::TooFewValues { needed: 1, got: 0 });
    }
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    // A single observation has no spread to report
    let std_dev = if n > 1 {
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt()
    } else {
        0.0
    };
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    Ok(SummaryStats {
        n,
        mean,
        std_dev,
        min,
        max,
    })
}

/// Pearson correlation coefficient between two columns.
///
/// Symmetric in its arguments: `pearson(x, y) == pearson(y, x)`.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(StatsError::TooFewValues {
            needed: 2,
            got: x.len(),
        });
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Err(StatsError::ZeroVariance);
    }
    Ok(cov / (var_x * var_y).sqrt())
}

/// Calculate column totals using Trueno for SIMD-accelerated sums
pub fn totals(records: &[ExperimentRecord]) -> Totals {
    if records.is_empty() {
        return Totals {
            successes: 0,
            attempts: 0,
            time_taken_secs: 0,
        };
    }

    let successes: Vec<f32> = records.iter().map(|r| r.successes as f32).collect();
    let attempts: Vec<f32> = records.iter().map(|r| r.attempts as f32).collect();
    let times: Vec<f32> = records.iter().map(|r| r.time_taken as f32).collect();

    let total_successes = trueno::Vector::from_slice(&successes).sum().unwrap_or(0.0) as u64;
    let total_attempts = trueno::Vector::from_slice(&attempts).sum().unwrap_or(0.0) as u64;
    let total_time = trueno::Vector::from_slice(&times).sum().unwrap_or(0.0) as u64;

    Totals {
        successes: total_successes,
        attempts: total_attempts,
        time_taken_secs: total_time,
    }
}

/// Calculate the percentile breakdown of a column using Trueno
pub fn extended_stats(values: &[f64]) -> Option<ExtendedStats> {
    if values.is_empty() {
        return None;
    }

    let values: Vec<f32> = values.iter().map(|&v| v as f32).collect();
    let v = trueno::Vector::from_slice(&values);

    let mean = v.mean().unwrap_or(0.0);
    let stddev = v.stddev().unwrap_or(0.0);
    let min = v.min().unwrap_or(0.0);
    let max = v.max().unwrap_or(0.0);

    // Trueno has no built-in percentile function
    let mut sorted = values;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let median = calculate_percentile(&sorted, 50.0);
    let p75 = calculate_percentile(&sorted, 75.0);
    let p90 = calculate_percentile(&sorted, 90.0);
    let p95 = calculate_percentile(&sorted, 95.0);
    let p99 = calculate_percentile(&sorted, 99.0);

    Some(ExtendedStats {
        mean,
        stddev,
        min,
        max,
        median,
        p75,
        p90,
        p95,
        p99,
    })
}

/// Quartiles via aprender's `DescriptiveStats` (R-7 quantile method)
pub fn quartiles(values: &[f64]) -> Result<Quartiles> {
    if values.is_empty() {
        return Err(StatsError::TooFewValues { needed: 1, got: 0 });
    }

    let values: Vec<f32> = values.iter().map(|&v| v as f32).collect();
    let v = trueno::Vector::from_slice(&values);
    let stats = aprender::stats::DescriptiveStats::new(&v);

    let quantile = |q: f32| {
        stats
            .quantile(q.into())
            .map_err(|e| StatsError::Quantile(e.to_string()))
    };

    Ok(Quartiles {
        q1: quantile(0.25)?,
        median: quantile(0.5)?,
        q3: quantile(0.75)?,
    })
}

/// Calculate percentile from sorted data with linear interpolation
fn calculate_percentile(sorted_data: &[f32], percentile: f32) -> f32 {
    if sorted_data.is_empty() {
        return 0.0;
    }
    if sorted_data.len() == 1 {
        return sorted_data[0];
    }

    let index = (percentile / 100.0) * (sorted_data.len() - 1) as f32;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if lower == upper {
        sorted_data[lower]
    } else {
        let weight = index - lower as f32;
        sorted_data[lower] * (1.0 - weight) + sorted_data[upper] * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_worked_example() {
        let rates = [0.8, 0.9, 1.0];
        let summary = summarize(&rates).unwrap();
        assert_eq!(summary.n, 3);
        assert!((summary.mean - 0.9).abs() < 1e-12);
        assert!((summary.std_dev - 0.1).abs() < 1e-12);
        assert_eq!(summary.min, 0.8);
        assert_eq!(summary.max, 1.0);
    }

    #[test]
    fn test_summarize_matches_independent_mean() {
        let values = [0.13, 0.77, 0.42, 0.9, 0.55];
        let summary = summarize(&values).unwrap();
        let independent = values.iter().sum::<f64>() / values.len() as f64;
        assert!((summary.mean - independent).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summarize_single_value() {
        let summary = summarize(&[0.5]).unwrap();
        assert_eq!(summary.mean, 0.5);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_summarize_empty_fails() {
        assert!(matches!(
            summarize(&[]),
            Err(StatsError::TooFewValues { needed: 1, got: 0 })
        ));
    }

    #[test]
    fn test_pearson_perfect_positive() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        let r = pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let x = [1.0, 2.0, 3.0];
        let y = [3.0, 2.0, 1.0];
        let r = pearson(&x, &y).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_symmetric() {
        let x = [1.1, 2.2, 3.3, 1.7, 0.4];
        let y = [0.8, 0.9, 1.0, 0.6, 0.7];
        assert_eq!(pearson(&x, &y).unwrap(), pearson(&y, &x).unwrap());
    }

    #[test]
    fn test_pearson_zero_variance_fails() {
        let x = [1.0, 1.0, 1.0];
        let y = [0.1, 0.2, 0.3];
        assert!(matches!(pearson(&x, &y), Err(StatsError::ZeroVariance)));
    }

    #[test]
    fn test_pearson_length_mismatch_fails() {
        assert!(matches!(
            pearson(&[1.0, 2.0], &[1.0]),
            Err(StatsError::LengthMismatch { left: 2, right: 1 })
        ));
    }

    #[test]
    fn test_pearson_bounds() {
        let x = [0.3, 0.1, 0.9, 0.5, 0.2];
        let y = [1.2, 8.1, 0.4, 2.2, 5.0];
        let r = pearson(&x, &y).unwrap();
        assert!((-1.0..=1.0).contains(&r));
    }

    #[test]
    fn test_totals_with_trueno() {
        let records = vec![
            ExperimentRecord::new("Exp1", 8, 10, 1.1),
            ExperimentRecord::new("Exp2", 9, 10, 2.2),
            ExperimentRecord::new("Exp3", 10, 10, 3.3),
        ];
        let totals = totals(&records);
        assert_eq!(totals.successes, 27);
        assert_eq!(totals.attempts, 30);
        assert_eq!(totals.time_taken_secs, 6);
    }

    #[test]
    fn test_totals_empty() {
        let totals = totals(&[]);
        assert_eq!(totals.successes, 0);
        assert_eq!(totals.attempts, 0);
    }

    #[test]
    fn test_extended_stats_constant_column() {
        let stats = extended_stats(&[0.5, 0.5, 0.5, 0.5]).unwrap();
        assert_eq!(stats.mean, 0.5);
        assert_eq!(stats.stddev, 0.0);
        assert_eq!(stats.median, 0.5);
        assert_eq!(stats.p99, 0.5);
    }

    #[test]
    fn test_extended_stats_empty() {
        assert!(extended_stats(&[]).is_none());
    }

    #[test]
    fn test_percentile_interpolation() {
        let sorted = [1.0_f32, 2.0, 3.0, 4.0];
        assert_eq!(calculate_percentile(&sorted, 0.0), 1.0);
        assert_eq!(calculate_percentile(&sorted, 50.0), 2.5);
        assert_eq!(calculate_percentile(&sorted, 100.0), 4.0);
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(calculate_percentile(&[42.0], 90.0), 42.0);
    }

    #[test]
    fn test_quartiles_ordering() {
        let q = quartiles(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]).unwrap();
        assert!(q.q1 <= q.median);
        assert!(q.median <= q.q3);
    }

    #[test]
    fn test_quartiles_empty_fails() {
        assert!(quartiles(&[]).is_err());
    }
}
