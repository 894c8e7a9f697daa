//! Loader for the 3-line results file written by the measurement run
//!
//! The file layout is fixed, one bracketed comma-separated list per line:
//!
//! ```text
//! [s1, s2, ..., sN]    captured counts (integers)
//! [a1, a2, ..., aN]    issued counts (integers)
//! [t1, t2, ..., tN]    batch durations in seconds (floats)
//! ```
//!
//! All three lists must share the same nonzero length. Records are labeled
//! "Exp1".."ExpN" in line order.

use crate::record::ExperimentRecord;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading the results file
#[derive(Error, Debug)]
pub enum LoaderError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was attempted
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Fewer than the three required lines
    #[error("results file needs 3 lines (successes, attempts, times), found {found}")]
    MissingLine {
        /// Number of lines actually present
        found: usize,
    },

    /// A token failed to parse as the expected numeric type
    #[error("line {line}: cannot parse {token:?} as {expected}")]
    InvalidToken {
        /// 1-based line number
        line: usize,
        /// Offending token text
        token: String,
        /// "integer" or "float"
        expected: &'static str,
    },

    /// The three lists differ in length
    #[error("list lengths differ: {successes} successes, {attempts} attempts, {times} times")]
    LengthMismatch {
        successes: usize,
        attempts: usize,
        times: usize,
    },

    /// All three lists are empty
    #[error("results file contains empty lists")]
    Empty,
}

type Result<T> = std::result::Result<T, LoaderError>;

/// Read and parse a results file into the ordered experiment table
pub fn load_results(path: &Path) -> Result<Vec<ExperimentRecord>> {
    let text = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_results_text(&text)
}

/// Parse the 3-line bracketed format.
///
/// Split out from [`load_results`] so parsing is testable (and fuzzable)
/// without touching the filesystem.
pub fn parse_results_text(text: &str) -> Result<Vec<ExperimentRecord>> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 3 {
        return Err(LoaderError::MissingLine { found: lines.len() });
    }

    let successes = parse_list::<u64>(lines[0], 1, "integer")?;
    let attempts = parse_list::<u64>(lines[1], 2, "integer")?;
    let times = parse_list::<f64>(lines[2], 3, "float")?;

    if successes.len() != attempts.len() || attempts.len() != times.len() {
        return Err(LoaderError::LengthMismatch {
            successes: successes.len(),
            attempts: attempts.len(),
            times: times.len(),
        });
    }
    if successes.is_empty() {
        return Err(LoaderError::Empty);
    }

    debug!(n = successes.len(), "loaded experiment table");

    Ok(successes
        .iter()
        .zip(&attempts)
        .zip(&times)
        .enumerate()
        .map(|(i, ((&s, &a), &t))| ExperimentRecord::new(format!("Exp{}", i + 1), s, a, t))
        .collect())
}

/// Parse one bracketed list line into numbers of type `T`
fn parse_list<T: FromStr>(line: &str, line_no: usize, expected: &'static str) -> Result<Vec<T>> {
    let inner = line.trim().trim_start_matches('[').trim_end_matches(']');
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    inner
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<T>().map_err(|_| LoaderError::InvalidToken {
                line: line_no,
                token: token.to_string(),
                expected,
            })
        })
        .collect()
}
