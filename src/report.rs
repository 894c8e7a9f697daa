//! Report rendering: console text, JSON, CSV
//!
//! The text form follows the original console contract: two summary lines,
//! the correlation block, the t-test line, then the verdict. JSON is the
//! full [`AnalysisReport`] schema; CSV lists the per-record table followed
//! by a metric/value block.

use crate::analysis::AnalysisReport;
use crate::labels::LabelSet;
use std::io::{self, Write};

/// Write the localized text report in fixed line order
pub fn write_text(
    report: &AnalysisReport,
    labels: &LabelSet,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        out,
        "{}: {:.2}%",
        labels.mean_rate,
        report.rate_summary.mean * 100.0
    )?;
    writeln!(out, "{}: {}", labels.std_dev, report.rate_summary.std_dev)?;

    if let Some(extended) = &report.rate_extended {
        writeln!(out, "\n=== {} ===", labels.extended_heading)?;
        writeln!(out, "  Mean:         {:.4}", extended.mean)?;
        writeln!(out, "  Std Dev:      {:.4}", extended.stddev)?;
        writeln!(out, "  Min:          {:.4}", extended.min)?;
        writeln!(out, "  Max:          {:.4}", extended.max)?;
        writeln!(out, "  Median (P50): {:.4}", extended.median)?;
        writeln!(out, "  P75:          {:.4}", extended.p75)?;
        writeln!(out, "  P90:          {:.4}", extended.p90)?;
        writeln!(out, "  P95:          {:.4}", extended.p95)?;
        writeln!(out, "  P99:          {:.4}", extended.p99)?;
        writeln!(out)?;
    }

    writeln!(out, "{}", labels.correlation_heading)?;
    match report.time_rate_correlation {
        Some(r) => writeln!(out, "{}: {}", labels.correlation_coefficient, r)?,
        None => writeln!(
            out,
            "{}: {}",
            labels.correlation_coefficient, labels.correlation_undefined
        )?,
    }

    writeln!(
        out,
        "{}: t-statistic={}, p-value={}",
        labels.ttest_result, report.ttest.statistic, report.ttest.p_value
    )?;
    let verdict = if report.significant {
        labels.significant
    } else {
        labels.not_significant
    };
    writeln!(out, "{}{}", labels.verdict_prefix, verdict)?;

    if report.ttest.self_referential {
        writeln!(out, "{}", labels.self_mean_note)?;
    }

    Ok(())
}

/// Serialize the report as pretty-printed JSON
pub fn to_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Render the report as CSV: per-record rows, then a metric/value block
pub fn to_csv(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("experiment,successes,attempts,time_taken,success_rate\n");
    for record in &report.records {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            record.label,
            record.successes,
            record.attempts,
            record.time_taken,
            record.success_rate.unwrap_or_default()
        ));
    }

    out.push('\n');
    out.push_str("metric,value\n");
    out.push_str(&format!("mean_success_rate,{}\n", report.rate_summary.mean));
    out.push_str(&format!("std_dev,{}\n", report.rate_summary.std_dev));
    match report.time_rate_correlation {
        Some(r) => out.push_str(&format!("time_rate_correlation,{r}\n")),
        None => out.push_str("time_rate_correlation,\n"),
    }
    out.push_str(&format!("t_statistic,{}\n", report.ttest.statistic));
    out.push_str(&format!("p_value,{}\n", report.ttest.p_value));
    out.push_str(&format!("significant,{}\n", report.significant));

    out
}
