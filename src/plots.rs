//! Chart rendering for the analysis report
//!
//! Four PNG charts at fixed 1200x800 resolution via plotters' bitmap
//! backend: a smoothed histogram and a box plot of the success rates, and
//! two scatter charts relating attempts and batch time to the rate.
//!
//! Rendering is headless: charts are written as files, never shown in a
//! window, so the tool runs in Docker/CI. All chart text (captions, axis
//! labels, typeface) comes from the injected [`PlotConfig`]; nothing here
//! probes the platform.

use crate::labels::LabelSet;
use crate::record::ExperimentRecord;
use crate::stats;
use plotters::prelude::*;
use std::f64::consts::PI;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum PlotError {
    /// Failed to create the drawing area
    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),

    /// Failed to configure the chart
    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    /// Failed to draw chart elements
    #[error("failed to draw chart elements: {0}")]
    Drawing(String),

    /// Invalid input data
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Quartile computation failed
    #[error(transparent)]
    Stats(#[from] stats::StatsError),
}

type Result<T> = std::result::Result<T, PlotError>;

/// Rendering configuration injected by the caller
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Directory the PNG files are written to
    pub out_dir: PathBuf,
    /// Typeface for captions and axis labels
    pub font_family: String,
    /// Localized chart strings
    pub labels: LabelSet,
}

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 800;

/// Opacity for scatter points, chosen so overlapping batches stay visible
const SCATTER_ALPHA: f64 = 0.6;

/// Render all four charts; returns the written paths in render order
pub fn render_all(records: &[ExperimentRecord], config: &PlotConfig) -> Result<Vec<PathBuf>> {
    let rates: Vec<f64> = records.iter().filter_map(|r| r.success_rate).collect();
    if rates.len() != records.len() || rates.is_empty() {
        return Err(PlotError::InvalidData(
            "success rate column not derived".to_string(),
        ));
    }
    let attempts: Vec<f64> = records.iter().map(|r| r.attempts as f64).collect();
    let times: Vec<f64> = records.iter().map(|r| r.time_taken).collect();

    let labels = &config.labels;
    Ok(vec![
        rate_histogram(&rates, config)?,
        rate_box_plot(&rates, config)?,
        scatter_chart(
            &attempts,
            &rates,
            labels.attempts_title,
            labels.attempts_x,
            "attempts_vs_rate.png",
            config,
        )?,
        scatter_chart(
            &times,
            &rates,
            labels.time_title,
            labels.time_x,
            "time_vs_rate.png",
            config,
        )?,
    ])
}

/// Histogram of the success rates with a Gaussian KDE curve overlaid
fn rate_histogram(rates: &[f64], config: &PlotConfig) -> Result<PathBuf> {
    let path = config.out_dir.join("success_rate_hist.png");
    let font = config.font_family.as_str();

    let (lo, hi) = padded_range(rates);
    let (bin_lo, bin_width, counts) = histogram_bins(rates);
    let n = rates.len() as f64;
    let densities: Vec<f64> = counts.iter().map(|&c| c as f64 / (n * bin_width)).collect();
    let kde = kde_curve(rates, lo, hi, 200);

    let y_max = densities
        .iter()
        .chain(kde.iter().map(|(_, d)| d))
        .fold(0.0_f64, |a, &b| a.max(b))
        * 1.15;
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };

    let root = BitMapBackend::new(&path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(config.labels.hist_title, (font, 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(lo..hi, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(config.labels.hist_x)
        .y_desc(config.labels.hist_y)
        .x_label_style((font, 35))
        .y_label_style((font, 35))
        .label_style((font, 25))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(densities.iter().enumerate().map(|(i, &density)| {
            let x0 = bin_lo + i as f64 * bin_width;
            Rectangle::new([(x0, 0.0), (x0 + bin_width, density)], BLUE.mix(0.5).filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    if !kde.is_empty() {
        chart
            .draw_series(LineSeries::new(kde, RED.stroke_width(2)))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(path.clone())
}

/// Box plot of the success rates: quartile box, median line, 1.5 IQR
/// whiskers, outliers as points
fn rate_box_plot(rates: &[f64], config: &PlotConfig) -> Result<PathBuf> {
    let path = config.out_dir.join("success_rate_box.png");
    let font = config.font_family.as_str();

    let q = stats::quartiles(rates)?;
    let (q1, median, q3) = (f64::from(q.q1), f64::from(q.median), f64::from(q.q3));
    let iqr = q3 - q1;
    let lo_fence = q1 - 1.5 * iqr;
    let hi_fence = q3 + 1.5 * iqr;

    let lo_whisker = rates
        .iter()
        .cloned()
        .filter(|v| *v >= lo_fence)
        .fold(f64::INFINITY, f64::min);
    let hi_whisker = rates
        .iter()
        .cloned()
        .filter(|v| *v <= hi_fence)
        .fold(f64::NEG_INFINITY, f64::max);
    let outliers: Vec<f64> = rates
        .iter()
        .cloned()
        .filter(|v| *v < lo_fence || *v > hi_fence)
        .collect();

    let (y_lo, y_hi) = padded_range(rates);

    let root = BitMapBackend::new(&path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(config.labels.box_title, (font, 40))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(85)
        .build_cartesian_2d(0.0..1.0_f64, y_lo..y_hi)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc(config.labels.box_y)
        .y_label_style((font, 35))
        .label_style((font, 25))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Quartile box with border
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(0.35, q1), (0.65, q3)],
            BLUE.mix(0.3).filled(),
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(0.35, q1), (0.65, q3)],
            BLUE.stroke_width(2),
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Median line
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.35, median), (0.65, median)],
            RED.stroke_width(2),
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Whisker stems and caps
    let whisker_lines = vec![
        vec![(0.5, lo_whisker), (0.5, q1)],
        vec![(0.5, q3), (0.5, hi_whisker)],
        vec![(0.44, lo_whisker), (0.56, lo_whisker)],
        vec![(0.44, hi_whisker), (0.56, hi_whisker)],
    ];
    chart
        .draw_series(
            whisker_lines
                .into_iter()
                .map(|points| PathElement::new(points, BLACK.stroke_width(1))),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Points beyond the fences
    chart
        .draw_series(
            outliers
                .into_iter()
                .map(|v| Circle::new((0.5, v), 4, BLACK.mix(0.5).filled())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(path.clone())
}

/// Scatter chart of one column against the success rate
fn scatter_chart(
    xs: &[f64],
    rates: &[f64],
    title: &str,
    x_label: &str,
    file_name: &str,
    config: &PlotConfig,
) -> Result<PathBuf> {
    let path = config.out_dir.join(file_name);
    let font = config.font_family.as_str();

    let (x_lo, x_hi) = padded_range(xs);
    let (y_lo, y_hi) = padded_range(rates);

    let root = BitMapBackend::new(&path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (font, 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(config.labels.rate_axis)
        .x_label_style((font, 35))
        .y_label_style((font, 35))
        .label_style((font, 25))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            xs.iter()
                .zip(rates)
                .map(|(&x, &y)| Circle::new((x, y), 5, BLUE.mix(SCATTER_ALPHA).filled())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(path.clone())
}

/// Data range with a 5% margin on each side; degenerate spans get a fixed pad
fn padded_range(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = hi - lo;
    if span > 0.0 {
        (lo - span * 0.05, hi + span * 0.05)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

/// Bin the values for the histogram. Bin count follows Sturges' rule.
///
/// Returns (first bin start, bin width, per-bin counts).
fn histogram_bins(values: &[f64]) -> (f64, f64, Vec<usize>) {
    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let bins = (1.0 + (values.len() as f64).log2()).ceil().max(1.0) as usize;

    let span = hi - lo;
    let width = if span > 0.0 { span / bins as f64 } else { 1.0 };
    let start = if span > 0.0 { lo } else { lo - 0.5 };

    let mut counts = vec![0_usize; bins];
    for &v in values {
        let idx = ((v - start) / width).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }
    (start, width, counts)
}

/// Gaussian kernel density estimate on an evaluation grid.
///
/// Bandwidth by Silverman's rule of thumb; empty when the sample is too
/// small or has no spread (the histogram alone carries those cases).
fn kde_curve(values: &[f64], lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
    if values.len() < 2 || points < 2 {
        return Vec::new();
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std_dev =
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt();
    if std_dev == 0.0 {
        return Vec::new();
    }

    let bandwidth = 1.06 * std_dev * n.powf(-0.2);
    let norm = n * bandwidth * (2.0 * PI).sqrt();
    let step = (hi - lo) / (points - 1) as f64;

    (0..points)
        .map(|i| {
            let x = lo + i as f64 * step;
            let density = values
                .iter()
                .map(|&v| {
                    let u = (x - v) / bandwidth;
                    (-0.5 * u * u).exp()
                })
                .sum::<f64>()
                / norm;
            (x, density)
        })
        .collect()
}
