//! Cross-table aggregation and per-table summaries.
//!
//! [`analyse`] reduces a batch of tables to the day-by-day standard deviation
//! of their daily means and hands it to a [`Visualizer`].
//! [`daily_summary`] builds the average/max/min view of a single table.

use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use ndarray::{Array2, Axis};
use tracing::{debug, info};

use inflammation_core::graph::{GraphData, Visualizer, AVERAGE, MAX, MIN, STD_DEV_BY_DAY};
use inflammation_core::models::{
    daily_max, daily_mean, daily_min, patient_normalise, DailyStat, Table,
};
use inflammation_core::{InflammationError, Result};

use crate::reader::{load_multiple_csvs, load_tables};

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the analysis result.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnalysisMetadata {
    /// RFC 3339 timestamp when this result was generated.
    pub generated_at: String,
    /// Number of data files loaded.
    pub files_loaded: usize,
    /// Patient rows across all files.
    pub patients: usize,
    /// Days per table.
    pub days: usize,
    /// Wall-clock seconds spent loading the CSV files.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent in the reductions.
    pub compute_time_seconds: f64,
}

/// The complete output of [`analyse_data`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Standard deviation of the per-table daily means, one value per day.
    pub daily_std: DailyStat,
    pub metadata: AnalysisMetadata,
}

// ── Aggregation ───────────────────────────────────────────────────────────────

/// Population standard deviation, per day, of each table's daily mean.
///
/// Every table must have the same number of days as the first one.
pub fn daily_std_of_means(tables: &[Table]) -> Result<DailyStat> {
    let first = tables.first().ok_or(InflammationError::NoTables)?;
    let days = first.ncols();

    for (index, table) in tables.iter().enumerate() {
        if table.ncols() != days {
            return Err(InflammationError::ShapeMismatch {
                index,
                expected: days,
                found: table.ncols(),
            });
        }
    }

    let mut means_by_day = Array2::<f64>::zeros((tables.len(), days));
    for (mut row, table) in means_by_day.rows_mut().into_iter().zip(tables) {
        row.assign(&daily_mean(table)?);
    }

    Ok(means_by_day.std_axis(Axis(0), 0.0))
}

/// Compute [`daily_std_of_means`] and hand it to `visualizer` as the
/// `"standard deviation by day"` series.
pub fn analyse<V>(tables: &[Table], visualizer: &mut V) -> Result<DailyStat>
where
    V: Visualizer + ?Sized,
{
    analyse_timed(tables, visualizer).map(|(daily_std, _)| daily_std)
}

/// [`analyse`], also returning the seconds spent in the reduction alone.
fn analyse_timed<V>(tables: &[Table], visualizer: &mut V) -> Result<(DailyStat, f64)>
where
    V: Visualizer + ?Sized,
{
    let compute_start = Instant::now();
    let daily_std = daily_std_of_means(tables)?;
    let compute_time = compute_start.elapsed().as_secs_f64();

    debug!(
        "Computed daily standard deviation over {} tables ({} days)",
        tables.len(),
        daily_std.len()
    );

    let graph = GraphData::new(format!("Daily means across {} datasets", tables.len()))
        .with_series(STD_DEV_BY_DAY, daily_std.to_vec());
    visualizer.visualize(&graph)?;

    Ok((daily_std, compute_time))
}

/// Load every matching file in `data_dir` and run [`analyse`] on it,
/// recording counts and timings.
pub fn analyse_data<V>(
    data_dir: &Path,
    pattern: &str,
    visualizer: &mut V,
) -> Result<AnalysisResult>
where
    V: Visualizer + ?Sized,
{
    let load_start = Instant::now();
    let tables = load_tables(data_dir, pattern)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let (daily_std, compute_time) = analyse_timed(&tables, visualizer)?;

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        files_loaded: tables.len(),
        patients: tables.iter().map(Table::nrows).sum(),
        days: daily_std.len(),
        load_time_seconds: load_time,
        compute_time_seconds: compute_time,
    };

    info!(
        "Analysed {} tables ({} patients) in {:.3}s",
        metadata.files_loaded,
        metadata.patients,
        load_time + compute_time
    );

    Ok(AnalysisResult {
        daily_std,
        metadata,
    })
}

// ── Per-table summaries ───────────────────────────────────────────────────────

/// Average, max and min per day of a single table, in that order.
///
/// With `normalise`, the statistics are computed on
/// [`patient_normalise`]d rows instead of raw values.
pub fn daily_summary(
    table: &Table,
    title: impl Into<String>,
    normalise: bool,
) -> Result<GraphData> {
    let normalised;
    let source = if normalise {
        normalised = patient_normalise(table)?;
        &normalised
    } else {
        table
    };

    Ok(GraphData::new(title)
        .with_series(AVERAGE, daily_mean(source)?.to_vec())
        .with_series(MAX, daily_max(source)?.to_vec())
        .with_series(MIN, daily_min(source)?.to_vec()))
}

/// Hand a [`daily_summary`] of every matching file in `data_dir` to
/// `visualizer`, one graph per file. Returns the number of files shown.
pub fn summarise_data<V>(
    data_dir: &Path,
    pattern: &str,
    normalise: bool,
    visualizer: &mut V,
) -> Result<usize>
where
    V: Visualizer + ?Sized,
{
    let loaded = load_multiple_csvs(data_dir, pattern)?;

    for entry in &loaded {
        let mut title = entry.display_name();
        if normalise {
            title.push_str(" (normalised)");
        }
        debug!("Summarising {}", title);
        let graph = daily_summary(&entry.table, title, normalise)?;
        visualizer.visualize(&graph)?;
    }

    Ok(loaded.len())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
