//! CSV discovery and loading for inflammation data.
//!
//! Scans a data directory for files whose names match a glob (by default
//! `inflammation*.csv`) and parses each one into a [`Table`]: one patient per
//! row, one day per column, comma-delimited, no header.

use std::fs::File;
use std::path::{Path, PathBuf};

use inflammation_core::models::{parse_table, Table};
use inflammation_core::{InflammationError, Result};
use regex::Regex;
use tracing::{debug, info, warn};

/// A table together with the file it was read from.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub path: PathBuf,
    pub table: Table,
}

impl LoadedTable {
    /// File name for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Compile a file-name glob into an anchored regular expression.
///
/// `*` matches any run of characters and `?` exactly one; everything else is
/// literal.
pub fn pattern_to_regex(pattern: &str) -> Result<Regex> {
    let mut expr = String::with_capacity(pattern.len() + 8);
    expr.push('^');
    let mut buf = [0u8; 4];
    for c in pattern.chars() {
        match c {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            other => expr.push_str(&regex::escape(other.encode_utf8(&mut buf))),
        }
    }
    expr.push('$');
    Ok(Regex::new(&expr)?)
}

/// Find the files directly inside `data_dir` whose names match `pattern`,
/// sorted by path.
///
/// Fails with [`InflammationError::DataPathNotFound`] when the directory is
/// missing and [`InflammationError::NoDataFiles`] when nothing matches.
pub fn find_data_files(data_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !data_dir.is_dir() {
        warn!("Data path does not exist: {}", data_dir.display());
        return Err(InflammationError::DataPathNotFound(data_dir.to_path_buf()));
    }

    let matcher = pattern_to_regex(pattern)?;

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .file_name()
                    .to_str()
                    .map(|name| matcher.is_match(name))
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    if files.is_empty() {
        return Err(InflammationError::NoDataFiles {
            dir: data_dir.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    files.sort();
    debug!(
        "Found {} data files matching {:?} in {}",
        files.len(),
        pattern,
        data_dir.display()
    );
    Ok(files)
}

/// Load a single comma-delimited file into a [`Table`].
///
/// Cells are trimmed, and blank or whitespace-only lines are skipped. A
/// non-numeric cell yields [`InflammationError::NonNumeric`]; rows of
/// differing length yield [`InflammationError::RaggedRow`].
pub fn load_csv(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| InflammationError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    let table = parse_table(&rows)?;
    debug!(
        "Loaded {} ({} patients x {} days)",
        path.display(),
        table.nrows(),
        table.ncols()
    );
    Ok(table)
}

/// Load every file in `data_dir` matching `pattern`, in path order.
///
/// Stops at the first file that fails to load.
pub fn load_multiple_csvs(data_dir: &Path, pattern: &str) -> Result<Vec<LoadedTable>> {
    let paths = find_data_files(data_dir, pattern)?;

    let tables = paths
        .into_iter()
        .map(|path| {
            let table = load_csv(&path)?;
            Ok(LoadedTable { path, table })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        "Loaded {} inflammation tables from {}",
        tables.len(),
        data_dir.display()
    );
    Ok(tables)
}

/// Load the tables only, discarding their source paths.
pub fn load_tables(data_dir: &Path, pattern: &str) -> Result<Vec<Table>> {
    Ok(load_multiple_csvs(data_dir, pattern)?
        .into_iter()
        .map(|loaded| loaded.table)
        .collect())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
