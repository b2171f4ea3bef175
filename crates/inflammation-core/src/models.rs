//! Inflammation tables and the per-day statistics computed over them.
//!
//! A [`Table`] holds one row per patient and one column per day. The daily
//! reducers collapse the patient axis into a [`DailyStat`] vector, and
//! [`patient_normalise`] rescales each patient row into `[0, 1]`.

use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2};

use crate::error::{InflammationError, Result};

/// Patients (rows) x days (columns) of inflammation measurements.
pub type Table = Array2<f64>;

/// One value per day, produced by reducing a [`Table`] along the patient axis.
pub type DailyStat = Array1<f64>;

// ── Daily reducers ────────────────────────────────────────────────────────────

/// Arithmetic mean of each day across all patients.
///
/// Returns [`InflammationError::EmptyTable`] when the table has no rows.
///
/// # Examples
///
/// ```
/// use inflammation_core::models::daily_mean;
/// use ndarray::array;
///
/// let table = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
/// assert_eq!(daily_mean(&table).unwrap(), array![3.0, 4.0]);
/// ```
pub fn daily_mean<S>(table: &ArrayBase<S, Ix2>) -> Result<DailyStat>
where
    S: Data<Elem = f64>,
{
    table
        .mean_axis(Axis(0))
        .ok_or(InflammationError::EmptyTable)
}

/// Maximum of each day across all patients.
pub fn daily_max<S>(table: &ArrayBase<S, Ix2>) -> Result<DailyStat>
where
    S: Data<Elem = f64>,
{
    ensure_has_rows(table)?;
    Ok(table.fold_axis(Axis(0), f64::NEG_INFINITY, |acc, &v| acc.max(v)))
}

/// Minimum of each day across all patients.
pub fn daily_min<S>(table: &ArrayBase<S, Ix2>) -> Result<DailyStat>
where
    S: Data<Elem = f64>,
{
    ensure_has_rows(table)?;
    Ok(table.fold_axis(Axis(0), f64::INFINITY, |acc, &v| acc.min(v)))
}

fn ensure_has_rows<S>(table: &ArrayBase<S, Ix2>) -> Result<()>
where
    S: Data<Elem = f64>,
{
    if table.nrows() == 0 {
        return Err(InflammationError::EmptyTable);
    }
    Ok(())
}

// ── Normalisation ─────────────────────────────────────────────────────────────

/// Rescale every patient row into `[0, 1]` by dividing by the row maximum.
///
/// The lower bound is fixed at 0, not the row minimum. Rows whose maximum
/// is 0 become all zeros. NaN cells are ignored when finding the maximum
/// and come out as 0.
///
/// Fails with [`InflammationError::NegativeValue`] before any division when
/// the table contains a negative value.
///
/// # Examples
///
/// ```
/// use inflammation_core::models::patient_normalise;
/// use ndarray::array;
///
/// let table = array![[0.0, 2.0, 4.0], [0.0, 0.0, 0.0]];
/// let normalised = patient_normalise(&table).unwrap();
/// assert_eq!(normalised, array![[0.0, 0.5, 1.0], [0.0, 0.0, 0.0]]);
/// ```
pub fn patient_normalise<S>(table: &ArrayBase<S, Ix2>) -> Result<Table>
where
    S: Data<Elem = f64>,
{
    if table.iter().any(|&v| v < 0.0) {
        return Err(InflammationError::NegativeValue);
    }

    let mut normalised = table.to_owned();
    for mut row in normalised.rows_mut() {
        let max = row.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        if max > 0.0 {
            row.mapv_inplace(|v| v / max);
        } else {
            row.fill(0.0);
        }
        row.mapv_inplace(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) });
    }

    Ok(normalised)
}

// ── Construction from text ────────────────────────────────────────────────────

/// Build a [`Table`] from rows of text cells.
///
/// Cells are trimmed before parsing. This is where non-numeric data is
/// rejected: a cell that is not a number yields
/// [`InflammationError::NonNumeric`]. Every row must have as many cells as
/// the first one.
///
/// # Examples
///
/// ```
/// use inflammation_core::models::parse_table;
///
/// let table = parse_table(&[["0", "1"], ["2", " 3 "]]).unwrap();
/// assert_eq!(table.dim(), (2, 2));
/// assert!(parse_table(&[["Hello", "there"]]).is_err());
/// ```
pub fn parse_table<R, S>(rows: &[R]) -> Result<Table>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
    let mut values = Vec::with_capacity(rows.len() * n_cols);

    for (row_idx, row) in rows.iter().enumerate() {
        let cells = row.as_ref();
        if cells.len() != n_cols {
            return Err(InflammationError::RaggedRow {
                row: row_idx,
                expected: n_cols,
                found: cells.len(),
            });
        }
        for (col_idx, cell) in cells.iter().enumerate() {
            let text = cell.as_ref().trim();
            let value = text
                .parse::<f64>()
                .map_err(|_| InflammationError::NonNumeric {
                    row: row_idx,
                    column: col_idx,
                    value: text.to_string(),
                })?;
            values.push(value);
        }
    }

    Array2::from_shape_vec((rows.len(), n_cols), values)
        .map_err(|e| InflammationError::Other(e.into()))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
