//! Named series handed from the analysis layer to a visualizer.

use serde::Serialize;

use crate::error::Result;

/// Series name used for the cross-table variability plot.
pub const STD_DEV_BY_DAY: &str = "standard deviation by day";
/// Series name for the per-day mean of a single table.
pub const AVERAGE: &str = "average";
/// Series name for the per-day maximum of a single table.
pub const MAX: &str = "max";
/// Series name for the per-day minimum of a single table.
pub const MIN: &str = "min";

/// A single line plot: one value per day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    /// `(day, value)` pairs in the form chart widgets expect.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(day, &value)| (day as f64, value))
            .collect()
    }
}

/// A titled, insertion-ordered mapping of series name to values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphData {
    pub title: String,
    series: Vec<Series>,
}

impl GraphData {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
        }
    }

    /// Add a series, replacing the values of an existing series with the same
    /// name without changing its position.
    pub fn insert(&mut self, name: impl Into<String>, values: impl IntoIterator<Item = f64>) {
        let name = name.into();
        let values: Vec<f64> = values.into_iter().collect();
        match self.series.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.values = values,
            None => self.series.push(Series { name, values }),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_series(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) -> Self {
        self.insert(name, values);
        self
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.values.as_slice())
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Output sink for analysis results.
///
/// Implementations render or export every series in `graph`. This is the
/// only place the analysis pipeline performs output.
pub trait Visualizer {
    fn visualize(&mut self, graph: &GraphData) -> Result<()>;
}

impl<V: Visualizer + ?Sized> Visualizer for &mut V {
    fn visualize(&mut self, graph: &GraphData) -> Result<()> {
        (**self).visualize(graph)
    }
}
