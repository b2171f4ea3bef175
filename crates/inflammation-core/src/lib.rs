//! Core types and pure statistics for the inflammation analysis tool.
//!
//! Holds the table model and the Statistics Engine (per-day reductions and
//! per-patient normalisation), the shared error type, the graph data model
//! handed to visualizers, CLI settings and number formatting helpers.

pub mod error;
pub mod formatting;
pub mod graph;
pub mod models;
pub mod settings;

pub use error::{InflammationError, Result};
pub use models::{DailyStat, Table};
