//! Data layer for the inflammation analysis tool.
//!
//! Discovers and parses inflammation CSV files, aggregates daily statistics
//! across tables, and builds the per-table summaries handed to visualizers.

pub mod compute;
pub mod reader;

pub use inflammation_core as core;
