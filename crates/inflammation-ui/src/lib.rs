//! Terminal UI layer for inflammation analysis.
//!
//! Provides themes, the line-chart view, the blocking chart event loop and
//! the [`Visualizer`](inflammation_core::graph::Visualizer) implementations
//! used by the binary: a full-screen terminal chart and a JSON exporter.

pub mod app;
pub mod chart_view;
pub mod themes;
pub mod visualizer;

pub use inflammation_core as core;
pub use visualizer::{JsonVisualizer, TerminalVisualizer};
