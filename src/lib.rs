//! pie-rs: composition layer for a donut-style breakdown chart.
//!
//! This crate owns everything around the drawing backend, never the drawing
//! itself: projecting category records into render-facing slices, building
//! the declarative chart configuration, assembling tooltip markup, and
//! driving the mount/resize/unmount lifecycle against a backend trait.

pub mod api;
pub mod core;
pub mod error;
pub mod presets;
pub mod render;
pub mod telemetry;

pub use api::{PieChartConfig, PieChartView};
pub use error::{ChartError, ChartResult};
