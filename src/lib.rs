//! axis-align: dual Y-axis range alignment.
//!
//! `core` holds the pure aligner and its value types. `api` wraps it in a
//! coordinator that derives both axis ranges from series data, applies
//! per-axis overrides and aligns the axes at a configured level.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use crate::api::{DualAxisConfig, DualAxisScales, ResolvedAxes};
pub use crate::core::{AxisRange, align_axes};
pub use error::{AxisError, AxisResult};
