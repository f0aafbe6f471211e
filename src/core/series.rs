use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::core::AxisRange;
use crate::error::{AxisError, AxisResult};

/// Sample plotted against one Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts a UTC timestamp and decimal value into a sample.
    ///
    /// Time is stored as unix seconds with millisecond precision.
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> AxisResult<Self> {
        let y = value.to_f64().ok_or_else(|| {
            AxisError::InvalidData("value cannot be represented as f64".to_owned())
        })?;
        Ok(Self {
            x: time.timestamp_millis() as f64 / 1000.0,
            y,
        })
    }
}

/// Smallest range covering every finite `y`, or `None` when there is none.
#[must_use]
pub fn observed_range(points: &[DataPoint]) -> Option<AxisRange> {
    points
        .iter()
        .map(|point| point.y)
        .filter(|y| y.is_finite())
        .fold(None, |acc, y| match acc {
            None => Some(AxisRange::new(y, y)),
            Some(range) => Some(AxisRange::new(range.min.min(y), range.max.max(y))),
        })
}
