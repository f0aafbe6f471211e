use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{AxisError, AxisResult};

/// Half-width added on each side of a flat range before alignment.
pub const DEGENERATE_EXPANSION: f64 = 0.25;

/// Numeric span displayed on one Y axis.
///
/// `min <= max` is expected but not enforced by [`AxisRange::new`]; the
/// aligner tolerates whatever it is given. Use [`AxisRange::new_checked`]
/// at API boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Domain used for an axis that has neither data nor overrides.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Builds a range that is finite and ordered.
    pub fn new_checked(min: f64, max: f64) -> AxisResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(AxisError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max == self.min
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Widens a flat range by [`DEGENERATE_EXPANSION`] in both directions.
    #[must_use]
    pub fn expand_degenerate(self) -> Self {
        if self.is_degenerate() {
            Self {
                min: self.min - DEGENERATE_EXPANSION,
                max: self.max + DEGENERATE_EXPANSION,
            }
        } else {
            self
        }
    }

    #[must_use]
    pub fn shifted(self, delta: f64) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Relative position of `value` inside the range, `0.0` at `min` and
    /// `1.0` at `max`. `None` for a zero-width range.
    #[must_use]
    pub fn normalized_position(self, value: f64) -> Option<f64> {
        let span = self.span();
        if span == 0.0 || !span.is_finite() {
            return None;
        }
        Some((value - self.min) / span)
    }

    /// Replaces either bound with an explicit value.
    #[must_use]
    pub fn with_overrides(self, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.unwrap_or(self.min),
            max: max.unwrap_or(self.max),
        }
    }

    /// Maps a value to pixel Y, with `max` at the top edge.
    pub fn value_to_pixel(self, value: f64, viewport: Viewport) -> AxisResult<f64> {
        let span = self.validated_span(viewport)?;
        if !value.is_finite() {
            return Err(AxisError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.min) / span;
        Ok((1.0 - normalized) * f64::from(viewport.height))
    }

    /// Maps pixel Y back to a value.
    pub fn pixel_to_value(self, pixel: f64, viewport: Viewport) -> AxisResult<f64> {
        let span = self.validated_span(viewport)?;
        if !pixel.is_finite() {
            return Err(AxisError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = 1.0 - pixel / f64::from(viewport.height);
        Ok(self.min + normalized * span)
    }

    fn validated_span(self, viewport: Viewport) -> AxisResult<f64> {
        if !viewport.is_valid() {
            return Err(AxisError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let span = self.span();
        if !self.is_finite() || span == 0.0 {
            return Err(AxisError::InvalidData(
                "axis range must be finite and non-zero".to_owned(),
            ));
        }
        Ok(span)
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::UNIT
    }
}
