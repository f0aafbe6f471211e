use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    AlignmentCase, AxisRange, AxisSide, DataPoint, Viewport, align_axes_with, observed_range,
};
use crate::error::{AxisError, AxisResult};

use super::config_validation::{
    side_label, validate_alignment_behavior, validate_bounds_override, validate_zero_tolerance,
};
use super::{AxisAlignmentBehavior, AxisBoundsOverride, DualAxisConfig};

/// Axis ranges ready to hand to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAxes {
    pub left: AxisRange,
    pub right: AxisRange,
    /// Alignment branch applied, `None` when alignment is disabled.
    #[serde(default)]
    pub case: Option<AlignmentCase>,
}

impl ResolvedAxes {
    #[must_use]
    pub fn range(&self, side: AxisSide) -> AxisRange {
        match side {
            AxisSide::Left => self.left,
            AxisSide::Right => self.right,
        }
    }

    /// Pixel Y at which `level` is drawn on `side`.
    pub fn pivot_pixel(&self, side: AxisSide, level: f64, viewport: Viewport) -> AxisResult<f64> {
        self.range(side).value_to_pixel(level, viewport)
    }
}

/// Owns the left and right series of a dual-axis chart and resolves their
/// axis ranges, aligning them when configured to.
#[derive(Debug, Clone, PartialEq)]
pub struct DualAxisScales {
    config: DualAxisConfig,
    left_points: Vec<DataPoint>,
    right_points: Vec<DataPoint>,
}

impl DualAxisScales {
    pub fn new(config: DualAxisConfig) -> AxisResult<Self> {
        config.validate()?;
        debug!(
            alignment_enabled = config.alignment.enabled,
            level = config.alignment.level,
            "init dual axis scales"
        );
        Ok(Self {
            config,
            left_points: Vec::new(),
            right_points: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &DualAxisConfig {
        &self.config
    }

    #[must_use]
    pub fn points(&self, side: AxisSide) -> &[DataPoint] {
        match side {
            AxisSide::Left => &self.left_points,
            AxisSide::Right => &self.right_points,
        }
    }

    /// Replaces the series plotted against `side`.
    pub fn set_series(&mut self, side: AxisSide, points: Vec<DataPoint>) {
        debug!(side = side_label(side), count = points.len(), "set axis series");
        *self.points_mut(side) = points;
    }

    pub fn append_point(&mut self, side: AxisSide, point: DataPoint) {
        let points = self.points_mut(side);
        points.push(point);
        trace!(side = side_label(side), count = points.len(), "append axis point");
    }

    pub fn clear_series(&mut self, side: AxisSide) {
        debug!(side = side_label(side), "clear axis series");
        self.points_mut(side).clear();
    }

    pub fn set_alignment_behavior(&mut self, behavior: AxisAlignmentBehavior) -> AxisResult<()> {
        validate_alignment_behavior(behavior)?;
        self.config.alignment = behavior;
        Ok(())
    }

    pub fn set_bounds_override(
        &mut self,
        side: AxisSide,
        bounds: AxisBoundsOverride,
    ) -> AxisResult<()> {
        validate_bounds_override(side, bounds)?;
        self.config = self.config.with_bounds(side, bounds);
        Ok(())
    }

    pub fn set_zero_tolerance(&mut self, zero_tolerance: f64) -> AxisResult<()> {
        validate_zero_tolerance(zero_tolerance)?;
        self.config.zero_tolerance = zero_tolerance;
        Ok(())
    }

    /// Range covered by the finite samples of `side`.
    #[must_use]
    pub fn observed_range(&self, side: AxisSide) -> Option<AxisRange> {
        observed_range(self.points(side))
    }

    /// Resolves both axes: observed data (or the unit domain), then
    /// overrides, then alignment.
    pub fn resolve(&self) -> AxisResult<ResolvedAxes> {
        let left = self.resolve_side(AxisSide::Left)?;
        let right = self.resolve_side(AxisSide::Right)?;

        let alignment = self.config.alignment;
        if !alignment.enabled {
            debug!(?left, ?right, "resolved axes without alignment");
            return Ok(ResolvedAxes {
                left,
                right,
                case: None,
            });
        }

        let options = self.config.alignment_options()?;
        let aligned = align_axes_with(left, right, alignment.level, options);
        trace!(
            case = ?aligned.case,
            rate = ?aligned.rate,
            level = alignment.level,
            "aligned dual axes"
        );
        debug!(left = ?aligned.left, right = ?aligned.right, "resolved aligned axes");

        Ok(ResolvedAxes {
            left: aligned.left,
            right: aligned.right,
            case: Some(aligned.case),
        })
    }

    fn resolve_side(&self, side: AxisSide) -> AxisResult<AxisRange> {
        let bounds = self.config.bounds(side);
        let observed = self.observed_range(side).unwrap_or(AxisRange::UNIT);
        let range = observed.with_overrides(bounds.min, bounds.max);

        if range.min > range.max {
            warn!(
                side = side_label(side),
                min = range.min,
                max = range.max,
                "rejecting inverted axis range after overrides"
            );
            return Err(AxisError::InvalidRange {
                min: range.min,
                max: range.max,
            });
        }
        Ok(range)
    }

    fn points_mut(&mut self, side: AxisSide) -> &mut Vec<DataPoint> {
        match side {
            AxisSide::Left => &mut self.left_points,
            AxisSide::Right => &mut self.right_points,
        }
    }
}
