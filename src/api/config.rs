use serde::{Deserialize, Serialize};

use crate::core::{AlignmentOptions, AxisSide};
use crate::error::AxisResult;

use super::config_validation::{
    validate_alignment_behavior, validate_bounds_override, validate_zero_tolerance,
};

/// Whether and where the two axes are aligned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisAlignmentBehavior {
    #[serde(default)]
    pub enabled: bool,
    /// Value that should sit at the same height on both axes.
    #[serde(default)]
    pub level: f64,
}

impl AxisAlignmentBehavior {
    #[must_use]
    pub fn at_level(level: f64) -> Self {
        Self {
            enabled: true,
            level,
        }
    }
}

/// User-fixed bounds replacing the observed ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisBoundsOverride {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl AxisBoundsOverride {
    #[must_use]
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Public dual-axis setup.
///
/// Serializable so hosts can persist panel settings; see the JSON contract
/// helpers for the versioned envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DualAxisConfig {
    #[serde(default)]
    pub left_bounds: AxisBoundsOverride,
    #[serde(default)]
    pub right_bounds: AxisBoundsOverride,
    #[serde(default)]
    pub alignment: AxisAlignmentBehavior,
    #[serde(default)]
    pub zero_tolerance: f64,
}

impl DualAxisConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: AxisAlignmentBehavior) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, side: AxisSide, bounds: AxisBoundsOverride) -> Self {
        match side {
            AxisSide::Left => self.left_bounds = bounds,
            AxisSide::Right => self.right_bounds = bounds,
        }
        self
    }

    #[must_use]
    pub fn with_zero_tolerance(mut self, zero_tolerance: f64) -> Self {
        self.zero_tolerance = zero_tolerance;
        self
    }

    #[must_use]
    pub fn bounds(&self, side: AxisSide) -> AxisBoundsOverride {
        match side {
            AxisSide::Left => self.left_bounds,
            AxisSide::Right => self.right_bounds,
        }
    }

    pub fn alignment_options(&self) -> AxisResult<AlignmentOptions> {
        AlignmentOptions::new(self.zero_tolerance)
    }

    pub fn validate(&self) -> AxisResult<()> {
        validate_bounds_override(AxisSide::Left, self.left_bounds)?;
        validate_bounds_override(AxisSide::Right, self.right_bounds)?;
        validate_alignment_behavior(self.alignment)?;
        validate_zero_tolerance(self.zero_tolerance)
    }
}
