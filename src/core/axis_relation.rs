use serde::{Deserialize, Serialize};

use crate::core::AxisRange;
use crate::error::{AxisError, AxisResult};

/// Tuning for the aligner's comparisons against the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AlignmentOptions {
    /// Distance from zero under which a bound counts as sitting on the pivot.
    ///
    /// `0.0` keeps exact-equality semantics.
    #[serde(default)]
    pub zero_tolerance: f64,
}

impl AlignmentOptions {
    pub fn new(zero_tolerance: f64) -> AxisResult<Self> {
        if !zero_tolerance.is_finite() || zero_tolerance < 0.0 {
            return Err(AxisError::InvalidData(
                "zero tolerance must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self { zero_tolerance })
    }

    #[must_use]
    pub(crate) fn is_zero(self, value: f64) -> bool {
        value.abs() <= self.zero_tolerance
    }

    #[must_use]
    pub(crate) fn is_non_negative(self, value: f64) -> bool {
        value >= -self.zero_tolerance
    }

    #[must_use]
    pub(crate) fn is_non_positive(self, value: f64) -> bool {
        value <= self.zero_tolerance
    }

    #[must_use]
    pub(crate) fn is_positive(self, value: f64) -> bool {
        value > self.zero_tolerance
    }

    #[must_use]
    pub(crate) fn is_negative(self, value: f64) -> bool {
        value < -self.zero_tolerance
    }
}

/// How two zero-centered ranges sit relative to the pivot.
///
/// The flags overlap: a pair can be both `one_side` and `two_cross` when
/// bounds touch zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRelation {
    /// Some bound lies on the pivot.
    pub zero: bool,
    /// Both ranges lie on the same side of the pivot.
    pub one_side: bool,
    /// The ranges lie on opposite sides of the pivot.
    pub opposite_sides: bool,
    /// Both ranges straddle the pivot.
    pub two_cross: bool,
}

impl AxisRelation {
    #[must_use]
    pub fn classify(left: AxisRange, right: AxisRange, options: AlignmentOptions) -> Self {
        let zero = options.is_zero(left.min)
            || options.is_zero(left.max)
            || options.is_zero(right.min)
            || options.is_zero(right.max);

        Self {
            zero,
            one_side: is_one_side(left, right, options),
            opposite_sides: is_opposite_sides(left, right, options),
            two_cross: is_two_cross(left, right, options),
        }
    }
}

pub(crate) fn is_one_side(left: AxisRange, right: AxisRange, options: AlignmentOptions) -> bool {
    (options.is_non_negative(left.min) && options.is_non_negative(right.min))
        || (options.is_non_positive(left.max) && options.is_non_positive(right.max))
}

pub(crate) fn is_opposite_sides(
    left: AxisRange,
    right: AxisRange,
    options: AlignmentOptions,
) -> bool {
    (options.is_non_negative(left.min) && options.is_non_positive(right.max))
        || (options.is_non_positive(left.max) && options.is_non_negative(right.min))
}

pub(crate) fn is_two_cross(left: AxisRange, right: AxisRange, options: AlignmentOptions) -> bool {
    options.is_non_positive(left.min)
        && options.is_non_negative(left.max)
        && options.is_non_positive(right.min)
        && options.is_non_negative(right.max)
}
