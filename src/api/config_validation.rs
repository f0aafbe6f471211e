use crate::core::{AlignmentOptions, AxisSide};
use crate::error::{AxisError, AxisResult};

use super::{AxisAlignmentBehavior, AxisBoundsOverride};

pub(super) fn validate_bounds_override(
    side: AxisSide,
    bounds: AxisBoundsOverride,
) -> AxisResult<()> {
    let label = side_label(side);
    for value in [bounds.min, bounds.max].into_iter().flatten() {
        if !value.is_finite() {
            return Err(AxisError::InvalidData(format!(
                "{label} axis bound override must be finite"
            )));
        }
    }
    if let (Some(min), Some(max)) = (bounds.min, bounds.max) {
        if min > max {
            return Err(AxisError::InvalidData(format!(
                "{label} axis bound override min must be <= max"
            )));
        }
    }
    Ok(())
}

pub(super) fn validate_alignment_behavior(behavior: AxisAlignmentBehavior) -> AxisResult<()> {
    if !behavior.level.is_finite() {
        return Err(AxisError::InvalidData(
            "axis alignment level must be finite".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_zero_tolerance(zero_tolerance: f64) -> AxisResult<()> {
    AlignmentOptions::new(zero_tolerance).map(|_| ())
}

pub(super) fn side_label(side: AxisSide) -> &'static str {
    match side {
        AxisSide::Left => "left",
        AxisSide::Right => "right",
    }
}
