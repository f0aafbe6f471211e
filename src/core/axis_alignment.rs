use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-alignment")]
use rayon::prelude::*;

use crate::core::axis_relation::{AlignmentOptions, AxisRelation, is_one_side, is_two_cross};
use crate::core::AxisRange;

/// Branch of the alignment that produced an [`AxisAlignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentCase {
    /// Level was NaN; ranges are returned untouched.
    Skipped,
    /// Both ranges touch the pivot on the same side and were snapped to it.
    SnapToPivot,
    /// Ranges on opposite sides were mirrored around the pivot.
    Mirrored,
    /// Same-side ranges had their near bound rescaled by the rate.
    OneSideScaled,
    /// Straddling ranges were cross-derived from each other.
    TwoCrossScaled,
    /// One range straddles the pivot while the other does not.
    MixedScaled,
}

/// Outcome of a single alignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAlignment {
    pub left: AxisRange,
    pub right: AxisRange,
    pub case: AlignmentCase,
    /// Scale factor between the axes, when the rescaling branches ran.
    pub rate: Option<f64>,
}

impl AxisAlignment {
    #[must_use]
    pub fn ranges(self) -> (AxisRange, AxisRange) {
        (self.left, self.right)
    }
}

/// Aligns two axis ranges so `level` sits at the same relative height on both.
///
/// A NaN `level` leaves both ranges unchanged. The function never fails:
/// flat ranges are widened and zero denominators are guarded.
#[must_use]
pub fn align_axes(left: AxisRange, right: AxisRange, level: f64) -> (AxisRange, AxisRange) {
    align_axes_with(left, right, level, AlignmentOptions::default()).ranges()
}

/// Same as [`align_axes`], reporting the branch taken and honoring `options`.
#[must_use]
pub fn align_axes_with(
    left: AxisRange,
    right: AxisRange,
    level: f64,
    options: AlignmentOptions,
) -> AxisAlignment {
    if level.is_nan() {
        return AxisAlignment {
            left,
            right,
            case: AlignmentCase::Skipped,
            rate: None,
        };
    }

    let shift = level != 0.0;
    let (mut l, mut r) = if shift {
        (left.shifted(-level), right.shifted(-level))
    } else {
        (left, right)
    };
    l = l.expand_degenerate();
    r = r.expand_degenerate();

    let relation = AxisRelation::classify(l, r, options);
    let mut rate = None;

    let case = if relation.zero && relation.one_side {
        snap_to_pivot(&mut l, options);
        snap_to_pivot(&mut r, options);
        AlignmentCase::SnapToPivot
    } else if relation.opposite_sides {
        if options.is_non_negative(l.min) {
            l.min = -l.max;
            r.max = -r.min;
        } else {
            l.max = -l.min;
            r.min = -r.max;
        }
        AlignmentCase::Mirrored
    } else {
        let factor = alignment_rate(l, r, options);
        rate = Some(factor);

        if relation.one_side {
            if options.is_positive(l.min) {
                l.min = l.max / factor;
                r.min = r.max / factor;
            } else {
                l.max = l.min / factor;
                r.max = r.min / factor;
            }
            AlignmentCase::OneSideScaled
        } else if relation.two_cross {
            // Only cross-derive from bounds that carry a scale.
            if !options.is_zero(r.min) {
                l.min = r.min * factor;
            }
            if !options.is_zero(l.min) {
                r.min = l.min / factor;
            }
            if !options.is_zero(r.max) {
                l.max = r.max * factor;
            }
            if !options.is_zero(l.max) {
                r.max = l.max / factor;
            }
            AlignmentCase::TwoCrossScaled
        } else {
            if options.is_positive(l.min) {
                l.min = r.min * factor;
            }
            if options.is_positive(r.min) {
                r.min = l.min / factor;
            }
            if options.is_negative(l.max) {
                l.max = r.max * factor;
            }
            if options.is_negative(r.max) {
                r.max = l.max / factor;
            }
            AlignmentCase::MixedScaled
        }
    };

    if shift {
        l = l.shifted(level);
        r = r.shifted(level);
    }

    AxisAlignment {
        left: l,
        right: r,
        case,
        rate,
    }
}

/// Proportional scale between two zero-centered ranges.
#[must_use]
pub fn alignment_rate(left: AxisRange, right: AxisRange, options: AlignmentOptions) -> f64 {
    if is_two_cross(left, right, options) {
        let rate_left = if options.is_zero(right.min) {
            0.0
        } else {
            left.min / right.min
        };
        let rate_right = if options.is_zero(right.max) {
            0.0
        } else {
            left.max / right.max
        };
        return rate_left.max(rate_right);
    }

    if is_one_side(left, right, options) {
        return magnitude_ratio(left, options).max(magnitude_ratio(right, options));
    }

    if options.is_positive(left.min) || options.is_positive(right.min) {
        left.max / right.max
    } else {
        left.min / right.min
    }
}

/// Aligns every pair independently, preserving input order.
#[must_use]
pub fn align_axes_batch(
    pairs: &[(AxisRange, AxisRange)],
    level: f64,
    options: AlignmentOptions,
) -> Vec<AxisAlignment> {
    #[cfg(feature = "parallel-alignment")]
    {
        pairs
            .par_iter()
            .map(|&(left, right)| align_axes_with(left, right, level, options))
            .collect()
    }

    #[cfg(not(feature = "parallel-alignment"))]
    {
        pairs
            .iter()
            .map(|&(left, right)| align_axes_with(left, right, level, options))
            .collect()
    }
}

fn snap_to_pivot(range: &mut AxisRange, options: AlignmentOptions) {
    if options.is_positive(range.max) {
        range.min = 0.0;
    } else {
        range.max = 0.0;
    }
}

fn magnitude_ratio(range: AxisRange, options: AlignmentOptions) -> f64 {
    let abs_min = range.min.abs();
    let abs_max = range.max.abs();
    let up = abs_min.max(abs_max);
    let down = abs_min.min(abs_max);
    if options.is_zero(down) { up } else { up / down }
}
