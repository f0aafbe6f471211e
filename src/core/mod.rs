pub mod axis_alignment;
pub mod axis_range;
pub mod axis_relation;
pub mod series;
pub mod types;

pub use axis_alignment::{
    AlignmentCase, AxisAlignment, align_axes, align_axes_batch, align_axes_with, alignment_rate,
};
pub use axis_range::{AxisRange, DEGENERATE_EXPANSION};
pub use axis_relation::{AlignmentOptions, AxisRelation};
pub use series::{DataPoint, observed_range};
pub use types::{AxisSide, Viewport};
