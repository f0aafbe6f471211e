mod config;
mod config_validation;
mod dual_axis;
mod json_contract;

pub use config::{AxisAlignmentBehavior, AxisBoundsOverride, DualAxisConfig};
pub use dual_axis::{DualAxisScales, ResolvedAxes};
pub use json_contract::{
    DUAL_AXIS_CONFIG_JSON_SCHEMA_V1, DualAxisConfigJsonContractV1, RESOLVED_AXES_JSON_SCHEMA_V1,
    ResolvedAxesJsonContractV1,
};
