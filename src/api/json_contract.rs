use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

use super::{DualAxisConfig, ResolvedAxes};

pub const DUAL_AXIS_CONFIG_JSON_SCHEMA_V1: u32 = 1;
pub const RESOLVED_AXES_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualAxisConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: DualAxisConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAxesJsonContractV1 {
    pub schema_version: u32,
    pub axes: ResolvedAxes,
}

impl DualAxisConfig {
    pub fn to_json_contract_v1_pretty(&self) -> AxisResult<String> {
        let payload = DualAxisConfigJsonContractV1 {
            schema_version: DUAL_AXIS_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AxisError::InvalidData(format!("failed to serialize dual axis config contract v1: {e}"))
        })
    }

    /// Parses either a bare config or a versioned envelope, then validates it.
    pub fn from_json_compat_str(input: &str) -> AxisResult<Self> {
        let config = match serde_json::from_str::<DualAxisConfigJsonContractV1>(input) {
            Ok(payload) => {
                if payload.schema_version != DUAL_AXIS_CONFIG_JSON_SCHEMA_V1 {
                    return Err(AxisError::InvalidData(format!(
                        "unsupported dual axis config schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.config
            }
            Err(_) => serde_json::from_str::<DualAxisConfig>(input).map_err(|e| {
                AxisError::InvalidData(format!("failed to parse dual axis config json: {e}"))
            })?,
        };
        config.validate()?;
        Ok(config)
    }
}

impl ResolvedAxes {
    pub fn to_json_contract_v1_pretty(&self) -> AxisResult<String> {
        let payload = ResolvedAxesJsonContractV1 {
            schema_version: RESOLVED_AXES_JSON_SCHEMA_V1,
            axes: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AxisError::InvalidData(format!("failed to serialize resolved axes contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> AxisResult<Self> {
        if let Ok(payload) = serde_json::from_str::<ResolvedAxesJsonContractV1>(input) {
            if payload.schema_version != RESOLVED_AXES_JSON_SCHEMA_V1 {
                return Err(AxisError::InvalidData(format!(
                    "unsupported resolved axes schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.axes);
        }
        serde_json::from_str::<ResolvedAxes>(input).map_err(|e| {
            AxisError::InvalidData(format!("failed to parse resolved axes json: {e}"))
        })
    }
}
