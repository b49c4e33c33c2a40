use serde::{Deserialize, Serialize};

use crate::core::GraphLayout;
use crate::error::{GraphError, GraphResult};

pub const GRAPH_LAYOUT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLayoutJsonContractV1 {
    pub schema_version: u32,
    pub layout: GraphLayout,
}

impl GraphLayout {
    pub fn to_json_contract_v1_pretty(&self) -> GraphResult<String> {
        let payload = GraphLayoutJsonContractV1 {
            schema_version: GRAPH_LAYOUT_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GraphError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    /// Accepts either a bare layout or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> GraphResult<Self> {
        if let Ok(layout) = serde_json::from_str::<GraphLayout>(input) {
            return Ok(layout);
        }
        let payload: GraphLayoutJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GraphError::InvalidData(format!("failed to parse layout json payload: {e}"))
        })?;
        if payload.schema_version != GRAPH_LAYOUT_JSON_SCHEMA_V1 {
            return Err(GraphError::InvalidData(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.layout)
    }
}
