use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::{AnimationPhase, BarBuffer, BarRect, HighlightGeometry, Viewport};
use crate::error::{ChartError, ChartResult};

pub const LAYOUT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Pixel-space layout of one data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferSnapshot {
    pub rects: Vec<BarRect>,
    pub stack_top_indices: IndexSet<usize>,
    pub stack_bottom_indices: IndexSet<usize>,
}

impl From<&BarBuffer> for BufferSnapshot {
    fn from(buffer: &BarBuffer) -> Self {
        Self {
            rects: buffer.rects().to_vec(),
            stack_top_indices: buffer.stack_top_indices().clone(),
            stack_bottom_indices: buffer.stack_bottom_indices().clone(),
        }
    }
}

/// Serializable layout state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub viewport: Viewport,
    pub phase: AnimationPhase,
    pub buffers: Vec<BufferSnapshot>,
    pub highlights: Vec<HighlightGeometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: LayoutSnapshot,
}

impl LayoutSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = LayoutSnapshotJsonContractV1 {
            schema_version: LAYOUT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize layout snapshot v1: {e}"))
        })
    }

    pub fn from_json_contract_str(input: &str) -> ChartResult<Self> {
        let payload: LayoutSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse layout snapshot json: {e}"))
        })?;
        if payload.schema_version != LAYOUT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported layout snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
