//! Resource lane model definition.

use serde::{Deserialize, Serialize};

/// One contractor row on the timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceLane {
    /// Contractor ID (`ID` on the wire)
    pub id: u64,

    /// Contractor name shown as the lane header
    pub display_name: String,

    /// Display color, assigned once per session by the color registry
    pub color: String,
}

impl ResourceLane {
    pub fn new(id: u64, display_name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            color: color.into(),
        }
    }
}
