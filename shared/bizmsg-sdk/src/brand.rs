//! Brand resource

use serde::{Deserialize, Serialize};

/// Brand entity, the parent resource of agents and locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Resource name, e.g. `brands/12345`. Absent until created remotely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub display_name: String,
}

impl Brand {
    /// Create a brand that has not been persisted yet
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            name: None,
            display_name: display_name.into(),
        }
    }
}
