//! Entry point configuration shared by agents and locations

use serde::{Deserialize, Serialize};

/// Agent-level entry point for map-listing conversations
pub const ENTRY_POINT_LOCATION: &str = "LOCATION";

/// Agent-level entry point for web/search conversations
pub const ENTRY_POINT_NON_LOCAL: &str = "NON_LOCAL";

/// UI placeholder meaning "do not submit this entry point"; never persisted
pub const IGNORE_ENTRY_POINT: &str = "IGNORE";

/// Entry points a location form may offer
pub const LOCATION_ENTRY_POINT_CHOICES: &[&str] = &["PLACESHEET", "MAPS_TACTILE", "IGNORE"];

/// One allowed entry point. The value set is open: the remote API grows
/// entry points over time, so this stays a plain string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPointConfig {
    pub allowed_entry_point: String,
}

impl EntryPointConfig {
    pub fn new(allowed_entry_point: impl Into<String>) -> Self {
        Self {
            allowed_entry_point: allowed_entry_point.into(),
        }
    }
}
