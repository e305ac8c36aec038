//! Location resource

use serde::{Deserialize, Serialize};

use crate::conversational::{template_settings, ConversationalSettings};
use crate::entry_point::EntryPointConfig;

/// A physical place attached to an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Resource name, e.g. `brands/12345/locations/67890`. Absent until
    /// created remotely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub place_id: String,

    /// Resource name of the agent answering for this location
    #[serde(default)]
    pub agent: String,

    #[serde(default)]
    pub default_locale: String,

    #[serde(default, skip_serializing_if = "ConversationalSettings::is_empty")]
    pub conversational_settings: ConversationalSettings,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location_entry_point_configs: Vec<EntryPointConfig>,
}

impl Location {
    /// Fresh default location for a create form: empty identifiers, an
    /// empty `en` locale block, and both map entry points enabled.
    pub fn form_template() -> Self {
        Self {
            name: None,
            place_id: String::new(),
            agent: String::new(),
            default_locale: "en".to_string(),
            conversational_settings: template_settings("en"),
            location_entry_point_configs: vec![
                EntryPointConfig::new("PLACESHEET"),
                EntryPointConfig::new("MAPS_TACTILE"),
            ],
        }
    }
}
