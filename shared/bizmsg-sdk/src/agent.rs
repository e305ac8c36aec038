//! Agent resource

use serde::{Deserialize, Serialize};

use crate::conversational::{template_settings, ConversationalSettings};
use crate::entry_point::EntryPointConfig;
use crate::non_local::NonLocalConfig;
use crate::representative::{template_hours, SupportedAgentInteraction};

/// Agent entity as the remote management API exchanges it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Resource name, e.g. `brands/12345/agents/67890`. Absent until
    /// created remotely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub display_name: String,

    pub business_messages_agent: BusinessMessagesAgent,
}

/// Messaging-specific agent configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMessagesAgent {
    #[serde(default)]
    pub custom_agent_id: String,

    #[serde(default)]
    pub logo_url: String,

    #[serde(default)]
    pub default_locale: String,

    #[serde(default, skip_serializing_if = "ConversationalSettings::is_empty")]
    pub conversational_settings: ConversationalSettings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_agent_interaction: Option<SupportedAgentInteraction>,

    /// Zero or one additional representative
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_agent_interactions: Vec<SupportedAgentInteraction>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry_point_configs: Vec<EntryPointConfig>,

    /// Present only for agents with non-local entry points enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_local_config: Option<NonLocalConfig>,
}

impl Agent {
    /// Fresh default agent for a create form: an empty `en` locale block,
    /// an always-on bot primary representative, and a human additional
    /// representative.
    pub fn form_template() -> Self {
        Self {
            name: None,
            display_name: String::new(),
            business_messages_agent: BusinessMessagesAgent {
                custom_agent_id: String::new(),
                logo_url: String::new(),
                default_locale: "en".to_string(),
                conversational_settings: template_settings("en"),
                primary_agent_interaction: Some(SupportedAgentInteraction::bot(template_hours())),
                additional_agent_interactions: vec![SupportedAgentInteraction::human(
                    template_hours(),
                )],
                entry_point_configs: Vec::new(),
                non_local_config: None,
            },
        }
    }
}
