//! Agent form decoding

use bizmsg_sdk::{
    Agent, BusinessMessagesAgent, EntryPointConfig, ENTRY_POINT_LOCATION, IGNORE_ENTRY_POINT,
};

use super::form::FormMap;
use super::non_local::decode_non_local_config;
use super::representative::decode_representative;
use super::settings::decode_conversational_settings;

/// Decode a submitted agent form into the nested agent resource
pub fn decode_agent_form(form: &FormMap) -> Agent {
    Agent {
        name: None,
        display_name: form.scalar("displayName").to_string(),
        business_messages_agent: BusinessMessagesAgent {
            custom_agent_id: form.scalar("customAgentId").to_string(),
            logo_url: form.scalar("logoUrl").to_string(),
            default_locale: form.scalar("defaultLocale").to_string(),
            conversational_settings: decode_conversational_settings(form),
            primary_agent_interaction: decode_representative(
                form,
                "primaryAgentInteraction.interactionType",
                "primary",
            ),
            additional_agent_interactions: decode_representative(
                form,
                "additionalAgentInteraction.interactionType",
                "additional",
            )
            .into_iter()
            .collect(),
            entry_point_configs: decode_agent_entry_points(form),
            non_local_config: decode_non_local_config(form),
        },
    }
}

/// Entry points submitted by the form, minus the IGNORE placeholder. A
/// form without the field gets the map-location entry point.
fn decode_agent_entry_points(form: &FormMap) -> Vec<EntryPointConfig> {
    if !form.contains("allowedEntryPoint[]") {
        return vec![EntryPointConfig::new(ENTRY_POINT_LOCATION)];
    }

    form.values("allowedEntryPoint[]")
        .iter()
        .filter(|value| *value != IGNORE_ENTRY_POINT)
        .map(EntryPointConfig::new)
        .collect()
}
