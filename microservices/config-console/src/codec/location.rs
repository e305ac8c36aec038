//! Location form decoding

use bizmsg_sdk::{EntryPointConfig, Location, IGNORE_ENTRY_POINT};

use super::form::FormMap;
use super::settings::decode_conversational_settings;

/// Decode a submitted location form into the nested location resource
pub fn decode_location_form(form: &FormMap) -> Location {
    Location {
        name: None,
        place_id: form.scalar("placeId").to_string(),
        agent: form.scalar("agent").to_string(),
        default_locale: form.scalar("defaultLocale").to_string(),
        conversational_settings: decode_conversational_settings(form),
        location_entry_point_configs: decode_entry_points(form),
    }
}

/// Selected entry points in submission order. IGNORE is a form-only
/// placeholder and is never persisted.
fn decode_entry_points(form: &FormMap) -> Vec<EntryPointConfig> {
    form.values("allowedEntryPoint[]")
        .iter()
        .filter(|value| *value != IGNORE_ENTRY_POINT)
        .map(EntryPointConfig::new)
        .collect()
}
