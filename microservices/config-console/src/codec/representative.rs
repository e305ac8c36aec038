//! Representative and availability-window decoding

use bizmsg_sdk::{MessagingHours, SupportedAgentInteraction, TimeOfDay};

use super::form::FormMap;

/// Decode the representative submitted under `prefix` (`primary` or
/// `additional`).
///
/// An absent interaction-type field means the form intentionally submitted
/// no representative, so this returns `None` rather than an empty shell.
/// `BOT` selects the bot representative; any other submitted value decodes
/// as human.
pub fn decode_representative(
    form: &FormMap,
    interaction_field: &str,
    prefix: &str,
) -> Option<SupportedAgentInteraction> {
    let interaction_type = form.get(interaction_field)?;
    let hours = decode_availability(form, prefix);

    if interaction_type.first() == "BOT" {
        Some(SupportedAgentInteraction::bot(hours))
    } else {
        Some(SupportedAgentInteraction::human(hours))
    }
}

/// Decode the availability rows under `prefix`: one window per submitted
/// row, sibling fields read at the same index.
fn decode_availability(form: &FormMap, prefix: &str) -> Vec<MessagingHours> {
    let start_hours = format!("{prefix}.availability.startTime.hours");
    let Some(rows) = form.get(&start_hours) else {
        return Vec::new();
    };

    let field = |name: &str| format!("{prefix}.availability.{name}");
    (0..rows.values().len())
        .map(|row| MessagingHours {
            start_time: TimeOfDay {
                hours: form.slot(&field("startTime.hours"), row).to_string(),
                minutes: form.slot(&field("startTime.minutes"), row).to_string(),
            },
            end_time: TimeOfDay {
                hours: form.slot(&field("endTime.hours"), row).to_string(),
                minutes: form.slot(&field("endTime.minutes"), row).to_string(),
            },
            time_zone: form.slot(&field("timezone"), row).to_string(),
            start_day: form.slot(&field("startDay"), row).to_string(),
            end_day: form.slot(&field("endDay"), row).to_string(),
        })
        .collect()
}
