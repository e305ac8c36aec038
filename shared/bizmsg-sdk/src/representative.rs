//! Agent representatives (bot or human) and their messaging availability

use serde::{Deserialize, Serialize};

/// Who answers on behalf of the agent during an availability window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionType {
    Bot,
    Human,
}

/// A supported interaction: the type plus the matching representative.
///
/// Exactly one of `bot_representative`/`human_representative` is set,
/// matching `interaction_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedAgentInteraction {
    pub interaction_type: InteractionType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_representative: Option<BotRepresentative>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_representative: Option<HumanRepresentative>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotRepresentative {
    pub bot_messaging_availability: MessagingAvailability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanRepresentative {
    pub human_messaging_availability: MessagingAvailability,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingAvailability {
    #[serde(default)]
    pub hours: Vec<MessagingHours>,
}

/// One weekly span during which the representative is reachable.
///
/// Hour/minute values pass through exactly as the form layer submitted
/// them; range checks are the remote API's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingHours {
    #[serde(default)]
    pub start_time: TimeOfDay,

    #[serde(default)]
    pub end_time: TimeOfDay,

    #[serde(default)]
    pub time_zone: String,

    #[serde(default)]
    pub start_day: String,

    #[serde(default)]
    pub end_day: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOfDay {
    #[serde(default)]
    pub hours: String,

    #[serde(default)]
    pub minutes: String,
}

impl SupportedAgentInteraction {
    /// Bot representative with the given availability hours
    pub fn bot(hours: Vec<MessagingHours>) -> Self {
        Self {
            interaction_type: InteractionType::Bot,
            bot_representative: Some(BotRepresentative {
                bot_messaging_availability: MessagingAvailability { hours },
            }),
            human_representative: None,
        }
    }

    /// Human representative with the given availability hours
    pub fn human(hours: Vec<MessagingHours>) -> Self {
        Self {
            interaction_type: InteractionType::Human,
            bot_representative: None,
            human_representative: Some(HumanRepresentative {
                human_messaging_availability: MessagingAvailability { hours },
            }),
        }
    }

    /// Availability hours of whichever representative is set
    pub fn hours(&self) -> &[MessagingHours] {
        match self.interaction_type {
            InteractionType::Bot => self
                .bot_representative
                .as_ref()
                .map(|r| r.bot_messaging_availability.hours.as_slice())
                .unwrap_or_default(),
            InteractionType::Human => self
                .human_representative
                .as_ref()
                .map(|r| r.human_messaging_availability.hours.as_slice())
                .unwrap_or_default(),
        }
    }
}

/// Default availability for a new agent form: always-on, Monday to Sunday.
///
/// Returns a fresh value on every call so callers can never alias a shared
/// template.
pub fn template_hours() -> Vec<MessagingHours> {
    vec![MessagingHours {
        start_time: TimeOfDay::default(),
        end_time: TimeOfDay {
            hours: "23".to_string(),
            minutes: "59".to_string(),
        },
        time_zone: String::new(),
        start_day: "MONDAY".to_string(),
        end_day: "SUNDAY".to_string(),
    }]
}
