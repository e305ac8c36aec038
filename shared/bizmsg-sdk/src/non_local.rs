//! Non-local configuration for agents reachable outside map-location
//! contexts

use serde::{Deserialize, Serialize};

/// Settings for web/search entry points.
///
/// `enabled_domains`, deflection numbers, and region codes must be unique
/// across the whole remote system; that invariant is enforced server-side
/// and rejected submissions come back through the error channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonLocalConfig {
    #[serde(default)]
    pub contact_option: ContactOption,

    #[serde(default)]
    pub enabled_domains: Vec<String>,

    #[serde(default)]
    pub phone_number: Phone,

    #[serde(default)]
    pub call_deflection_phone_numbers: Vec<Phone>,

    #[serde(default)]
    pub region_codes: Vec<String>,
}

/// Contact link shown alongside the conversation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactOption {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub options: Vec<String>,
}

/// Phone number in its wire object shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    #[serde(default)]
    pub number: String,
}

impl Phone {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }
}
