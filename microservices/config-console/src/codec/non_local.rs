//! Non-local config decoding and the CSV-list sub-codec

use bizmsg_sdk::{ContactOption, NonLocalConfig, Phone};

use super::form::FormMap;

const FIELD_PREFIX: &str = "nonLocalConfig.";

/// Split a comma-separated form value into trimmed elements.
///
/// No deduplication and no emptiness check: uniqueness is a remote-side
/// invariant, and an empty input decodes to a one-element list holding the
/// empty string.
pub fn split_csv(input: &str) -> Vec<String> {
    input.split(',').map(|part| part.trim().to_string()).collect()
}

/// Join list elements for form display, the inverse of [`split_csv`]
pub fn join_csv(items: &[String]) -> String {
    items.join(", ")
}

/// Decode the non-local config, present only when the form submitted any
/// `nonLocalConfig.*` field (agents without non-local entry points submit
/// none of them).
pub fn decode_non_local_config(form: &FormMap) -> Option<NonLocalConfig> {
    if !form.contains_prefix(FIELD_PREFIX) {
        return None;
    }

    Some(NonLocalConfig {
        contact_option: ContactOption {
            url: form.scalar("nonLocalConfig.contactOption.url").to_string(),
            options: form
                .values("nonLocalConfig.contactOption.options[]")
                .to_vec(),
        },
        enabled_domains: split_csv(form.scalar("nonLocalConfig.enabledDomains")),
        phone_number: Phone::new(form.scalar("nonLocalConfig.phoneNumber.number")),
        call_deflection_phone_numbers: split_csv(
            form.scalar("nonLocalConfig.callDeflectionPhoneNumbers"),
        )
        .into_iter()
        .map(Phone::new)
        .collect(),
        region_codes: split_csv(form.scalar("nonLocalConfig.regionCodes")),
    })
}
