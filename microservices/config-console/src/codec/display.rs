//! Encoding resources into edit-form display models

use serde::Serialize;

use bizmsg_sdk::{Agent, NonLocalConfig};

use super::non_local::join_csv;

/// Agent plus the scalar/CSV projections its edit form binds to.
///
/// Everything except the non-local block passes through unchanged for the
/// template layer to consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDisplay {
    #[serde(flatten)]
    pub agent: Agent,

    pub non_local: NonLocalDisplay,
}

/// Form-facing projection of [`NonLocalConfig`]: list fields collapse to
/// comma-separated strings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NonLocalDisplay {
    pub contact_option_url: String,
    pub contact_options: Vec<String>,
    pub phone_number: String,
    pub enabled_domains: String,
    pub call_deflection_phone_numbers: String,
    pub region_codes: String,
}

/// Fresh display defaults for an agent without a non-local config
pub fn default_non_local_display() -> NonLocalDisplay {
    NonLocalDisplay::default()
}

/// Encode an agent for its edit form
pub fn encode_agent_for_display(agent: &Agent) -> AgentDisplay {
    let non_local = agent
        .business_messages_agent
        .non_local_config
        .as_ref()
        .map(encode_non_local)
        .unwrap_or_else(default_non_local_display);

    AgentDisplay {
        agent: agent.clone(),
        non_local,
    }
}

fn encode_non_local(config: &NonLocalConfig) -> NonLocalDisplay {
    let numbers: Vec<String> = config
        .call_deflection_phone_numbers
        .iter()
        .map(|phone| phone.number.clone())
        .collect();

    NonLocalDisplay {
        contact_option_url: config.contact_option.url.clone(),
        contact_options: config.contact_option.options.clone(),
        phone_number: config.phone_number.number.clone(),
        enabled_domains: join_csv(&config.enabled_domains),
        call_deflection_phone_numbers: join_csv(&numbers),
        region_codes: join_csv(&config.region_codes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::form::FormMap;
    use crate::codec::non_local::decode_non_local_config;
    use bizmsg_sdk::{Agent, ContactOption, Phone};

    fn non_local_agent() -> Agent {
        let mut agent = Agent::form_template();
        agent.business_messages_agent.non_local_config = Some(NonLocalConfig {
            contact_option: ContactOption {
                url: "https://contact.test".to_string(),
                options: vec!["WEB_CHAT".to_string()],
            },
            enabled_domains: vec!["a.com".to_string(), "b.com".to_string()],
            phone_number: Phone::new("+15550100"),
            call_deflection_phone_numbers: vec![
                Phone::new("+15550101"),
                Phone::new("+15550102"),
            ],
            region_codes: vec!["US".to_string(), "CA".to_string()],
        });
        agent
    }

    #[test]
    fn list_fields_join_as_csv() {
        let display = encode_agent_for_display(&non_local_agent());

        assert_eq!(display.non_local.enabled_domains, "a.com, b.com");
        assert_eq!(
            display.non_local.call_deflection_phone_numbers,
            "+15550101, +15550102"
        );
        assert_eq!(display.non_local.region_codes, "US, CA");
        assert_eq!(display.non_local.phone_number, "+15550100");
    }

    #[test]
    fn missing_non_local_config_renders_template_default() {
        let display = encode_agent_for_display(&Agent::form_template());
        assert_eq!(display.non_local, default_non_local_display());
    }

    #[test]
    fn decode_of_encoded_config_reconstructs_the_resource() {
        let agent = non_local_agent();
        let display = encode_agent_for_display(&agent);

        let mut form = FormMap::new();
        form.insert(
            "nonLocalConfig.contactOption.url",
            display.non_local.contact_option_url.clone(),
        );
        for option in &display.non_local.contact_options {
            form.insert("nonLocalConfig.contactOption.options[]", option.clone());
        }
        form.insert(
            "nonLocalConfig.phoneNumber.number",
            display.non_local.phone_number.clone(),
        );
        form.insert(
            "nonLocalConfig.enabledDomains",
            display.non_local.enabled_domains.clone(),
        );
        form.insert(
            "nonLocalConfig.callDeflectionPhoneNumbers",
            display.non_local.call_deflection_phone_numbers.clone(),
        );
        form.insert(
            "nonLocalConfig.regionCodes",
            display.non_local.region_codes.clone(),
        );

        let decoded = decode_non_local_config(&form).unwrap();
        assert_eq!(
            decoded,
            agent.business_messages_agent.non_local_config.unwrap()
        );
    }
}
