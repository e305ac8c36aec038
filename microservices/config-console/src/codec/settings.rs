//! Locale fan-out for conversational settings

use bizmsg_sdk::{
    ConversationalSettings, LocaleSettings, MAX_CONVERSATION_STARTERS,
};
use bizmsg_sdk::conversational::{OfflineMessage, PrivacyPolicy, WelcomeMessage};

use super::form::FormMap;
use super::starters::decode_conversation_starters;

const STARTER_PREFIX: &str = "conversationalStarter";

/// Decode one settings entry per submitted locale, in submission order.
///
/// The `locale` field and its siblings (`privacyPolicy`, `welcomeMessage`,
/// `offlineMessage`) are parallel arrays; starter slots for locale `i`
/// live at offset `i * MAX_CONVERSATION_STARTERS` in the flat starter
/// arrays. A scalar submission is the one-element case of the same walk.
pub fn decode_conversational_settings(form: &FormMap) -> ConversationalSettings {
    let mut settings = ConversationalSettings::new();
    let Some(locales) = form.get("locale") else {
        return settings;
    };

    for (index, locale) in locales.values().iter().enumerate() {
        settings.insert(locale.clone(), decode_locale_block(form, index));
    }
    settings
}

fn decode_locale_block(form: &FormMap, index: usize) -> LocaleSettings {
    LocaleSettings {
        privacy_policy: PrivacyPolicy {
            url: form.slot("privacyPolicy", index).to_string(),
        },
        welcome_message: WelcomeMessage {
            text: form.slot("welcomeMessage", index).to_string(),
        },
        offline_message: OfflineMessage {
            text: form.slot("offlineMessage", index).to_string(),
        },
        conversation_starters: decode_conversation_starters(
            form,
            STARTER_PREFIX,
            index * MAX_CONVERSATION_STARTERS,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_locale_form() -> FormMap {
        let mut form = FormMap::new();
        for locale in ["en", "fr"] {
            form.insert("locale", locale);
        }
        for url in ["u1", "u2"] {
            form.insert("privacyPolicy", url);
        }
        for text in ["w1", "w2"] {
            form.insert("welcomeMessage", text);
        }
        for text in ["o1", "o2"] {
            form.insert("offlineMessage", text);
        }
        let texts = ["hi", "", "", "", "", "bye", "", "", "", ""];
        let urls = ["", "", "", "", "", "http://x", "", "", "", ""];
        for text in texts {
            form.insert("conversationalStarter.text", text);
        }
        for url in urls {
            form.insert("conversationalStarter.url", url);
        }
        for _ in 0..10 {
            form.insert("conversationalStarter.postbackData", "");
        }
        form
    }

    #[test]
    fn one_entry_per_locale_in_submission_order() {
        let settings = decode_conversational_settings(&two_locale_form());

        let locales: Vec<&str> = settings.locales().collect();
        assert_eq!(locales, vec!["en", "fr"]);

        let en = settings.get("en").unwrap();
        assert_eq!(en.privacy_policy.url, "u1");
        assert_eq!(en.welcome_message.text, "w1");
        assert_eq!(en.offline_message.text, "o1");

        let fr = settings.get("fr").unwrap();
        assert_eq!(fr.privacy_policy.url, "u2");
        assert_eq!(fr.welcome_message.text, "w2");
        assert_eq!(fr.offline_message.text, "o2");
    }

    #[test]
    fn starters_slice_at_locale_offset() {
        let settings = decode_conversational_settings(&two_locale_form());

        let en = settings.get("en").unwrap();
        assert_eq!(en.conversation_starters.len(), 1);
        let reply = en.conversation_starters[0].suggestion.reply.as_ref().unwrap();
        assert_eq!(reply.text, "hi");

        let fr = settings.get("fr").unwrap();
        assert_eq!(fr.conversation_starters.len(), 1);
        let action = fr.conversation_starters[0]
            .suggestion
            .action
            .as_ref()
            .unwrap();
        assert_eq!(action.text, "bye");
        assert_eq!(action.open_url_action.url, "http://x");
    }

    #[test]
    fn scalar_submission_equals_one_element_arrays() {
        let mut scalar = FormMap::new();
        scalar.insert("locale", "en");
        scalar.insert("privacyPolicy", "u1");
        scalar.insert("welcomeMessage", "w1");
        scalar.insert("offlineMessage", "o1");
        for text in ["hi", "", "", "", ""] {
            scalar.insert("conversationalStarter.text", text);
        }
        for _ in 0..5 {
            scalar.insert("conversationalStarter.url", "");
            scalar.insert("conversationalStarter.postbackData", "");
        }

        let as_arrays = FormMap::from_json(&serde_json::json!({
            "locale": ["en"],
            "privacyPolicy": ["u1"],
            "welcomeMessage": ["w1"],
            "offlineMessage": ["o1"],
            "conversationalStarter.text": ["hi", "", "", "", ""],
            "conversationalStarter.url": ["", "", "", "", ""],
            "conversationalStarter.postbackData": ["", "", "", "", ""],
        }))
        .unwrap();

        let decoded = decode_conversational_settings(&scalar);
        assert_eq!(decoded, decode_conversational_settings(&as_arrays));
        assert_eq!(decoded.len(), 1);

        let en = decoded.get("en").unwrap();
        assert_eq!(en.privacy_policy.url, "u1");
        assert_eq!(en.welcome_message.text, "w1");
        assert_eq!(en.conversation_starters.len(), 1);
    }

    #[test]
    fn missing_locale_field_decodes_to_empty_settings() {
        let form = FormMap::new();
        assert!(decode_conversational_settings(&form).is_empty());
    }
}
