//! Conversational settings: locale-keyed welcome/offline messages and
//! conversation starters

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::Validate;

/// Maximum number of conversation starters per locale block
pub const MAX_CONVERSATION_STARTERS: usize = 5;

/// Per-locale conversational settings block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleSettings {
    pub privacy_policy: PrivacyPolicy,
    pub welcome_message: WelcomeMessage,
    pub offline_message: OfflineMessage,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conversation_starters: Vec<ConversationStarter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyPolicy {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeMessage {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineMessage {
    #[serde(default)]
    pub text: String,
}

impl LocaleSettings {
    /// Empty settings block, used as the form template for a new locale
    pub fn template() -> Self {
        Self {
            privacy_policy: PrivacyPolicy::default(),
            welcome_message: WelcomeMessage::default(),
            offline_message: OfflineMessage::default(),
            conversation_starters: Vec::new(),
        }
    }

    /// Add a starter, bounded by [`MAX_CONVERSATION_STARTERS`]
    pub fn add_starter(&mut self, starter: ConversationStarter) -> Result<(), StarterError> {
        if self.conversation_starters.len() >= MAX_CONVERSATION_STARTERS {
            return Err(StarterError::MaxStartersExceeded);
        }
        self.conversation_starters.push(starter);
        Ok(())
    }
}

/// Conversation starter errors
#[derive(Debug, thiserror::Error)]
pub enum StarterError {
    #[error("Maximum of 5 conversation starters allowed per locale")]
    MaxStartersExceeded,
}

/// Locale-keyed collection of [`LocaleSettings`].
///
/// Serialized as a JSON object keyed by locale code. Entry order follows
/// insertion order (the order locales were submitted), which the default
/// map types would not preserve, so (de)serialization is hand-written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationalSettings {
    entries: Vec<(String, LocaleSettings)>,
}

impl ConversationalSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a locale block, replacing any existing block for the locale
    pub fn insert(&mut self, locale: impl Into<String>, settings: LocaleSettings) {
        let locale = locale.into();
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| *l == locale) {
            entry.1 = settings;
        } else {
            self.entries.push((locale, settings));
        }
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleSettings> {
        self.entries
            .iter()
            .find(|(l, _)| l == locale)
            .map(|(_, s)| s)
    }

    /// Locale codes in insertion order
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, LocaleSettings)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ConversationalSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (locale, settings) in &self.entries {
            map.serialize_entry(locale, settings)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ConversationalSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SettingsVisitor;

        impl<'de> Visitor<'de> for SettingsVisitor {
            type Value = ConversationalSettings;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of locale codes to conversational settings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut settings = ConversationalSettings::new();
                while let Some((locale, block)) = access.next_entry::<String, LocaleSettings>()? {
                    settings.insert(locale, block);
                }
                Ok(settings)
            }
        }

        deserializer.deserialize_map(SettingsVisitor)
    }
}

/// Template settings with a single empty locale block
pub fn template_settings(locale: &str) -> ConversationalSettings {
    let mut settings = ConversationalSettings::new();
    settings.insert(locale, LocaleSettings::template());
    settings
}

/// Conversation starter shown before a conversation begins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationStarter {
    pub suggestion: Suggestion,
}

/// Suggestion (either reply or action)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<SuggestedReply>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<SuggestedAction>,
}

/// Suggested reply (quick response button)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedReply {
    #[validate(length(max = 35))]
    pub text: String,

    #[validate(length(max = 2048))]
    pub postback_data: String,
}

/// Suggested action (opens a URL)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAction {
    #[validate(length(max = 35))]
    pub text: String,

    #[validate(length(max = 2048))]
    pub postback_data: String,

    pub open_url_action: OpenUrlAction,
}

/// Open URL action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenUrlAction {
    pub url: String,
}

impl Suggestion {
    /// Create a suggested reply
    pub fn reply(text: impl Into<String>, postback_data: impl Into<String>) -> Self {
        Self {
            reply: Some(SuggestedReply {
                text: text.into(),
                postback_data: postback_data.into(),
            }),
            action: None,
        }
    }

    /// Create an open URL action
    pub fn open_url(
        text: impl Into<String>,
        postback_data: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            reply: None,
            action: Some(SuggestedAction {
                text: text.into(),
                postback_data: postback_data.into(),
                open_url_action: OpenUrlAction { url: url.into() },
            }),
        }
    }
}

impl ConversationStarter {
    /// Starter backed by a suggested reply
    pub fn reply(text: impl Into<String>, postback_data: impl Into<String>) -> Self {
        Self {
            suggestion: Suggestion::reply(text, postback_data),
        }
    }

    /// Starter backed by an open-URL action
    pub fn open_url(
        text: impl Into<String>,
        postback_data: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            suggestion: Suggestion::open_url(text, postback_data, url),
        }
    }
}
