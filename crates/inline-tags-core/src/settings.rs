//! Plugin settings.
//!
//! Settings are host-owned: loaded once at startup, replaced wholesale on save. The engine
//! reads them at rebuild time and never mutates them. The JSON shape uses camelCase keys,
//! matching the settings documents hosts already persist.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Process-wide tag rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagSettings {
    /// Emoji source URL templates, keyed by emoji type. The literal `{name}` placeholder in a
    /// template is substituted with the emoji name at build time.
    pub emoji_sources: HashMap<String, String>,
    /// Whether tags are rendered while the editor is in live-preview mode.
    pub render_in_live_preview: bool,
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            emoji_sources: HashMap::new(),
            render_in_live_preview: true,
        }
    }
}

impl TagSettings {
    /// Parse settings from a JSON document, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to a JSON document.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Register an emoji source template (builder-style convenience).
    pub fn with_source(mut self, kind: impl Into<String>, template: impl Into<String>) -> Self {
        self.emoji_sources.insert(kind.into(), template.into());
        self
    }
}

/// Settings (de)serialization errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings payload was not valid JSON for the settings shape.
    #[error("invalid settings payload: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = TagSettings::default();
        assert!(settings.emoji_sources.is_empty());
        assert!(settings.render_in_live_preview);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let settings = TagSettings::default()
            .with_source("neko", "https://emoji.example/neko/{name}.png");
        let json = settings.to_json().unwrap();
        assert!(json.contains("\"emojiSources\""));
        assert!(json.contains("\"renderInLivePreview\""));

        let parsed = TagSettings::from_json(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed = TagSettings::from_json("{}").unwrap();
        assert_eq!(parsed, TagSettings::default());

        let parsed = TagSettings::from_json(r#"{"renderInLivePreview":false}"#).unwrap();
        assert!(!parsed.render_in_live_preview);
        assert!(parsed.emoji_sources.is_empty());
    }

    #[test]
    fn test_invalid_payload_is_an_error() {
        assert!(TagSettings::from_json("not json").is_err());
    }
}
