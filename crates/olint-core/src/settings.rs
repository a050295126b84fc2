//! Persisted settings
//!
//! The settings document is stored as JSON by whoever manages the plugin's
//! lifecycle. Every missing field falls back to the conservative default, so
//! an empty or partial document resolves to a disabled configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{Configuration, LinkScope};

/// Plugin version.
pub const PLUGIN_VERSION: &str = "1.2.0";

/// Translation text domain.
pub const TEXT_DOMAIN: &str = "open-links-in-new-tab";

/// Name of the persisted activation flag.
pub const ACTIVATION_OPTION: &str = "olint_open_external_link_in_new_tab";

/// Flag value meaning "enabled".
pub const ACTIVATION_VALUE: &str = "yes";

/// Error type for settings handling.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid settings document: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Unknown link scope: {0}")]
    InvalidScope(String),
}

/// Persisted settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Activation flag, set on activation and removed on deactivation
    #[serde(
        rename = "olint_open_external_link_in_new_tab",
        skip_serializing_if = "Option::is_none"
    )]
    pub activation_flag: Option<String>,
    pub scope: LinkScope,
    pub excluded_classes: BTreeSet<String>,
    pub site_host: String,
}

impl Settings {
    /// Parse a settings document.
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text).map_err(SettingsError::Parse)
    }

    pub fn to_json_pretty(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(SettingsError::Serialize)
    }

    /// Set the activation flag.
    pub fn activate(&mut self) {
        self.activation_flag = Some(ACTIVATION_VALUE.to_string());
    }

    /// Remove the activation flag.
    pub fn deactivate(&mut self) {
        self.activation_flag = None;
    }

    pub fn is_active(&self) -> bool {
        self.activation_flag.as_deref() == Some(ACTIVATION_VALUE)
    }

    /// Set the scope from its textual name.
    pub fn set_scope(&mut self, scope: &str) -> Result<(), SettingsError> {
        self.scope = LinkScope::parse(scope).ok_or_else(|| SettingsError::InvalidScope(scope.to_string()))?;
        Ok(())
    }

    /// Build the configuration for one rewrite pass.
    pub fn resolve(&self) -> Configuration {
        Configuration {
            enabled: self.is_active(),
            scope: self.scope,
            excluded_classes: self
                .excluded_classes
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
            site_host: self.site_host.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_disabled() {
        for text in ["", "  ", "{}"] {
            let settings = Settings::from_json(text).unwrap();
            assert_eq!(settings, Settings::default());
            let config = settings.resolve();
            assert!(!config.enabled);
            assert!(config.excluded_classes.is_empty());
        }
    }

    #[test]
    fn test_full_document() {
        let text = r#"{
            "olint_open_external_link_in_new_tab": "yes",
            "scope": "all_links",
            "excluded_classes": ["no-rewrite", " ", "btn "],
            "site_host": " example.com ",
            "unknown": 1
        }"#;
        let config = Settings::from_json(text).unwrap().resolve();
        assert!(config.enabled);
        assert_eq!(config.scope, LinkScope::AllLinks);
        assert_eq!(config.site_host, "example.com");
        assert_eq!(config.excluded_classes.len(), 2);
        assert!(config.excluded_classes.contains("btn"));
    }

    #[test]
    fn test_flag_other_than_yes_is_disabled() {
        let settings = Settings::from_json(r#"{"olint_open_external_link_in_new_tab": "no"}"#).unwrap();
        assert!(!settings.resolve().enabled);
    }

    #[test]
    fn test_activate_deactivate_cycle() {
        let mut settings = Settings::default();
        settings.activate();
        let json = settings.to_json_pretty().unwrap();
        assert!(json.contains(r#""olint_open_external_link_in_new_tab": "yes""#));
        assert!(Settings::from_json(&json).unwrap().is_active());

        settings.deactivate();
        let json = settings.to_json_pretty().unwrap();
        assert!(!json.contains(ACTIVATION_OPTION));
        assert!(!Settings::from_json(&json).unwrap().is_active());
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(Settings::from_json("{"), Err(SettingsError::Parse(_))));
        assert!(matches!(
            Settings::from_json(r#"{"scope": "sometimes"}"#),
            Err(SettingsError::Parse(_))
        ));

        let mut settings = Settings::default();
        assert!(matches!(settings.set_scope("sometimes"), Err(SettingsError::InvalidScope(_))));
        settings.set_scope("all-links").unwrap();
        assert_eq!(settings.scope, LinkScope::AllLinks);
    }
}
