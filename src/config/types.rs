//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::files::filename::DEFAULT_NAME_PATTERN;
use crate::template::{default_base64_template, default_link_template, Base64Template};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paste: PasteConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// Where and how pasted images are saved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasteConfig {
    /// Save folder; absolute, or relative to the document. Supports placeholders.
    #[serde(default = "default_path")]
    pub path: String,
    /// strftime pattern for file names when nothing is selected
    #[serde(default = "default_name")]
    pub default_name: String,
    /// Ask for the destination path before saving
    #[serde(default)]
    pub confirm_path: bool,
}

pub fn default_path() -> String {
    "${currentFileDir}".to_string()
}

pub fn default_name() -> String {
    DEFAULT_NAME_PATTERN.to_string()
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            default_name: default_name(),
            confirm_path: false,
        }
    }
}

/// Per-language template overrides.
///
/// Languages missing here fall back to the built-in templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplatesConfig {
    #[serde(default)]
    pub link: BTreeMap<String, String>,
    #[serde(default)]
    pub base64: BTreeMap<String, Base64Template>,
}

impl Config {
    /// Link template for a language id.
    pub fn link_template(&self, language_id: &str) -> String {
        self.templates
            .link
            .get(language_id)
            .cloned()
            .unwrap_or_else(|| default_link_template(language_id).to_string())
    }

    /// Inline Base64 template for a language id.
    pub fn base64_template(&self, language_id: &str) -> Base64Template {
        self.templates
            .base64
            .get(language_id)
            .cloned()
            .unwrap_or_else(|| default_base64_template(language_id))
    }
}
