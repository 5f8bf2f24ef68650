//! File-backed settings for the command-line front end.
//!
//! All sections are optional; missing keys take the defaults the library
//! uses, so an empty file is a valid configuration.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::interfaces::subscription::SubscriptionSettings;
use crate::models::ConfigOptions;

fn default_max_links_count() -> usize {
    10000
}

fn default_max_link_length() -> usize {
    8192
}

/// Caps applied to input before parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    #[serde(default = "default_max_links_count")]
    pub max_links_count: usize,
    #[serde(default = "default_max_link_length")]
    pub max_link_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_links_count: default_max_links_count(),
            max_link_length: default_max_link_length(),
        }
    }
}

impl Limits {
    /// Drop links longer than `max_link_length`, then keep at most
    /// `max_links_count` of the rest
    pub fn apply(&self, links: Vec<String>) -> Vec<String> {
        let mut kept: Vec<String> = links
            .into_iter()
            .filter(|link| {
                let ok = link.len() <= self.max_link_length;
                if !ok {
                    warn!(
                        "Dropping link of {} bytes (limit {})",
                        link.len(),
                        self.max_link_length
                    );
                }
                ok
            })
            .collect();
        if kept.len() > self.max_links_count {
            warn!(
                "Truncating input from {} to {} links",
                kept.len(),
                self.max_links_count
            );
            kept.truncate(self.max_links_count);
        }
        kept
    }
}

/// Settings structure to hold global configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Generator options used when the caller gives none
    #[serde(default)]
    pub defaults: ConfigOptions,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub subscription: SubscriptionSettings,
}

impl Settings {
    /// Parse settings from a string in the format named by `ext`
    /// (`toml`, `yaml`/`yml` or `json`).
    pub fn from_str_with_ext(content: &str, ext: &str) -> Result<Self, ConvertError> {
        let settings = match ext.to_ascii_lowercase().as_str() {
            "toml" => toml::from_str(content)?,
            "yaml" | "yml" => {
                if content.trim().is_empty() {
                    Settings::default()
                } else {
                    serde_yaml::from_str(content)?
                }
            }
            "json" => serde_json::from_str(content)?,
            other => return Err(ConvertError::UnknownConfigFormat(other.to_string())),
        };
        Ok(settings)
    }

    /// Load settings from a file, choosing the parser by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        if !matches!(
            ext.to_ascii_lowercase().as_str(),
            "toml" | "yaml" | "yml" | "json"
        ) {
            return Err(ConvertError::UnknownConfigFormat(path.display().to_string()));
        }

        debug!("Loading settings from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_str_with_ext(&content, ext)
    }
}
