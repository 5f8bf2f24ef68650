//! Options shared by every config generator.

use serde::{Deserialize, Serialize};

fn default_http_port() -> u16 {
    7890
}

fn default_true() -> bool {
    true
}

fn default_mode() -> String {
    "rule".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_test_url() -> String {
    "http://www.gstatic.com/generate_204".to_string()
}

fn default_test_interval() -> u32 {
    300
}

/// Layout of the `proxies:` entries in Clash output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxiesStyle {
    /// One `{ key: value, ... }` mapping per line.
    #[default]
    Flow,
    /// Indented block mappings.
    Block,
}

/// Options recognised by the generators.
///
/// Keys use camelCase so the same struct deserializes from query-style JSON
/// (`{"httpPort": 7891}`) and from the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOptions {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    #[serde(default = "default_true")]
    pub allow_lan: bool,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_true")]
    pub enable_dns: bool,
    #[serde(default = "default_test_url")]
    pub test_url: String,
    #[serde(default = "default_test_interval")]
    pub test_interval: u32,
    #[serde(default)]
    pub proxies_style: ProxiesStyle,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        ConfigOptions {
            http_port: default_http_port(),
            allow_lan: true,
            mode: default_mode(),
            log_level: default_log_level(),
            enable_dns: true,
            test_url: default_test_url(),
            test_interval: default_test_interval(),
            proxies_style: ProxiesStyle::Flow,
        }
    }
}
