//! Helpers for serving a subscription endpoint: client detection from the
//! `User-Agent` header and the informational response headers clients read.

use serde::{Deserialize, Serialize};

use crate::utils::base64::base64_encode;

/// Substring checks in priority order; the first match picks the format.
const CLIENT_FORMATS: &[(&[&str], &str)] = &[
    (&["clash-verge", "clash verge"], "clash-meta"),
    (&["clash.meta", "clash meta"], "clash-meta"),
    (&["mihomo"], "clash-meta"),
    (&["clash"], "clash-yaml"),
    (&["surge"], "surge"),
    (&["sing-box", "singbox"], "sing-box"),
    (&["nekobox", "neko"], "sing-box"),
];

/// Pick an output format key for the client identified by `user_agent`
///
/// Matching is case-insensitive. Unknown or empty agents get `base64`,
/// which every client understands.
///
/// ```
/// use linksub::interfaces::subscription::detect_format_from_user_agent;
///
/// assert_eq!(detect_format_from_user_agent("ClashVerge/1.3 clash-verge"), "clash-meta");
/// assert_eq!(detect_format_from_user_agent("Shadowrocket/1990"), "base64");
/// ```
pub fn detect_format_from_user_agent(user_agent: &str) -> &'static str {
    let ua = user_agent.to_lowercase();
    CLIENT_FORMATS
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| ua.contains(n)))
        .map(|(_, format)| *format)
        .unwrap_or("base64")
}

fn default_title() -> String {
    "Proxy Subscription".to_string()
}

fn default_update_interval() -> u32 {
    24
}

fn default_traffic_total() -> u64 {
    100 * 1024 * 1024 * 1024
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub upload: u64,
    #[serde(default)]
    pub download: u64,
    #[serde(default = "default_traffic_total")]
    pub total: u64,
}

impl Default for TrafficSettings {
    fn default() -> Self {
        TrafficSettings {
            enabled: false,
            upload: 0,
            download: 0,
            total: default_traffic_total(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpireSettings {
    #[serde(default)]
    pub enabled: bool,
    /// Unix timestamp in seconds; 0 means no expiry.
    #[serde(default)]
    pub timestamp: u64,
}

/// Subscription metadata reported to clients in response headers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSettings {
    #[serde(default = "default_title")]
    pub title: String,
    /// Hours between client refreshes.
    #[serde(default = "default_update_interval")]
    pub update_interval: u32,
    #[serde(default)]
    pub traffic: TrafficSettings,
    #[serde(default)]
    pub expire: ExpireSettings,
}

impl Default for SubscriptionSettings {
    fn default() -> Self {
        SubscriptionSettings {
            title: default_title(),
            update_interval: default_update_interval(),
            traffic: TrafficSettings::default(),
            expire: ExpireSettings::default(),
        }
    }
}

/// `Profile-Title`, `Profile-Update-Interval` and `Subscription-Userinfo`
/// header values, in that order
pub fn subscription_headers(settings: &SubscriptionSettings) -> Vec<(String, String)> {
    let mut headers = Vec::new();

    if !settings.title.is_empty() {
        headers.push(("Profile-Title".to_string(), base64_encode(&settings.title)));
    }

    let interval = if settings.update_interval == 0 {
        default_update_interval()
    } else {
        settings.update_interval
    };
    headers.push(("Profile-Update-Interval".to_string(), interval.to_string()));

    let traffic = &settings.traffic;
    let mut userinfo = if traffic.enabled {
        format!(
            "upload={}; download={}; total={}",
            traffic.upload, traffic.download, traffic.total
        )
    } else {
        "upload=0; download=0; total=0".to_string()
    };
    if settings.expire.enabled && settings.expire.timestamp > 0 {
        userinfo.push_str(&format!("; expire={}", settings.expire.timestamp));
    }
    headers.push(("Subscription-Userinfo".to_string(), userinfo));

    headers
}

/// Human-readable byte count with two decimals, e.g. `1.50 GB`
pub fn format_traffic(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}
