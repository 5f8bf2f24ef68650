//! Proxy share-link codec and subscription config generator.
//!
//! Links for thirteen protocols are parsed into [`Proxy`] records, which can
//! be written back as links or rendered as Clash, Clash-Meta, Surge,
//! Sing-Box, Base64 or raw subscription output.

pub mod error;
pub mod generator;
pub mod interfaces;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the main proxy types for easier access
pub use models::{ConfigOptions, Proxy, ProxyType};

pub use error::ConvertError;
pub use generator::{formats, generate, proxy_to_uri, FormatInfo};
pub use interfaces::{
    convert_links, detect_format_from_user_agent, subscription_headers, ConversionResult,
    SubscriptionSettings,
};
pub use parser::{dedupe_nodes, explode, extract_links, parse_links, ParseReport};
pub use settings::Settings;
