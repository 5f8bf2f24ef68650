pub mod config;
pub mod exports;
pub mod yaml;

// Re-export the registry
pub use config::subexport::{find_format, formats, generate, FormatInfo, GenerateFn};

// Re-export format converters
pub use config::formats::{
    proxy_to_clash, proxy_to_clash_classic, proxy_to_clash_meta, proxy_to_single,
    proxy_to_singbox, proxy_to_ss_sub, proxy_to_surge, proxy_to_uri,
};
