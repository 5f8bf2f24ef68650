//! Registry of output formats
//!
//! Every target the generators can produce is listed once here with the
//! metadata a caller needs to serve it (file extension and MIME type).

use log::info;

use super::formats::{
    proxy_to_clash_classic, proxy_to_clash_meta, proxy_to_single, proxy_to_singbox,
    proxy_to_ss_sub, proxy_to_surge,
};
use crate::error::ConvertError;
use crate::models::{ConfigOptions, Proxy};

/// Signature shared by all config generators
pub type GenerateFn = fn(&[Proxy], &ConfigOptions) -> String;

/// Description of one output format
#[derive(Debug, Clone, Copy)]
pub struct FormatInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub ext: &'static str,
    pub mime: &'static str,
    pub generate: GenerateFn,
}

static FORMATS: [FormatInfo; 6] = [
    FormatInfo {
        key: "clash-yaml",
        name: "Clash YAML",
        ext: ".yaml",
        mime: "text/yaml",
        generate: proxy_to_clash_classic,
    },
    FormatInfo {
        key: "clash-meta",
        name: "Clash Meta",
        ext: ".yaml",
        mime: "text/yaml",
        generate: proxy_to_clash_meta,
    },
    FormatInfo {
        key: "surge",
        name: "Surge",
        ext: ".conf",
        mime: "text/plain",
        generate: proxy_to_surge,
    },
    FormatInfo {
        key: "sing-box",
        name: "Sing-Box",
        ext: ".json",
        mime: "application/json",
        generate: proxy_to_singbox,
    },
    FormatInfo {
        key: "base64",
        name: "Base64 Subscription",
        ext: ".txt",
        mime: "text/plain",
        generate: proxy_to_ss_sub,
    },
    FormatInfo {
        key: "raw",
        name: "Raw Links",
        ext: ".txt",
        mime: "text/plain",
        generate: proxy_to_single,
    },
];

/// All formats in display order
pub fn formats() -> &'static [FormatInfo] {
    &FORMATS
}

pub fn find_format(key: &str) -> Option<&'static FormatInfo> {
    FORMATS.iter().find(|f| f.key == key)
}

/// Generate the config for `key`
///
/// # Errors
/// [`ConvertError::UnsupportedFormat`] when `key` is not a registered format.
pub fn generate(key: &str, nodes: &[Proxy], options: &ConfigOptions) -> Result<String, ConvertError> {
    let format = find_format(key).ok_or_else(|| ConvertError::UnsupportedFormat(key.to_string()))?;
    info!("Generate target: {} ({} nodes)", format.name, nodes.len());
    Ok((format.generate)(nodes, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_table() {
        let keys: Vec<&str> = formats().iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            vec!["clash-yaml", "clash-meta", "surge", "sing-box", "base64", "raw"]
        );
        let singbox = find_format("sing-box").unwrap();
        assert_eq!(singbox.ext, ".json");
        assert_eq!(singbox.mime, "application/json");
        assert_eq!(find_format("raw").unwrap().name, "Raw Links");
    }

    #[test]
    fn test_generate_unknown_format() {
        let err = generate("quanx", &[], &ConfigOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedFormat(ref k) if k == "quanx"));
        assert_eq!(err.to_string(), "Unsupported format: quanx");
    }

    #[test]
    fn test_generate_empty_input() {
        let options = ConfigOptions::default();
        assert_eq!(generate("raw", &[], &options).unwrap(), "");
        assert!(generate("clash-meta", &[], &options)
            .unwrap()
            .contains("proxies: []"));
    }
}
