use log::{info, warn};

use crate::error::ConvertError;
use crate::generator::config::subexport::{find_format, generate};
use crate::models::ConfigOptions;
use crate::parser::{dedupe_nodes, explode_content};

/// Result of a conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// Generated config in the requested format
    pub output: String,
    /// Number of nodes after deduplication
    pub count: usize,
    /// Display names of those nodes, in output order
    pub node_names: Vec<String>,
    /// Links that could not be parsed
    pub failed: usize,
}

/// Convert raw subscription text into the config format named by `format_key`
///
/// The text may be plain links (one per line) or a Base64 subscription body.
/// Unparseable lines are skipped and duplicates removed before generation.
///
/// # Arguments
/// * `text` - Raw links or Base64 subscription content
/// * `format_key` - Registry key such as `clash-meta` or `sing-box`
/// * `options` - Generator options
///
/// # Errors
/// [`ConvertError::UnsupportedFormat`] when `format_key` is unknown. Bad links
/// are never an error.
pub fn convert_links(
    text: &str,
    format_key: &str,
    options: &ConfigOptions,
) -> Result<ConversionResult, ConvertError> {
    if find_format(format_key).is_none() {
        return Err(ConvertError::UnsupportedFormat(format_key.to_string()));
    }

    info!("Processing conversion request to {}", format_key);
    let report = explode_content(text);
    if report.failed > 0 {
        warn!("{} links could not be parsed", report.failed);
    }
    let failed = report.failed;
    let nodes = dedupe_nodes(report.nodes);

    let output = generate(format_key, &nodes, options)?;
    Ok(ConversionResult {
        output,
        count: nodes.len(),
        node_names: nodes.iter().map(|node| node.display_name()).collect(),
        failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::base64::base64_encode;

    const LINKS: &str = "ss://YWVzLTI1Ni1nY206cGFzc3dvcmQ=@1.1.1.1:8888#My_SS_Node\n\
                         trojan://secret@example.com:443#Trojan\n\
                         vless://broken\n\
                         ss://YWVzLTI1Ni1nY206cGFzc3dvcmQ=@1.1.1.1:8888#Copy";

    #[test]
    fn test_convert_counts_and_names() {
        let result = convert_links(LINKS, "raw", &ConfigOptions::default()).unwrap();
        assert_eq!(result.count, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.node_names, vec!["My_SS_Node", "Trojan"]);
        assert_eq!(result.output.lines().count(), 2);
    }

    #[test]
    fn test_convert_base64_body() {
        let body = base64_encode(LINKS);
        let result = convert_links(&body, "clash-meta", &ConfigOptions::default()).unwrap();
        assert_eq!(result.count, 2);
        assert!(result.output.contains("name: My_SS_Node"));
    }

    #[test]
    fn test_convert_unknown_format() {
        let err = convert_links(LINKS, "loon", &ConfigOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_convert_empty_input() {
        let result = convert_links("", "surge", &ConfigOptions::default()).unwrap();
        assert_eq!(result.count, 0);
        assert!(result.output.contains("[Proxy]\nDIRECT = direct\n"));
    }
}
