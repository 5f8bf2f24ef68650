use crate::models::{Proxy, ProxyNode};
use crate::utils::base64::url_safe_base64_encode;
use crate::utils::url::wrap_ipv6;

/// Convert a ShadowsocksR node to an `ssr://` link
///
/// Format: `ssr://BASE64(server:port:protocol:method:obfs:BASE64(password)/?remarks=BASE64(remark)&protoparam=...&obfsparam=...)`
/// using the URL-safe alphabet throughout.
pub fn ssr_to_uri(proxy: &Proxy) -> Option<String> {
    let ProxyNode::ShadowsocksR(node) = &proxy.node else {
        return None;
    };

    let protocol = if node.protocol.is_empty() {
        "origin"
    } else {
        &node.protocol
    };
    let obfs = if node.obfs.is_empty() {
        "plain"
    } else {
        &node.obfs
    };
    let mut plain_text = format!(
        "{}:{}:{}:{}:{}:{}",
        wrap_ipv6(&proxy.server),
        proxy.port,
        protocol,
        node.cipher,
        obfs,
        url_safe_base64_encode(&node.password)
    );

    // Add parameters
    let mut params = Vec::new();
    if !proxy.name.is_empty() {
        params.push(format!("remarks={}", url_safe_base64_encode(&proxy.name)));
    }
    if let Some(param) = node.protocol_param.as_deref().filter(|p| !p.is_empty()) {
        params.push(format!("protoparam={}", url_safe_base64_encode(param)));
    }
    if let Some(param) = node.obfs_param.as_deref().filter(|p| !p.is_empty()) {
        params.push(format!("obfsparam={}", url_safe_base64_encode(param)));
    }
    if !params.is_empty() {
        plain_text.push_str("/?");
        plain_text.push_str(&params.join("&"));
    }

    Some(format!("ssr://{}", url_safe_base64_encode(&plain_text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::proxy_node::ShadowsocksRNode;
    use crate::utils::base64::base64_decode;

    #[test]
    fn test_ssr_to_uri_fills_defaults() {
        let node = ShadowsocksRNode {
            cipher: "rc4-md5".to_string(),
            password: "pw".to_string(),
            protocol: String::new(),
            obfs: String::new(),
            protocol_param: None,
            obfs_param: None,
        };
        let proxy = Proxy::new("", "1.2.3.4", 443, ProxyNode::ShadowsocksR(node));
        let uri = ssr_to_uri(&proxy).unwrap();
        let body = base64_decode(uri.strip_prefix("ssr://").unwrap()).unwrap();
        assert_eq!(body, "1.2.3.4:443:origin:rc4-md5:plain:cHc");
    }
}
