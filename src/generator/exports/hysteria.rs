use super::{authority, fragment, new_query};
use crate::models::{Proxy, ProxyNode};

/// Convert a Hysteria node to a `hysteria://` link
pub fn hysteria_to_uri(proxy: &Proxy) -> Option<String> {
    let ProxyNode::Hysteria(node) = &proxy.node else {
        return None;
    };

    let mut query = new_query();
    if !node.auth_str.is_empty() {
        query.append_pair("auth", &node.auth_str);
    }
    if !node.up.is_empty() {
        query.append_pair("upmbps", &node.up);
    }
    if !node.down.is_empty() {
        query.append_pair("downmbps", &node.down);
    }
    if let Some(sni) = node.sni.as_deref().filter(|s| !s.is_empty()) {
        query.append_pair("peer", sni);
    }
    if node.insecure {
        query.append_pair("insecure", "1");
    }
    if let Some(obfs) = &node.obfs {
        query.append_pair("obfs", obfs);
    }
    if !node.protocol.is_empty() {
        query.append_pair("protocol", &node.protocol);
    }
    // The link format carries a single ALPN value
    if let Some(alpn) = node.alpn.as_ref().and_then(|a| a.first()) {
        query.append_pair("alpn", alpn);
    }

    Some(format!(
        "hysteria://{}?{}{}",
        authority(&proxy.server, proxy.port),
        query.finish(),
        fragment(&proxy.name)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::proxy_node::HysteriaNode;

    #[test]
    fn test_hysteria_to_uri() {
        let node = HysteriaNode {
            auth_str: "token".to_string(),
            up: "100".to_string(),
            down: "100".to_string(),
            sni: Some("hy.example.com".to_string()),
            insecure: true,
            protocol: "udp".to_string(),
            obfs: None,
            alpn: Some(vec!["h3".to_string(), "h2".to_string()]),
        };
        let proxy = Proxy::new("HY", "hy.example.com", 443, ProxyNode::Hysteria(node));
        assert_eq!(
            hysteria_to_uri(&proxy).unwrap(),
            "hysteria://hy.example.com:443?auth=token&upmbps=100&downmbps=100&peer=hy.example.com&insecure=1&protocol=udp&alpn=h3#HY"
        );
    }
}
