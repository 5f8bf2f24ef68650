use crate::models::proxy_node::HysteriaNode;
use crate::models::{Proxy, ProxyNode, ProxyType};
use crate::parser::uri::UriParts;

/// Parse a Hysteria (v1) link into a Proxy object
pub fn explode_hysteria(hysteria: &str) -> Option<Proxy> {
    let parts = UriParts::parse(hysteria)?;

    let node = HysteriaNode {
        // auth falls back to the userinfo
        auth_str: parts
            .get_nonempty("auth")
            .unwrap_or(&parts.username)
            .to_string(),
        up: parts.get_nonempty("upmbps").unwrap_or("100").to_string(),
        down: parts.get_nonempty("downmbps").unwrap_or("100").to_string(),
        sni: Some(
            parts
                .get_nonempty("peer")
                .or_else(|| parts.get_nonempty("sni"))
                .unwrap_or(&parts.server)
                .to_string(),
        ),
        insecure: parts.get("insecure") == Some("1"),
        protocol: parts.get_nonempty("protocol").unwrap_or("udp").to_string(),
        obfs: parts.get_nonempty("obfs").map(str::to_string),
        alpn: parts.get_nonempty("alpn").map(|a| vec![a.to_string()]),
    };

    Some(Proxy::new(
        parts.name_or(ProxyType::Hysteria.default_name()),
        parts.server.clone(),
        parts.port_or(443),
        ProxyNode::Hysteria(node),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explode_hysteria() {
        let proxy = explode_hysteria(
            "hysteria://hy.example.com:36712?auth=token&upmbps=50&downmbps=200&peer=peer.example.com&insecure=1&obfs=xplus&alpn=h3#HY",
        )
        .unwrap();
        assert_eq!(proxy.name, "HY");
        assert_eq!(proxy.port, 36712);
        let ProxyNode::Hysteria(node) = proxy.node else {
            panic!("not hysteria");
        };
        assert_eq!(node.auth_str, "token");
        assert_eq!(node.up, "50");
        assert_eq!(node.down, "200");
        assert_eq!(node.sni.as_deref(), Some("peer.example.com"));
        assert!(node.insecure);
        assert_eq!(node.protocol, "udp");
        assert_eq!(node.obfs.as_deref(), Some("xplus"));
        assert_eq!(node.alpn, Some(vec!["h3".to_string()]));
    }

    #[test]
    fn test_explode_hysteria_defaults() {
        let proxy = explode_hysteria("hysteria://user-auth@hy.example.com").unwrap();
        assert_eq!(proxy.name, "Hysteria Node");
        assert_eq!(proxy.port, 443);
        let ProxyNode::Hysteria(node) = proxy.node else {
            panic!("not hysteria");
        };
        assert_eq!(node.auth_str, "user-auth");
        assert_eq!(node.up, "100");
        assert_eq!(node.sni.as_deref(), Some("hy.example.com"));
        assert!(!node.insecure);
        assert!(node.alpn.is_none());
    }
}
