use super::{append_transport, authority, fragment, new_query};
use crate::models::{Proxy, ProxyNode};
use crate::utils::url::url_encode;

/// Convert a Trojan node to a `trojan://` link
pub fn trojan_to_uri(proxy: &Proxy) -> Option<String> {
    let ProxyNode::Trojan(node) = &proxy.node else {
        return None;
    };

    let mut query = new_query();
    if let Some(sni) = node.sni.as_deref().filter(|s| !s.is_empty()) {
        query.append_pair("sni", sni);
    }
    if !node.network.is_tcp() {
        query.append_pair("type", node.network.name());
        append_transport(&mut query, &node.network);
    }
    if let Some(fp) = &node.client_fingerprint {
        query.append_pair("fp", fp);
    }

    Some(format!(
        "trojan://{}@{}?{}{}",
        url_encode(&node.password),
        authority(&proxy.server, proxy.port),
        query.finish(),
        fragment(&proxy.name)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::proxy_node::{Network, TrojanNode, WsOptions};

    #[test]
    fn test_trojan_to_uri() {
        let mut node = TrojanNode::new("p@ss");
        node.sni = Some("example.com".to_string());
        node.network = Network::Ws(WsOptions {
            path: "/tj".to_string(),
            host: Some(String::new()),
        });
        let proxy = Proxy::new("US", "example.com", 443, ProxyNode::Trojan(node));
        assert_eq!(
            trojan_to_uri(&proxy).unwrap(),
            "trojan://p%40ss@example.com:443?sni=example.com&type=ws&path=%2Ftj#US"
        );
    }

    #[test]
    fn test_trojan_to_uri_rejects_other_protocols() {
        let proxy = Proxy::new(
            "x",
            "example.com",
            1080,
            ProxyNode::Socks5(Default::default()),
        );
        assert!(trojan_to_uri(&proxy).is_none());
    }
}
