use super::{authority, fragment, new_query};
use crate::models::{Proxy, ProxyNode};

/// Convert a Snell node to a `snell://` link
pub fn snell_to_uri(proxy: &Proxy) -> Option<String> {
    let ProxyNode::Snell(node) = &proxy.node else {
        return None;
    };

    let mut query = new_query();
    query.append_pair("psk", &node.psk);
    query.append_pair("version", &node.version.to_string());
    if let Some(obfs) = &node.obfs {
        query.append_pair("obfs", obfs);
        if let Some(host) = &node.obfs_host {
            query.append_pair("obfs-host", host);
        }
    }

    Some(format!(
        "snell://{}?{}{}",
        authority(&proxy.server, proxy.port),
        query.finish(),
        fragment(&proxy.name)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::proxy_node::SnellNode;

    #[test]
    fn test_snell_to_uri_drops_orphan_obfs_host() {
        let node = SnellNode {
            psk: "key".to_string(),
            version: 4,
            obfs: None,
            obfs_host: Some("bing.com".to_string()),
        };
        let proxy = Proxy::new("S", "s.example.com", 443, ProxyNode::Snell(node));
        assert_eq!(
            snell_to_uri(&proxy).unwrap(),
            "snell://s.example.com:443?psk=key&version=4#S"
        );
    }
}
