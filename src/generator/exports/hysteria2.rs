use super::{authority, fragment, new_query};
use crate::models::{Proxy, ProxyNode};
use crate::utils::url::url_encode;

/// Convert a Hysteria2 node to a `hysteria2://` link
pub fn hysteria2_to_uri(proxy: &Proxy) -> Option<String> {
    let ProxyNode::Hysteria2(node) = &proxy.node else {
        return None;
    };

    let mut query = new_query();
    if let Some(sni) = node.sni.as_deref().filter(|s| !s.is_empty()) {
        query.append_pair("sni", sni);
    }
    if node.insecure {
        query.append_pair("insecure", "1");
    }
    if let Some(obfs) = &node.obfs {
        query.append_pair("obfs", obfs);
    }
    if let Some(obfs_password) = &node.obfs_password {
        query.append_pair("obfs-password", obfs_password);
    }

    Some(format!(
        "hysteria2://{}@{}?{}{}",
        url_encode(&node.password),
        authority(&proxy.server, proxy.port),
        query.finish(),
        fragment(&proxy.name)
    ))
}
