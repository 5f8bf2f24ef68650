use super::{authority, fragment, new_query};
use crate::models::{Proxy, ProxyNode};

/// Convert a WireGuard node to a `wireguard://` link
pub fn wireguard_to_uri(proxy: &Proxy) -> Option<String> {
    let ProxyNode::WireGuard(node) = &proxy.node else {
        return None;
    };

    let mut query = new_query();
    query.append_pair("privatekey", &node.private_key);
    query.append_pair("publickey", &node.public_key);
    if !node.ip.is_empty() {
        query.append_pair("address", &node.ip);
    }
    query.append_pair("mtu", &node.mtu.to_string());
    if let Some(reserved) = &node.reserved {
        query.append_pair("reserved", reserved);
    }
    if let Some(dns) = &node.dns {
        query.append_pair("dns", &dns.join(","));
    }

    Some(format!(
        "wireguard://{}?{}{}",
        authority(&proxy.server, proxy.port),
        query.finish(),
        fragment(&proxy.name)
    ))
}
