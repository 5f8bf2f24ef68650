use super::{append_transport, authority, fragment, new_query};
use crate::models::proxy_node::VlessSecurity;
use crate::models::{Proxy, ProxyNode};
use crate::utils::url::url_encode;

/// Convert a VLESS node to a `vless://` link
pub fn vless_to_uri(proxy: &Proxy) -> Option<String> {
    let ProxyNode::Vless(node) = &proxy.node else {
        return None;
    };

    let mut query = new_query();
    query.append_pair("type", node.network.name());
    match &node.security {
        VlessSecurity::Reality(reality) => {
            query.append_pair("security", "reality");
            if !reality.public_key.is_empty() {
                query.append_pair("pbk", &reality.public_key);
            }
            if !reality.short_id.is_empty() {
                query.append_pair("sid", &reality.short_id);
            }
        }
        VlessSecurity::Tls => {
            query.append_pair("security", "tls");
        }
        VlessSecurity::None => {}
    }
    if let Some(sni) = node.servername.as_deref().filter(|s| !s.is_empty()) {
        query.append_pair("sni", sni);
    }
    if let Some(flow) = &node.flow {
        query.append_pair("flow", flow);
    }
    if let Some(reality) = node.reality() {
        query.append_pair("fp", &reality.client_fingerprint);
    }
    append_transport(&mut query, &node.network);

    Some(format!(
        "vless://{}@{}?{}{}",
        url_encode(&node.uuid),
        authority(&proxy.server, proxy.port),
        query.finish(),
        fragment(&proxy.name)
    ))
}
