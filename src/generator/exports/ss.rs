use super::{authority, fragment, new_query};
use crate::models::{Proxy, ProxyNode};
use crate::utils::base64::base64_encode;

/// Convert a Shadowsocks node to a SIP002 `ss://` link
///
/// Format: `ss://BASE64(method:password)@server:port[?plugin=...&udp=0]#remark`
pub fn ss_to_uri(proxy: &Proxy) -> Option<String> {
    let ProxyNode::Shadowsocks(node) = &proxy.node else {
        return None;
    };

    let user_info = base64_encode(&format!("{}:{}", node.cipher, node.password));
    let mut uri = format!("ss://{}@{}", user_info, authority(&proxy.server, proxy.port));

    let mut query = new_query();
    if let Some(plugin) = &node.plugin {
        query.append_pair("plugin", &plugin.to_string());
    }
    if !node.udp {
        query.append_pair("udp", "0");
    }
    let query = query.finish();
    if !query.is_empty() {
        uri.push('?');
        uri.push_str(&query);
    }

    // Add remark
    uri.push_str(&fragment(&proxy.name));
    Some(uri)
}
