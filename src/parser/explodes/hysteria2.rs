use log::debug;

use crate::models::proxy_node::Hysteria2Node;
use crate::models::{Proxy, ProxyNode, ProxyType};
use crate::parser::uri::UriParts;

/// Parse a Hysteria2 link into a Proxy object (handles the hy2:// scheme too)
pub fn explode_hysteria2(hysteria2: &str) -> Option<Proxy> {
    let parts = UriParts::parse(hysteria2)?;

    // Extract password (username in URL)
    if parts.username.is_empty() {
        debug!("Hysteria2 link has no password: {}", hysteria2);
        return None;
    }

    let node = Hysteria2Node {
        password: parts.username.clone(),
        sni: Some(
            parts
                .get_nonempty("sni")
                .unwrap_or(&parts.server)
                .to_string(),
        ),
        insecure: parts.get("insecure") == Some("1"),
        obfs: parts.get_nonempty("obfs").map(str::to_string),
        obfs_password: parts.get_nonempty("obfs-password").map(str::to_string),
    };

    Some(Proxy::new(
        parts.name_or(ProxyType::Hysteria2.default_name()),
        parts.server.clone(),
        parts.port_or(443),
        ProxyNode::Hysteria2(node),
    ))
}
