use log::debug;

use crate::models::proxy_node::TuicNode;
use crate::models::{Proxy, ProxyNode, ProxyType};
use crate::parser::uri::UriParts;

/// Parse a TUIC link into a Proxy object
pub fn explode_tuic(tuic: &str) -> Option<Proxy> {
    let parts = UriParts::parse(tuic)?;

    if parts.username.is_empty() {
        debug!("TUIC link has no uuid: {}", tuic);
        return None;
    }

    let insecure = parts.get("allow_insecure") == Some("1") || parts.get("insecure") == Some("1");
    let node = TuicNode {
        uuid: parts.username.clone(),
        password: parts.password_nonempty(),
        sni: Some(
            parts
                .get_nonempty("sni")
                .unwrap_or(&parts.server)
                .to_string(),
        ),
        insecure,
        congestion_controller: parts
            .get_nonempty("congestion_control")
            .unwrap_or("bbr")
            .to_string(),
        udp_relay_mode: parts
            .get_nonempty("udp_relay_mode")
            .unwrap_or("native")
            .to_string(),
        alpn: parts
            .get_nonempty("alpn")
            .map(|a| a.split(',').map(str::to_string).collect()),
    };

    Some(Proxy::new(
        parts.name_or(ProxyType::Tuic.default_name()),
        parts.server.clone(),
        parts.port_or(443),
        ProxyNode::Tuic(node),
    ))
}
