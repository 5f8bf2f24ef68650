use log::debug;

use crate::models::proxy_node::TrojanNode;
use crate::models::{Proxy, ProxyNode, ProxyType};
use crate::parser::explodes::vless::transport_from_params;
use crate::parser::uri::UriParts;

/// Parse a Trojan link into a Proxy object
pub fn explode_trojan(trojan: &str) -> Option<Proxy> {
    let parts = UriParts::parse(trojan)?;

    if parts.username.is_empty() {
        debug!("Trojan link has no password: {}", trojan);
        return None;
    }

    let mut node = TrojanNode::new(parts.username.clone());
    node.sni = Some(
        parts
            .get_nonempty("sni")
            .unwrap_or(&parts.server)
            .to_string(),
    );
    // Trojan only carries ws and grpc transports
    node.network = match parts.get("type") {
        Some(network @ ("ws" | "grpc")) => transport_from_params(&parts, network, true),
        _ => Default::default(),
    };
    node.client_fingerprint = parts.get_nonempty("fp").map(str::to_string);

    Some(Proxy::new(
        parts.name_or(ProxyType::Trojan.default_name()),
        parts.server.clone(),
        parts.port_or(443),
        ProxyNode::Trojan(node),
    ))
}
