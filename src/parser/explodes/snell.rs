use log::debug;

use crate::models::proxy_node::SnellNode;
use crate::models::{Proxy, ProxyNode, ProxyType};
use crate::parser::uri::UriParts;

/// Parse a Snell link into a Proxy object
pub fn explode_snell(snell: &str) -> Option<Proxy> {
    let parts = UriParts::parse(snell)?;

    let psk = if parts.username.is_empty() {
        parts.get("psk").unwrap_or("").to_string()
    } else {
        parts.username.clone()
    };
    if psk.is_empty() {
        debug!("Snell link has no psk: {}", snell);
        return None;
    }

    let version = match parts.get_nonempty("version") {
        Some(v) => v.parse().unwrap_or_else(|_| {
            debug!("Ignoring invalid Snell version '{}'", v);
            4
        }),
        None => 4,
    };

    // obfs-host is only meaningful together with obfs
    let obfs = parts.get_nonempty("obfs").map(str::to_string);
    let obfs_host = obfs
        .as_ref()
        .and(parts.get_nonempty("obfs-host"))
        .map(str::to_string);

    let node = SnellNode {
        psk,
        version,
        obfs,
        obfs_host,
    };

    Some(Proxy::new(
        parts.name_or(ProxyType::Snell.default_name()),
        parts.server.clone(),
        parts.port_or(443),
        ProxyNode::Snell(node),
    ))
}
