use log::debug;

use crate::models::proxy_node::WireGuardNode;
use crate::models::{Proxy, ProxyNode, ProxyType};
use crate::parser::uri::UriParts;

/// Keys are standard Base64; an unescaped `+` arrives as a space from the query decoder.
fn restore_key(key: &str) -> String {
    key.replace(' ', "+")
}

/// Parse a WireGuard link into a Proxy object (handles the wg:// scheme too)
pub fn explode_wireguard(wireguard: &str) -> Option<Proxy> {
    let parts = UriParts::parse(wireguard)?;

    let private_key = parts
        .get_nonempty("privatekey")
        .or_else(|| parts.get_nonempty("prikey"))
        .map(restore_key)
        .unwrap_or_default();
    let public_key = parts
        .get_nonempty("publickey")
        .or_else(|| parts.get_nonempty("pubkey"))
        .map(restore_key)
        .unwrap_or_else(|| parts.username.clone());
    if private_key.is_empty() || public_key.is_empty() {
        debug!("WireGuard link is missing a key: {}", wireguard);
        return None;
    }

    let mtu = match parts.get_nonempty("mtu") {
        Some(mtu) => mtu.parse().unwrap_or_else(|_| {
            debug!("Ignoring invalid WireGuard mtu '{}'", mtu);
            1420
        }),
        None => 1420,
    };

    let node = WireGuardNode {
        private_key,
        public_key,
        ip: parts.get_nonempty("address").unwrap_or("10.0.0.2").to_string(),
        mtu,
        reserved: parts.get_nonempty("reserved").map(str::to_string),
        dns: parts
            .get_nonempty("dns")
            .map(|dns| dns.split(',').map(|s| s.trim().to_string()).collect()),
    };

    Some(Proxy::new(
        parts.name_or(ProxyType::WireGuard.default_name()),
        parts.server.clone(),
        parts.port_or(51820),
        ProxyNode::WireGuard(node),
    ))
}
