use log::warn;

use crate::generator::exports::{
    anytls::anytls_to_uri, hysteria::hysteria_to_uri, hysteria2::hysteria2_to_uri,
    naive::naive_to_uri, snell::snell_to_uri, socks::socks_to_uri, ss::ss_to_uri,
    ssr::ssr_to_uri, trojan::trojan_to_uri, tuic::tuic_to_uri, vless::vless_to_uri,
    vmess::vmess_to_uri, wireguard::wireguard_to_uri,
};
use crate::models::{ConfigOptions, Proxy, ProxyType};

/// Convert a proxy to a single URI
///
/// The scheme follows the record's protocol, so parsing the result yields an
/// equivalent record.
pub fn proxy_to_uri(node: &Proxy) -> Option<String> {
    match node.proxy_type() {
        ProxyType::VMess => vmess_to_uri(node),
        ProxyType::Vless => vless_to_uri(node),
        ProxyType::Shadowsocks => ss_to_uri(node),
        ProxyType::ShadowsocksR => ssr_to_uri(node),
        ProxyType::Trojan => trojan_to_uri(node),
        ProxyType::Hysteria => hysteria_to_uri(node),
        ProxyType::Hysteria2 => hysteria2_to_uri(node),
        ProxyType::Tuic => tuic_to_uri(node),
        ProxyType::WireGuard => wireguard_to_uri(node),
        ProxyType::Socks5 => socks_to_uri(node),
        ProxyType::Snell => snell_to_uri(node),
        ProxyType::Naive => naive_to_uri(node),
        ProxyType::AnyTls => anytls_to_uri(node),
    }
}

/// Convert proxies to a newline-separated list of share links
pub fn proxy_to_single(nodes: &[Proxy], _options: &ConfigOptions) -> String {
    nodes
        .iter()
        .filter_map(|node| {
            let uri = proxy_to_uri(node);
            if uri.is_none() {
                warn!("Skipping {} node '{}': could not encode", node.proxy_type(), node.name);
            }
            uri
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::proxy_node::{AuthNode, ShadowsocksNode};
    use crate::models::ProxyNode;
    use crate::parser::explode;

    #[test]
    fn test_proxy_to_uri_dispatch() {
        let node = Proxy::new(
            "Home",
            "1.1.1.1",
            8388,
            ProxyNode::Shadowsocks(ShadowsocksNode::new("aes-256-gcm", "password")),
        );
        let uri = proxy_to_uri(&node).unwrap();
        assert!(uri.starts_with("ss://"));
        assert_eq!(explode(&uri), Some(node));
    }

    #[test]
    fn test_single_joins_lines() {
        let nodes = vec![
            Proxy::new("A", "a.example.com", 1080, ProxyNode::Socks5(AuthNode::default())),
            Proxy::new("B", "b.example.com", 443, ProxyNode::AnyTls(AuthNode::default())),
        ];
        let output = proxy_to_single(&nodes, &ConfigOptions::default());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("socks5://a.example.com:1080"));
        assert!(lines[1].starts_with("anytls://b.example.com:443"));
        assert_eq!(proxy_to_single(&[], &ConfigOptions::default()), "");
    }
}
