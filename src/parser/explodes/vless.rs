use log::debug;

use crate::models::proxy_node::{
    GrpcOptions, H2Options, Network, RealityOptions, VlessNode, VlessSecurity, WsOptions,
};
use crate::models::{Proxy, ProxyNode, ProxyType};
use crate::parser::uri::UriParts;

/// Builds the stream transport from the `type` query parameter.
///
/// `ws_host_default` decides whether a ws link without `host` still gets an
/// (empty) Host header.
pub(crate) fn transport_from_params(
    parts: &UriParts,
    network: &str,
    ws_host_default: bool,
) -> Network {
    match network {
        "" | "tcp" => Network::Tcp,
        "ws" => Network::Ws(WsOptions {
            path: parts.get_nonempty("path").unwrap_or("/").to_string(),
            host: match parts.get_nonempty("host") {
                Some(host) => Some(host.to_string()),
                None if ws_host_default => Some(String::new()),
                None => None,
            },
        }),
        "grpc" => Network::Grpc(GrpcOptions {
            service_name: parts.get("serviceName").unwrap_or("").to_string(),
        }),
        "h2" => Network::H2(H2Options {
            host: vec![parts.get("host").unwrap_or("").to_string()],
            path: parts.get_nonempty("path").unwrap_or("/").to_string(),
        }),
        other => Network::Other(other.to_string()),
    }
}

/// Parse a VLESS link into a Proxy object
pub fn explode_vless(vless: &str) -> Option<Proxy> {
    let parts = UriParts::parse(vless)?;

    // VLESS has no well-known port
    let port = match parts.port {
        Some(port) => port,
        None => {
            debug!("VLESS link has no port: {}", vless);
            return None;
        }
    };
    if parts.username.is_empty() {
        debug!("VLESS link has no uuid: {}", vless);
        return None;
    }

    let mut node = VlessNode::new(parts.username.clone());
    node.network = transport_from_params(&parts, parts.get("type").unwrap_or(""), false);

    match parts.get("security") {
        Some("reality") => {
            node.security = VlessSecurity::Reality(RealityOptions {
                public_key: parts.get("pbk").unwrap_or("").to_string(),
                short_id: parts.get("sid").unwrap_or("").to_string(),
                client_fingerprint: parts.get_nonempty("fp").unwrap_or("chrome").to_string(),
            });
            node.servername = Some(String::new());
        }
        Some("tls") => node.security = VlessSecurity::Tls,
        _ => {}
    }
    if let Some(sni) = parts.get_nonempty("sni") {
        node.servername = Some(sni.to_string());
    }
    node.flow = parts.get_nonempty("flow").map(str::to_string);

    Some(Proxy::new(
        parts.name_or(ProxyType::Vless.default_name()),
        parts.server.clone(),
        port,
        ProxyNode::Vless(node),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explode_vless_reality() {
        let proxy = explode_vless(
            "vless://a3482e88-686a-4a58-8126-99c9df64b7bf@203.0.113.9:443?type=tcp&security=reality&pbk=Zx9k:abc&sid=6ba8&flow=xtls-rprx-vision#JP%20Reality",
        )
        .unwrap();

        assert_eq!(proxy.name, "JP Reality");
        assert_eq!(proxy.port, 443);
        let ProxyNode::Vless(node) = proxy.node else {
            panic!("not vless");
        };
        assert!(node.tls());
        assert_eq!(
            node.reality(),
            Some(&RealityOptions {
                public_key: "Zx9k:abc".to_string(),
                short_id: "6ba8".to_string(),
                client_fingerprint: "chrome".to_string(),
            })
        );
        assert_eq!(node.servername.as_deref(), Some(""));
        assert_eq!(node.flow.as_deref(), Some("xtls-rprx-vision"));
        assert_eq!(node.network, Network::Tcp);
    }

    #[test]
    fn test_explode_vless_ws_tls() {
        let proxy = explode_vless(
            "vless://id-1@[2001:db8::2]:8443?type=ws&security=tls&sni=sni.example.com&path=%2Fws&fp=firefox",
        )
        .unwrap();

        assert_eq!(proxy.server, "2001:db8::2");
        assert_eq!(proxy.name, "VLESS Node");
        let ProxyNode::Vless(node) = proxy.node else {
            panic!("not vless");
        };
        assert_eq!(node.security, VlessSecurity::Tls);
        assert_eq!(node.servername.as_deref(), Some("sni.example.com"));
        // ws without a host parameter carries no Host header
        assert_eq!(
            node.network,
            Network::Ws(WsOptions {
                path: "/ws".to_string(),
                host: None,
            })
        );
    }

    #[test]
    fn test_explode_vless_requires_port_and_uuid() {
        assert!(explode_vless("vless://id@example.com").is_none());
        assert!(explode_vless("vless://example.com:443").is_none());
        assert!(explode_vless("vless://id@example.com:0").is_none());
    }
}
