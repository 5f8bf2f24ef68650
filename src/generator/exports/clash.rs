//! Projection of proxy records onto Clash / Clash-Meta proxy mappings.

use log::warn;

use crate::generator::yaml::{Mapping, YamlValue};
use crate::models::proxy_node::{Network, ShadowsocksNode, VlessSecurity};
use crate::models::{Proxy, ProxyNode, ProxyType};

/// Protocols the classic (non-Meta) Clash core understands.
const CLASH_CLASSIC_TYPES: [ProxyType; 7] = [
    ProxyType::Shadowsocks,
    ProxyType::ShadowsocksR,
    ProxyType::VMess,
    ProxyType::Trojan,
    ProxyType::Socks5,
    ProxyType::Snell,
    ProxyType::WireGuard,
];

/// Whether a record can appear in a classic Clash config.
pub fn is_clash_classic_supported(proxy_type: ProxyType) -> bool {
    CLASH_CLASSIC_TYPES.contains(&proxy_type)
}

/// Whether a record can appear in a Clash-Meta (mihomo) config.
pub fn is_clash_meta_supported(proxy_type: ProxyType) -> bool {
    proxy_type != ProxyType::Naive
}

fn insert(map: &mut Mapping, key: &str, value: impl Into<YamlValue>) {
    map.insert(key.to_string(), value.into());
}

/// `ws-opts` / `grpc-opts` / `h2-opts` for the given network.
fn transport_opts(map: &mut Mapping, network: &Network) {
    match network {
        Network::Ws(ws) => {
            let mut opts = Mapping::new();
            insert(&mut opts, "path", &ws.path);
            if let Some(host) = &ws.host {
                let mut headers = Mapping::new();
                insert(&mut headers, "Host", host);
                insert(&mut opts, "headers", headers);
            }
            insert(map, "ws-opts", opts);
        }
        Network::Grpc(grpc) => {
            let mut opts = Mapping::new();
            insert(&mut opts, "grpc-service-name", &grpc.service_name);
            insert(map, "grpc-opts", opts);
        }
        Network::H2(h2) => {
            let mut opts = Mapping::new();
            insert(&mut opts, "host", h2.host.clone());
            insert(&mut opts, "path", &h2.path);
            insert(map, "h2-opts", opts);
        }
        Network::Tcp | Network::Other(_) => {}
    }
}

/// SIP003 plugins in Clash spelling; obfs-local and simple-obfs become `obfs`.
fn ss_plugin(map: &mut Mapping, node: &ShadowsocksNode) {
    let Some(plugin) = &node.plugin else {
        return;
    };
    let mut opts = Mapping::new();
    match plugin.name.as_str() {
        "obfs-local" | "simple-obfs" | "obfs" => {
            insert(map, "plugin", "obfs");
            insert(&mut opts, "mode", plugin.opt("obfs"));
            insert(&mut opts, "host", plugin.opt("obfs-host"));
        }
        "v2ray-plugin" => {
            insert(map, "plugin", "v2ray-plugin");
            insert(&mut opts, "mode", plugin.opt("mode").unwrap_or("websocket"));
            insert(&mut opts, "host", plugin.opt("host"));
            insert(&mut opts, "path", plugin.opt("path"));
            if plugin.has_flag("tls") {
                insert(&mut opts, "tls", true);
            }
        }
        other => {
            insert(map, "plugin", other);
            for (key, value) in &plugin.opts {
                match value {
                    Some(v) => insert(&mut opts, key, v),
                    None => insert(&mut opts, key, true),
                }
            }
        }
    }
    if opts.values().any(|v| !v.is_null()) {
        insert(map, "plugin-opts", opts);
    }
}

/// Convert a proxy record to its Clash mapping
///
/// Keys follow the order Clash users expect to read them in. Returns `None`
/// for protocols no Clash core supports.
pub fn proxy_to_clash(proxy: &Proxy) -> Option<Mapping> {
    let proxy_type = proxy.proxy_type();
    if !is_clash_meta_supported(proxy_type) {
        warn!(
            "Skipping node '{}': {} is not supported by Clash",
            proxy.name, proxy_type
        );
        return None;
    }

    let mut map = Mapping::new();
    insert(&mut map, "name", &proxy.name);
    insert(&mut map, "type", proxy_type.tag());
    insert(&mut map, "server", &proxy.server);
    insert(&mut map, "port", proxy.port);

    match &proxy.node {
        ProxyNode::Shadowsocks(node) => {
            insert(&mut map, "cipher", &node.cipher);
            insert(&mut map, "password", &node.password);
            ss_plugin(&mut map, node);
            insert(&mut map, "udp", node.udp);
        }
        ProxyNode::ShadowsocksR(node) => {
            insert(&mut map, "cipher", &node.cipher);
            insert(&mut map, "password", &node.password);
            insert(&mut map, "protocol", &node.protocol);
            insert(&mut map, "obfs", &node.obfs);
            insert(
                &mut map,
                "protocol-param",
                node.protocol_param.clone().unwrap_or_default(),
            );
            insert(
                &mut map,
                "obfs-param",
                node.obfs_param.clone().unwrap_or_default(),
            );
        }
        ProxyNode::VMess(node) => {
            insert(&mut map, "uuid", &node.uuid);
            insert(&mut map, "alterId", node.alter_id);
            insert(&mut map, "cipher", &node.cipher);
            insert(&mut map, "network", node.network.name());
            insert(&mut map, "tls", node.tls);
            transport_opts(&mut map, &node.network);
            insert(&mut map, "servername", node.servername.clone());
            if node.tls {
                insert(&mut map, "skip-cert-verify", true);
            }
        }
        ProxyNode::Vless(node) => {
            insert(&mut map, "uuid", &node.uuid);
            insert(&mut map, "network", node.network.name());
            insert(&mut map, "tls", node.tls());
            insert(&mut map, "skip-cert-verify", true);
            if let VlessSecurity::Reality(reality) = &node.security {
                let mut opts = Mapping::new();
                insert(&mut opts, "public-key", &reality.public_key);
                insert(&mut opts, "short-id", &reality.short_id);
                insert(&mut map, "reality-opts", opts);
            }
            insert(&mut map, "servername", node.servername.clone());
            if let Some(reality) = node.reality() {
                insert(&mut map, "client-fingerprint", &reality.client_fingerprint);
            }
            insert(&mut map, "flow", node.flow.clone());
            transport_opts(&mut map, &node.network);
        }
        ProxyNode::Trojan(node) => {
            insert(&mut map, "password", &node.password);
            insert(&mut map, "sni", node.sni.clone());
            insert(&mut map, "skip-cert-verify", true);
            if !node.network.is_tcp() {
                insert(&mut map, "network", node.network.name());
                transport_opts(&mut map, &node.network);
            }
            insert(&mut map, "client-fingerprint", node.client_fingerprint.clone());
        }
        ProxyNode::Hysteria(node) => {
            insert(&mut map, "auth-str", &node.auth_str);
            insert(&mut map, "up", &node.up);
            insert(&mut map, "down", &node.down);
            insert(&mut map, "sni", node.sni.clone());
            insert(&mut map, "skip-cert-verify", node.insecure);
            insert(&mut map, "protocol", &node.protocol);
            insert(&mut map, "obfs", node.obfs.clone());
            insert(&mut map, "alpn", node.alpn.clone());
        }
        ProxyNode::Hysteria2(node) => {
            insert(&mut map, "password", &node.password);
            insert(&mut map, "sni", node.sni.clone());
            insert(&mut map, "skip-cert-verify", node.insecure);
            insert(&mut map, "obfs", node.obfs.clone());
            insert(&mut map, "obfs-password", node.obfs_password.clone());
        }
        ProxyNode::Tuic(node) => {
            insert(&mut map, "uuid", &node.uuid);
            insert(&mut map, "password", node.password.clone());
            insert(&mut map, "sni", node.sni.clone());
            insert(&mut map, "skip-cert-verify", node.insecure);
            insert(&mut map, "congestion-controller", &node.congestion_controller);
            insert(&mut map, "udp-relay-mode", &node.udp_relay_mode);
            insert(&mut map, "alpn", node.alpn.clone());
        }
        ProxyNode::WireGuard(node) => {
            insert(&mut map, "private-key", &node.private_key);
            insert(&mut map, "public-key", &node.public_key);
            insert(&mut map, "ip", &node.ip);
            insert(&mut map, "mtu", node.mtu);
            insert(&mut map, "reserved", node.reserved.clone());
            insert(&mut map, "dns", node.dns.clone());
        }
        ProxyNode::Socks5(auth) => {
            insert(&mut map, "username", auth.username.clone());
            insert(&mut map, "password", auth.password.clone());
        }
        ProxyNode::Snell(node) => {
            insert(&mut map, "psk", &node.psk);
            insert(&mut map, "version", node.version);
            if let Some(obfs) = &node.obfs {
                let mut opts = Mapping::new();
                insert(&mut opts, "mode", obfs);
                insert(&mut opts, "host", node.obfs_host.clone());
                insert(&mut map, "obfs-opts", opts);
            }
        }
        ProxyNode::AnyTls(auth) => {
            // A lone userinfo (`anytls://token@host`) is the password
            insert(
                &mut map,
                "password",
                auth.password.clone().or_else(|| auth.username.clone()),
            );
        }
        ProxyNode::Naive(_) => return None,
    }

    Some(map)
}
