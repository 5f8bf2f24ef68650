use log::warn;
use serde_json::{self, json, Map, Value};

use crate::generator::config::group::{AUTO_GROUP, SELECT_GROUP};
use crate::models::proxy_node::Network;
use crate::models::{ConfigOptions, Proxy, ProxyNode};

/// Transport object for V2Ray-style networks; `None` for plain TCP and
/// networks sing-box cannot express.
fn transport(network: &Network) -> Option<Value> {
    match network {
        Network::Ws(ws) => {
            let mut transport = json!({
                "type": "ws",
                "path": ws.path,
            });
            if let Some(host) = ws.host.as_deref().filter(|h| !h.is_empty()) {
                transport["headers"] = json!({ "Host": host });
            }
            Some(transport)
        }
        Network::Grpc(grpc) => Some(json!({
            "type": "grpc",
            "service_name": grpc.service_name,
        })),
        Network::H2(h2) => Some(json!({
            "type": "http",
            "host": h2.host,
            "path": h2.path,
        })),
        Network::Tcp | Network::Other(_) => None,
    }
}

fn tls(server_name: Option<&str>, insecure: bool) -> Value {
    let mut tls = json!({
        "enabled": true,
        "insecure": insecure,
    });
    if let Some(name) = server_name.filter(|n| !n.is_empty()) {
        tls["server_name"] = json!(name);
    }
    tls
}

fn mbps(value: &str) -> u32 {
    value.trim().parse().unwrap_or(100)
}

/// Outbound object for one node, or `None` for protocols sing-box lacks
fn node_outbound(node: &Proxy) -> Option<Value> {
    let mut outbound = Map::new();
    outbound.insert("tag".to_string(), json!(node.name));
    outbound.insert("server".to_string(), json!(node.server));
    outbound.insert("server_port".to_string(), json!(node.port));

    let (kind, fields) = match &node.node {
        ProxyNode::VMess(vmess) => {
            let mut fields = json!({
                "uuid": vmess.uuid,
                "alter_id": vmess.alter_id,
                "security": vmess.cipher,
            });
            if vmess.tls {
                fields["tls"] = tls(vmess.servername.as_deref(), true);
            }
            if let Some(t) = transport(&vmess.network) {
                fields["transport"] = t;
            }
            ("vmess", fields)
        }
        ProxyNode::Vless(vless) => {
            let mut fields = json!({ "uuid": vless.uuid });
            if let Some(flow) = &vless.flow {
                fields["flow"] = json!(flow);
            }
            if vless.tls() {
                let mut t = tls(vless.servername.as_deref(), true);
                if let Some(reality) = vless.reality() {
                    t["reality"] = json!({
                        "enabled": true,
                        "public_key": reality.public_key,
                        "short_id": reality.short_id,
                    });
                    t["utls"] = json!({
                        "enabled": true,
                        "fingerprint": reality.client_fingerprint,
                    });
                }
                fields["tls"] = t;
            }
            if let Some(t) = transport(&vless.network) {
                fields["transport"] = t;
            }
            ("vless", fields)
        }
        ProxyNode::Shadowsocks(ss) => {
            let mut fields = json!({
                "method": ss.cipher,
                "password": ss.password,
            });
            if let Some(plugin) = &ss.plugin {
                fields["plugin"] = json!(plugin.name);
                let opts: Vec<String> = plugin
                    .opts
                    .iter()
                    .map(|(key, value)| match value {
                        Some(v) => format!("{}={}", key, v),
                        None => key.clone(),
                    })
                    .collect();
                fields["plugin_opts"] = json!(opts.join(";"));
            }
            if !ss.udp {
                fields["network"] = json!("tcp");
            }
            ("shadowsocks", fields)
        }
        ProxyNode::Trojan(trojan) => {
            let mut fields = json!({
                "password": trojan.password,
                "tls": tls(trojan.sni.as_deref(), true),
            });
            if let Some(t) = transport(&trojan.network) {
                fields["transport"] = t;
            }
            ("trojan", fields)
        }
        ProxyNode::Hysteria(hy) => {
            let mut fields = json!({
                "auth_str": hy.auth_str,
                "up_mbps": mbps(&hy.up),
                "down_mbps": mbps(&hy.down),
                "tls": tls(hy.sni.as_deref(), hy.insecure),
            });
            if let Some(alpn) = &hy.alpn {
                fields["tls"]["alpn"] = json!(alpn);
            }
            if let Some(obfs) = &hy.obfs {
                fields["obfs"] = json!(obfs);
            }
            ("hysteria", fields)
        }
        ProxyNode::Hysteria2(hy2) => {
            let mut fields = json!({
                "password": hy2.password,
                "tls": tls(hy2.sni.as_deref(), hy2.insecure),
            });
            if let Some(obfs) = &hy2.obfs {
                fields["obfs"] = json!({
                    "type": obfs,
                    "password": hy2.obfs_password.as_deref().unwrap_or(""),
                });
            }
            ("hysteria2", fields)
        }
        ProxyNode::Tuic(tuic) => {
            let mut fields = json!({
                "uuid": tuic.uuid,
                "password": tuic.password.as_deref().unwrap_or(""),
                "congestion_control": tuic.congestion_controller,
                "udp_relay_mode": tuic.udp_relay_mode,
                "tls": tls(tuic.sni.as_deref(), tuic.insecure),
            });
            if let Some(alpn) = &tuic.alpn {
                fields["tls"]["alpn"] = json!(alpn);
            }
            ("tuic", fields)
        }
        ProxyNode::WireGuard(wg) => (
            "wireguard",
            json!({
                "private_key": wg.private_key,
                "peer_public_key": wg.public_key,
                "local_address": [wg.ip],
                "mtu": wg.mtu,
            }),
        ),
        ProxyNode::Socks5(auth) => {
            let mut fields = json!({ "version": "5" });
            if let Some(username) = &auth.username {
                fields["username"] = json!(username);
                fields["password"] = json!(auth.password.as_deref().unwrap_or(""));
            }
            ("socks", fields)
        }
        ProxyNode::ShadowsocksR(_)
        | ProxyNode::Snell(_)
        | ProxyNode::Naive(_)
        | ProxyNode::AnyTls(_) => return None,
    };

    let mut object = Map::new();
    object.insert("type".to_string(), json!(kind));
    object.extend(outbound);
    if let Value::Object(fields) = fields {
        object.extend(fields);
    }
    Some(Value::Object(object))
}

/// Convert proxies to SingBox format
///
/// Produces a complete client config: a mixed inbound on `http_port`, a
/// selector and a url-test group over every supported node, and GeoIP/GeoSite
/// routing that keeps private and CN traffic direct.
pub fn proxy_to_singbox(nodes: &[Proxy], options: &ConfigOptions) -> String {
    // Process proxies
    let mut proxy_outbounds = Vec::new();
    let mut tags = Vec::new();
    for node in nodes {
        match node_outbound(node) {
            Some(outbound) => {
                tags.push(node.name.clone());
                proxy_outbounds.push(outbound);
            }
            None => warn!(
                "Skipping {} node '{}': not supported by sing-box",
                node.proxy_type(),
                node.name
            ),
        }
    }

    let mut select_members = vec![AUTO_GROUP.to_string(), "direct".to_string()];
    select_members.extend(tags.iter().cloned());

    let mut outbounds = vec![
        json!({
            "type": "selector",
            "tag": SELECT_GROUP,
            "outbounds": select_members,
            "default": AUTO_GROUP,
        }),
        json!({
            "type": "urltest",
            "tag": AUTO_GROUP,
            "outbounds": tags,
            "url": options.test_url,
            "interval": format!("{}s", options.test_interval),
        }),
    ];
    outbounds.extend(proxy_outbounds);
    outbounds.push(json!({ "type": "direct", "tag": "direct" }));
    outbounds.push(json!({ "type": "block", "tag": "block" }));
    outbounds.push(json!({ "type": "dns", "tag": "dns-out" }));

    let listen = if options.allow_lan { "::" } else { "127.0.0.1" };
    let config = json!({
        "log": {
            "level": options.log_level,
            "timestamp": true,
        },
        "dns": {
            "servers": [
                { "tag": "google", "address": "tls://8.8.8.8", "detour": SELECT_GROUP },
                { "tag": "local", "address": "223.5.5.5", "detour": "direct" },
            ],
            "rules": [
                { "geosite": ["cn"], "server": "local" },
            ],
        },
        "inbounds": [
            {
                "type": "mixed",
                "tag": "mixed-in",
                "listen": listen,
                "listen_port": options.http_port,
            },
        ],
        "outbounds": outbounds,
        "route": {
            "rules": [
                { "protocol": "dns", "outbound": "dns-out" },
                { "geoip": ["private", "cn"], "outbound": "direct" },
                { "geosite": ["cn"], "outbound": "direct" },
            ],
            "final": SELECT_GROUP,
            "auto_detect_interface": true,
        },
    });

    serde_json::to_string_pretty(&config).unwrap_or_default()
}
