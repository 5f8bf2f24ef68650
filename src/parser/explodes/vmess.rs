use log::debug;
use serde_json::Value;

use crate::models::proxy_node::{GrpcOptions, H2Options, Network, VMessNode, WsOptions};
use crate::models::{Proxy, ProxyNode, ProxyType};
use crate::utils::base64::base64_decode;
use crate::utils::url::unwrap_ipv6;

/// Reads a JSON field that may be written either as a number or as a string.
fn json_number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn json_str<'a>(json: &'a Value, key: &str) -> &'a str {
    json.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Parse a VMess link into a Proxy object
///
/// The payload is the Base64-encoded v2rayN JSON object.
pub fn explode_vmess(vmess: &str) -> Option<Proxy> {
    // Extract the base64 part
    let encoded = vmess.strip_prefix("vmess://")?;

    let decoded = match base64_decode(encoded) {
        Some(decoded) => decoded,
        None => {
            debug!("VMess payload is not Base64: {}", vmess);
            return None;
        }
    };

    // Try to parse as JSON
    let json: Value = match serde_json::from_str(&decoded) {
        Ok(json) => json,
        Err(e) => {
            debug!("VMess payload is not JSON: {}", e);
            return None;
        }
    };

    let server = unwrap_ipv6(json_str(&json, "add")).to_string();
    let uuid = json_str(&json, "id");
    let port = json.get("port").and_then(json_number).unwrap_or(0);
    if server.is_empty() || uuid.is_empty() || port == 0 || port > u16::MAX as u64 {
        debug!("VMess link is missing server, port or id");
        return None;
    }

    let mut node = VMessNode::new(uuid);
    node.alter_id = json
        .get("aid")
        .and_then(json_number)
        .and_then(|a| u32::try_from(a).ok())
        .unwrap_or(0);
    if let Some(cipher) = json.get("scy").and_then(Value::as_str).filter(|s| !s.is_empty()) {
        node.cipher = cipher.to_string();
    }
    node.tls = json_str(&json, "tls") == "tls";
    let sni = json_str(&json, "sni");
    if !sni.is_empty() {
        node.servername = Some(sni.to_string());
    }

    // Transport options come from the shared host/path fields
    let host = json_str(&json, "host");
    let path = json_str(&json, "path");
    let path_or_root = if path.is_empty() { "/" } else { path };
    node.network = match json_str(&json, "net") {
        "" | "tcp" => Network::Tcp,
        "ws" => Network::Ws(WsOptions {
            path: path_or_root.to_string(),
            host: Some(host.to_string()),
        }),
        "grpc" => Network::Grpc(GrpcOptions {
            service_name: path.to_string(),
        }),
        "h2" => Network::H2(H2Options {
            host: vec![host.to_string()],
            path: path_or_root.to_string(),
        }),
        other => Network::Other(other.to_string()),
    };

    let name = match json_str(&json, "ps") {
        "" => ProxyType::VMess.default_name(),
        ps => ps,
    };

    Some(Proxy::new(
        name,
        server,
        port as u16,
        ProxyNode::VMess(node),
    ))
}
