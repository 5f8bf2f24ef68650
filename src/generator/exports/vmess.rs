use serde_json::json;

use crate::models::proxy_node::Network;
use crate::models::{Proxy, ProxyNode};
use crate::utils::base64::base64_encode;

/// Convert a VMess node to a `vmess://` link carrying the v2rayN JSON payload
pub fn vmess_to_uri(proxy: &Proxy) -> Option<String> {
    let ProxyNode::VMess(node) = &proxy.node else {
        return None;
    };

    let (host, path) = match &node.network {
        Network::Ws(ws) => (ws.host.clone().unwrap_or_default(), ws.path.clone()),
        Network::Grpc(grpc) => (String::new(), grpc.service_name.clone()),
        Network::H2(h2) => (
            h2.first_host().unwrap_or("").to_string(),
            h2.path.clone(),
        ),
        Network::Tcp | Network::Other(_) => (String::new(), String::new()),
    };

    let mut payload = json!({
        "v": "2",
        "ps": proxy.name,
        "add": proxy.server,
        "port": proxy.port.to_string(),
        "id": node.uuid,
        "aid": node.alter_id.to_string(),
        "scy": node.cipher,
        "net": node.network.name(),
        "type": "none",
        "host": host,
        "path": path,
        "tls": if node.tls { "tls" } else { "" },
    });
    if let Some(sni) = &node.servername {
        payload["sni"] = json!(sni);
    }

    Some(format!("vmess://{}", base64_encode(&payload.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::proxy_node::{VMessNode, WsOptions};
    use crate::utils::base64::base64_decode;
    use serde_json::Value;

    #[test]
    fn test_vmess_to_uri_payload() {
        let mut node = VMessNode::new("uuid-1");
        node.tls = true;
        node.network = Network::Ws(WsOptions {
            path: "/ws".to_string(),
            host: Some("cdn.example.com".to_string()),
        });
        let proxy = Proxy::new("HK", "hk.example.com", 443, ProxyNode::VMess(node));

        let uri = vmess_to_uri(&proxy).unwrap();
        let payload = base64_decode(uri.strip_prefix("vmess://").unwrap()).unwrap();
        let json: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(json["v"], "2");
        assert_eq!(json["ps"], "HK");
        assert_eq!(json["port"], "443");
        assert_eq!(json["aid"], "0");
        assert_eq!(json["net"], "ws");
        assert_eq!(json["type"], "none");
        assert_eq!(json["host"], "cdn.example.com");
        assert_eq!(json["path"], "/ws");
        assert_eq!(json["tls"], "tls");
        assert!(json.get("sni").is_none());
        // keys keep the v2rayN order
        assert!(payload.starts_with(r#"{"v":"2","ps":"HK","add":"hk.example.com""#));
    }
}
