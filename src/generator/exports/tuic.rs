use super::{authority, fragment, new_query};
use crate::models::{Proxy, ProxyNode};
use crate::utils::url::url_encode;

/// Convert a TUIC node to a `tuic://` link
pub fn tuic_to_uri(proxy: &Proxy) -> Option<String> {
    let ProxyNode::Tuic(node) = &proxy.node else {
        return None;
    };

    let mut query = new_query();
    if let Some(sni) = node.sni.as_deref().filter(|s| !s.is_empty()) {
        query.append_pair("sni", sni);
    }
    if node.insecure {
        query.append_pair("allow_insecure", "1");
    }
    if !node.congestion_controller.is_empty() {
        query.append_pair("congestion_control", &node.congestion_controller);
    }
    if !node.udp_relay_mode.is_empty() {
        query.append_pair("udp_relay_mode", &node.udp_relay_mode);
    }
    if let Some(alpn) = &node.alpn {
        query.append_pair("alpn", &alpn.join(","));
    }

    let password = match &node.password {
        Some(password) => format!(":{}", url_encode(password)),
        None => String::new(),
    };

    Some(format!(
        "tuic://{}{}@{}?{}{}",
        url_encode(&node.uuid),
        password,
        authority(&proxy.server, proxy.port),
        query.finish(),
        fragment(&proxy.name)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::proxy_node::TuicNode;

    #[test]
    fn test_tuic_to_uri() {
        let node = TuicNode {
            uuid: "id".to_string(),
            password: Some("pw".to_string()),
            sni: Some("t.example.com".to_string()),
            insecure: true,
            congestion_controller: "bbr".to_string(),
            udp_relay_mode: "native".to_string(),
            alpn: Some(vec!["h3".to_string(), "h2".to_string()]),
        };
        let proxy = Proxy::new("T", "t.example.com", 443, ProxyNode::Tuic(node));
        assert_eq!(
            tuic_to_uri(&proxy).unwrap(),
            "tuic://id:pw@t.example.com:443?sni=t.example.com&allow_insecure=1&congestion_control=bbr&udp_relay_mode=native&alpn=h3%2Ch2#T"
        );
    }
}
