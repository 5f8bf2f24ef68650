use log::debug;

use crate::models::proxy_node::ShadowsocksRNode;
use crate::models::{Proxy, ProxyNode, ProxyType};
use crate::utils::base64::base64_decode;
use crate::utils::url::unwrap_ipv6;

/// Base64 field that some producers leave in plain text.
fn decode_field(value: &str) -> String {
    base64_decode(value).unwrap_or_else(|| value.to_string())
}

/// Parse a ShadowsocksR link into a Proxy object
///
/// Layout after Base64 decoding:
/// `server:port:protocol:method:obfs:base64(password)/?remarks=&protoparam=&obfsparam=`
pub fn explode_ssr(ssr: &str) -> Option<Proxy> {
    let decoded = match base64_decode(ssr.strip_prefix("ssr://")?) {
        Some(decoded) => decoded,
        None => {
            debug!("SSR payload is not Base64: {}", ssr);
            return None;
        }
    };

    let (main, query) = match decoded.split_once("/?") {
        Some((main, query)) => (main, query),
        None => (decoded.as_str(), ""),
    };

    // Split from the right so IPv6 servers keep their colons
    let fields: Vec<&str> = main.rsplitn(6, ':').collect();
    if fields.len() < 6 {
        debug!("SSR link has {} fields, expected 6", fields.len());
        return None;
    }
    let (password, obfs, method, protocol, port, server) = (
        fields[0], fields[1], fields[2], fields[3], fields[4], fields[5],
    );

    let server = unwrap_ipv6(server).to_string();
    let port = match port.parse::<u16>() {
        Ok(port) if port != 0 => port,
        _ => {
            debug!("SSR link has invalid port '{}'", port);
            return None;
        }
    };
    if server.is_empty() {
        return None;
    }

    let mut remark = String::new();
    let mut protocol_param = None;
    let mut obfs_param = None;
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            "remarks" => remark = decode_field(&value),
            "protoparam" => protocol_param = Some(decode_field(&value)),
            "obfsparam" => obfs_param = Some(decode_field(&value)),
            _ => {}
        }
    }

    let node = ShadowsocksRNode {
        cipher: method.to_string(),
        password: decode_field(password),
        protocol: protocol.to_string(),
        obfs: obfs.to_string(),
        protocol_param,
        obfs_param,
    };

    let name = if remark.is_empty() {
        ProxyType::ShadowsocksR.default_name().to_string()
    } else {
        remark
    };

    Some(Proxy::new(name, server, port, ProxyNode::ShadowsocksR(node)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::base64::url_safe_base64_encode;

    fn link(body: &str) -> String {
        format!("ssr://{}", url_safe_base64_encode(body))
    }

    #[test]
    fn test_explode_ssr() {
        let body = format!(
            "ssr.example.com:8989:auth_aes128_md5:aes-256-cfb:tls1.2_ticket_auth:{}/?remarks={}&protoparam={}&obfsparam={}",
            url_safe_base64_encode("pass:word"),
            url_safe_base64_encode("香港 SSR"),
            url_safe_base64_encode("1024:abc"),
            url_safe_base64_encode("cloudflare.com"),
        );
        let proxy = explode_ssr(&link(&body)).unwrap();

        assert_eq!(proxy.name, "香港 SSR");
        assert_eq!(proxy.server, "ssr.example.com");
        assert_eq!(proxy.port, 8989);
        let ProxyNode::ShadowsocksR(node) = proxy.node else {
            panic!("not ssr");
        };
        assert_eq!(node.cipher, "aes-256-cfb");
        assert_eq!(node.password, "pass:word");
        assert_eq!(node.protocol, "auth_aes128_md5");
        assert_eq!(node.obfs, "tls1.2_ticket_auth");
        assert_eq!(node.protocol_param.as_deref(), Some("1024:abc"));
        assert_eq!(node.obfs_param.as_deref(), Some("cloudflare.com"));
    }

    #[test]
    fn test_explode_ssr_without_params() {
        let body = format!("1.2.3.4:443:origin:rc4-md5:plain:{}", url_safe_base64_encode("pw"));
        let proxy = explode_ssr(&link(&body)).unwrap();
        assert_eq!(proxy.name, "SSR Node");
        let ProxyNode::ShadowsocksR(node) = proxy.node else {
            panic!("not ssr");
        };
        assert_eq!(node.password, "pw");
        assert!(node.protocol_param.is_none());
    }

    #[test]
    fn test_explode_ssr_too_few_fields() {
        assert!(explode_ssr(&link("1.2.3.4:443:origin:rc4-md5")).is_none());
        assert!(explode_ssr("ssr://%%%").is_none());
    }
}
