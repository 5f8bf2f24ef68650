use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::proxy_node::{ShadowsocksNode, SsPlugin};
use crate::models::{Proxy, ProxyNode, ProxyType};
use crate::utils::base64::base64_decode;
use crate::utils::url::{unwrap_ipv6, url_decode};

static HOST_PORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+):(\d+)").unwrap());

fn split_method_password(user_info: &str) -> Option<(String, String)> {
    let (method, password) = user_info.split_once(':')?;
    Some((method.to_string(), password.to_string()))
}

/// Parse a Shadowsocks link into a Proxy object
///
/// Accepts both SIP002 (`ss://base64(method:password)@host:port`, userinfo
/// optionally in plain text) and the legacy whole-body Base64 form.
pub fn explode_ss(ss: &str) -> Option<Proxy> {
    // Extract the content part after ss://
    let mut ss_content = ss.strip_prefix("ss://")?.to_string();

    // Extract fragment (remark) if present
    let mut ps = String::new();
    if let Some(hash_pos) = ss_content.find('#') {
        ps = url_decode(&ss_content[hash_pos + 1..]);
        ss_content.truncate(hash_pos);
    }

    // Extract plugin and udp query parameters
    let mut plugin = None;
    let mut udp = true;
    if let Some(query_pos) = ss_content.find('?') {
        let addition = ss_content[query_pos + 1..].to_string();
        ss_content.truncate(query_pos);
        for (key, value) in url::form_urlencoded::parse(addition.as_bytes()) {
            match key.as_ref() {
                "plugin" => plugin = SsPlugin::parse(&value),
                "udp" => udp = value != "0",
                _ => {}
            }
        }
    }
    let ss_content = ss_content.trim_end_matches('/');

    let mut method = String::new();
    let mut password = String::new();
    let mut server = String::new();
    let mut port = 0u32;

    if let Some(at_pos) = ss_content.rfind('@') {
        let user_info = &ss_content[..at_pos];
        let server_part = &ss_content[at_pos + 1..];

        let decoded = base64_decode(user_info)
            .and_then(|d| split_method_password(&d))
            .or_else(|| split_method_password(&url_decode(user_info)));
        if let Some((m, p)) = decoded {
            method = m;
            password = p;
        }

        if let Some(caps) = HOST_PORT.captures(server_part) {
            server = unwrap_ipv6(&caps[1]).to_string();
            port = caps[2].parse().unwrap_or(0);
        }
    } else if let Some(decoded) = base64_decode(ss_content) {
        if let Some((user_info, server_info)) = decoded.rsplit_once('@') {
            if let Some((m, p)) = split_method_password(user_info) {
                method = m;
                password = p;
            }
            if let Some((host, port_str)) = server_info.rsplit_once(':') {
                server = unwrap_ipv6(host).to_string();
                port = port_str.trim().parse().unwrap_or(0);
            }
        }
    }

    if server.is_empty() || method.is_empty() || port == 0 || port > u16::MAX as u32 {
        debug!("Shadowsocks link is missing server, port or method: {}", ss);
        return None;
    }

    let mut node = ShadowsocksNode::new(method, password);
    node.plugin = plugin;
    node.udp = udp;

    let name = if ps.is_empty() {
        ProxyType::Shadowsocks.default_name().to_string()
    } else {
        ps
    };

    Some(Proxy::new(
        name,
        server,
        port as u16,
        ProxyNode::Shadowsocks(node),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ss_node(proxy: &Proxy) -> &ShadowsocksNode {
        match &proxy.node {
            ProxyNode::Shadowsocks(node) => node,
            other => panic!("not shadowsocks: {:?}", other),
        }
    }

    #[test]
    fn test_explode_ss_sip002() {
        let proxy = explode_ss("ss://YWVzLTI1Ni1nY206cGFzc3dvcmQ=@1.1.1.1:8888#My_SS_Node").unwrap();
        assert_eq!(proxy.name, "My_SS_Node");
        assert_eq!(proxy.server, "1.1.1.1");
        assert_eq!(proxy.port, 8888);
        let node = ss_node(&proxy);
        assert_eq!(node.cipher, "aes-256-gcm");
        assert_eq!(node.password, "password");
        assert!(node.udp);
        assert!(node.plugin.is_none());
    }

    #[test]
    fn test_explode_ss_plain_userinfo_and_plugin() {
        let proxy = explode_ss(
            "ss://chacha20-ietf-poly1305:p%40ss@[2001:db8::5]:443/?plugin=obfs-local%3Bobfs%3Dhttp%3Bobfs-host%3Dbing.com&udp=0",
        )
        .unwrap();
        assert_eq!(proxy.name, "SS Node");
        assert_eq!(proxy.server, "2001:db8::5");
        let node = ss_node(&proxy);
        assert_eq!(node.cipher, "chacha20-ietf-poly1305");
        assert_eq!(node.password, "p@ss");
        assert!(!node.udp);
        let plugin = node.plugin.as_ref().unwrap();
        assert_eq!(plugin.name, "obfs-local");
        assert_eq!(plugin.opt("obfs-host"), Some("bing.com"));
    }

    #[test]
    fn test_explode_ss_legacy_base64() {
        // base64("rc4-md5:secret@example.com:8388")
        let proxy = explode_ss("ss://cmM0LW1kNTpzZWNyZXRAZXhhbXBsZS5jb206ODM4OA#Legacy").unwrap();
        assert_eq!(proxy.server, "example.com");
        assert_eq!(proxy.port, 8388);
        assert_eq!(ss_node(&proxy).cipher, "rc4-md5");
        assert_eq!(ss_node(&proxy).password, "secret");
    }

    #[test]
    fn test_explode_ss_failures() {
        assert!(explode_ss("ss://garbage").is_none());
        assert!(explode_ss("ss://YWVzLTI1Ni1nY206cGFzc3dvcmQ=@1.1.1.1").is_none());
        assert!(explode_ss("ss://YWVzLTI1Ni1nY206cGFzc3dvcmQ=@1.1.1.1:0").is_none());
        assert!(explode_ss("ss://YWVzLTI1Ni1nY206cGFzc3dvcmQ=@1.1.1.1:70000").is_none());
    }
}
