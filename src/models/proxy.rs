//! Proxy model definitions
//!
//! Contains the canonical record every codec produces and every generator reads.

use std::fmt;

use super::proxy_node::combined::ProxyNode;

/// Represents the type of a proxy.
/// This is the canonical enum used for proxy type identification across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyType {
    VMess,
    Vless,
    Shadowsocks,
    ShadowsocksR,
    Trojan,
    Hysteria,
    Hysteria2,
    Tuic,
    WireGuard,
    Socks5,
    Snell,
    Naive,
    AnyTls,
}

impl ProxyType {
    pub const ALL: [ProxyType; 13] = [
        ProxyType::VMess,
        ProxyType::Vless,
        ProxyType::Shadowsocks,
        ProxyType::ShadowsocksR,
        ProxyType::Trojan,
        ProxyType::Hysteria,
        ProxyType::Hysteria2,
        ProxyType::Tuic,
        ProxyType::WireGuard,
        ProxyType::Socks5,
        ProxyType::Snell,
        ProxyType::Naive,
        ProxyType::AnyTls,
    ];

    /// Short tag used in Clash `type` fields and in node fingerprints.
    pub fn tag(self) -> &'static str {
        match self {
            ProxyType::VMess => "vmess",
            ProxyType::Vless => "vless",
            ProxyType::Shadowsocks => "ss",
            ProxyType::ShadowsocksR => "ssr",
            ProxyType::Trojan => "trojan",
            ProxyType::Hysteria => "hysteria",
            ProxyType::Hysteria2 => "hysteria2",
            ProxyType::Tuic => "tuic",
            ProxyType::WireGuard => "wireguard",
            ProxyType::Socks5 => "socks5",
            ProxyType::Snell => "snell",
            ProxyType::Naive => "naive",
            ProxyType::AnyTls => "anytls",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        ProxyType::ALL.into_iter().find(|t| t.tag() == tag)
    }

    /// Name given to a node whose link carries no remark.
    pub fn default_name(self) -> &'static str {
        match self {
            ProxyType::VMess => "VMess Node",
            ProxyType::Vless => "VLESS Node",
            ProxyType::Shadowsocks => "SS Node",
            ProxyType::ShadowsocksR => "SSR Node",
            ProxyType::Trojan => "Trojan Node",
            ProxyType::Hysteria => "Hysteria Node",
            ProxyType::Hysteria2 => "Hysteria2 Node",
            ProxyType::Tuic => "TUIC Node",
            ProxyType::WireGuard => "WireGuard Node",
            ProxyType::Socks5 => "SOCKS5 Node",
            ProxyType::Snell => "Snell Node",
            ProxyType::Naive => "NaiveProxy Node",
            ProxyType::AnyTls => "AnyTLS Node",
        }
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Represents a proxy configuration.
///
/// `server` never carries IPv6 brackets; codecs add them when writing a URI.
#[derive(Debug, Clone, PartialEq)]
pub struct Proxy {
    pub name: String,
    pub server: String,
    pub port: u16,
    pub node: ProxyNode,
}

/// Key used to detect duplicate nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub proxy_type: ProxyType,
    pub server: String,
    pub port: u16,
    pub identity: String,
}

impl Proxy {
    pub fn new(
        name: impl Into<String>,
        server: impl Into<String>,
        port: u16,
        node: ProxyNode,
    ) -> Self {
        Proxy {
            name: name.into(),
            server: server.into(),
            port,
            node,
        }
    }

    pub fn proxy_type(&self) -> ProxyType {
        self.node.proxy_type()
    }

    /// The uuid when the protocol has one, otherwise the password, otherwise empty.
    pub fn identity(&self) -> &str {
        self.node
            .uuid()
            .or_else(|| self.node.password())
            .unwrap_or("")
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint {
            proxy_type: self.proxy_type(),
            server: self.server.clone(),
            port: self.port,
            identity: self.identity().to_string(),
        }
    }

    /// Display label, falling back to `server:port` for unnamed nodes.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("{}:{}", self.server, self.port)
        } else {
            self.name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::proxy_node::{AuthNode, ShadowsocksNode};

    #[test]
    fn test_tag_round_trip() {
        for t in ProxyType::ALL {
            assert_eq!(ProxyType::from_tag(t.tag()), Some(t));
        }
        assert_eq!(ProxyType::from_tag("http"), None);
    }

    #[test]
    fn test_identity_prefers_password_without_uuid() {
        let ss = Proxy::new(
            "a",
            "1.1.1.1",
            8388,
            ProxyNode::Shadowsocks(ShadowsocksNode::new("aes-256-gcm", "secret")),
        );
        assert_eq!(ss.identity(), "secret");

        let socks = Proxy::new("b", "1.1.1.1", 1080, ProxyNode::Socks5(AuthNode::default()));
        assert_eq!(socks.identity(), "");
        assert_eq!(socks.fingerprint().proxy_type, ProxyType::Socks5);
    }

    #[test]
    fn test_display_name_fallback() {
        let node = Proxy::new("", "example.com", 443, ProxyNode::AnyTls(AuthNode::default()));
        assert_eq!(node.display_name(), "example.com:443");
    }
}
