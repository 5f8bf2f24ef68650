use super::auth::AuthNode;
use super::quic::{Hysteria2Node, HysteriaNode, TuicNode};
use super::shadowsocks::{ShadowsocksNode, ShadowsocksRNode};
use super::snell::SnellNode;
use super::v2ray::{TrojanNode, VMessNode, VlessNode};
use super::wireguard::WireGuardNode;
use crate::models::ProxyType;

/// Protocol-specific part of a proxy record.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyNode {
    VMess(VMessNode),
    Vless(VlessNode),
    Shadowsocks(ShadowsocksNode),
    ShadowsocksR(ShadowsocksRNode),
    Trojan(TrojanNode),
    Hysteria(HysteriaNode),
    Hysteria2(Hysteria2Node),
    Tuic(TuicNode),
    WireGuard(WireGuardNode),
    Socks5(AuthNode),
    Snell(SnellNode),
    Naive(AuthNode),
    AnyTls(AuthNode),
}

impl ProxyNode {
    pub fn proxy_type(&self) -> ProxyType {
        match self {
            ProxyNode::VMess(_) => ProxyType::VMess,
            ProxyNode::Vless(_) => ProxyType::Vless,
            ProxyNode::Shadowsocks(_) => ProxyType::Shadowsocks,
            ProxyNode::ShadowsocksR(_) => ProxyType::ShadowsocksR,
            ProxyNode::Trojan(_) => ProxyType::Trojan,
            ProxyNode::Hysteria(_) => ProxyType::Hysteria,
            ProxyNode::Hysteria2(_) => ProxyType::Hysteria2,
            ProxyNode::Tuic(_) => ProxyType::Tuic,
            ProxyNode::WireGuard(_) => ProxyType::WireGuard,
            ProxyNode::Socks5(_) => ProxyType::Socks5,
            ProxyNode::Snell(_) => ProxyType::Snell,
            ProxyNode::Naive(_) => ProxyType::Naive,
            ProxyNode::AnyTls(_) => ProxyType::AnyTls,
        }
    }

    pub fn uuid(&self) -> Option<&str> {
        match self {
            ProxyNode::VMess(n) => Some(&n.uuid),
            ProxyNode::Vless(n) => Some(&n.uuid),
            ProxyNode::Tuic(n) => Some(&n.uuid),
            _ => None,
        }
    }

    pub fn password(&self) -> Option<&str> {
        match self {
            ProxyNode::Shadowsocks(n) => Some(&n.password),
            ProxyNode::ShadowsocksR(n) => Some(&n.password),
            ProxyNode::Trojan(n) => Some(&n.password),
            ProxyNode::Hysteria2(n) => Some(&n.password),
            ProxyNode::Tuic(n) => n.password.as_deref(),
            ProxyNode::Socks5(n) | ProxyNode::Naive(n) | ProxyNode::AnyTls(n) => {
                n.password.as_deref()
            }
            ProxyNode::VMess(_)
            | ProxyNode::Vless(_)
            | ProxyNode::Hysteria(_)
            | ProxyNode::WireGuard(_)
            | ProxyNode::Snell(_) => None,
        }
    }
}
