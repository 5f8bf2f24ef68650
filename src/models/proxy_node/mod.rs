//! Per-protocol node settings carried by [`Proxy`](crate::models::Proxy).

pub mod auth;
pub mod combined;
pub mod quic;
pub mod shadowsocks;
pub mod snell;
pub mod transport;
pub mod v2ray;
pub mod wireguard;

pub use auth::AuthNode;
pub use combined::ProxyNode;
pub use quic::{Hysteria2Node, HysteriaNode, TuicNode};
pub use shadowsocks::{ShadowsocksNode, ShadowsocksRNode, SsPlugin};
pub use snell::SnellNode;
pub use transport::{GrpcOptions, H2Options, Network, WsOptions};
pub use v2ray::{RealityOptions, TrojanNode, VMessNode, VlessNode, VlessSecurity};
pub use wireguard::WireGuardNode;
