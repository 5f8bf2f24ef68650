//! QUIC-based protocols.

#[derive(Debug, Clone, PartialEq)]
pub struct HysteriaNode {
    pub auth_str: String,
    /// Upload bandwidth as written in the link, `100` when absent.
    pub up: String,
    pub down: String,
    pub sni: Option<String>,
    pub insecure: bool,
    pub protocol: String,
    pub obfs: Option<String>,
    pub alpn: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hysteria2Node {
    pub password: String,
    pub sni: Option<String>,
    pub insecure: bool,
    pub obfs: Option<String>,
    pub obfs_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TuicNode {
    pub uuid: String,
    pub password: Option<String>,
    pub sni: Option<String>,
    pub insecure: bool,
    pub congestion_controller: String,
    pub udp_relay_mode: String,
    pub alpn: Option<Vec<String>>,
}
