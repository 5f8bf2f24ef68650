//! V2Ray-style stream transports shared by VMess, VLESS and Trojan.

/// Transport of a node. Option groups only exist for the networks that use them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Tcp,
    Ws(WsOptions),
    Grpc(GrpcOptions),
    H2(H2Options),
    /// Any other network name (`kcp`, `quic`, `httpupgrade`, ...), carried through verbatim.
    Other(String),
}

impl Network {
    pub fn name(&self) -> &str {
        match self {
            Network::Tcp => "tcp",
            Network::Ws(_) => "ws",
            Network::Grpc(_) => "grpc",
            Network::H2(_) => "h2",
            Network::Other(name) => name,
        }
    }

    pub fn is_tcp(&self) -> bool {
        matches!(self, Network::Tcp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WsOptions {
    pub path: String,
    /// Value of the `Host` header; `None` leaves the header out entirely.
    pub host: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrpcOptions {
    pub service_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct H2Options {
    pub host: Vec<String>,
    pub path: String,
}

impl H2Options {
    pub fn first_host(&self) -> Option<&str> {
        self.host.first().map(String::as_str).filter(|h| !h.is_empty())
    }
}
