//! Record to share-link encoders, one module per protocol.
//!
//! Each `<protocol>_to_uri` returns `None` when handed a record of another
//! protocol. Dispatch lives in
//! [`proxy_to_uri`](crate::generator::config::formats::single::proxy_to_uri).

pub mod anytls;
pub mod clash;
pub mod hysteria;
pub mod hysteria2;
pub mod naive;
pub mod snell;
pub mod socks;
pub mod ss;
pub mod ssr;
pub mod trojan;
pub mod tuic;
pub mod vless;
pub mod vmess;
pub mod wireguard;

use url::form_urlencoded::Serializer;

use crate::models::proxy_node::{AuthNode, Network};
use crate::utils::url::{url_encode, wrap_ipv6};

/// `host:port` with IPv6 literals bracketed.
pub(crate) fn authority(server: &str, port: u16) -> String {
    format!("{}:{}", wrap_ipv6(server), port)
}

/// `#name` with the name percent-encoded.
pub(crate) fn fragment(name: &str) -> String {
    format!("#{}", url_encode(name))
}

/// Query string builder; values are form-urlencoded.
pub(crate) type Query = Serializer<'static, String>;

pub(crate) fn new_query() -> Query {
    Serializer::new(String::new())
}

/// Appends `path`/`host`/`serviceName` for the V2Ray-style transports.
pub(crate) fn append_transport(query: &mut Query, network: &Network) {
    match network {
        Network::Ws(ws) => {
            query.append_pair("path", &ws.path);
            if let Some(host) = ws.host.as_deref().filter(|h| !h.is_empty()) {
                query.append_pair("host", host);
            }
        }
        Network::Grpc(grpc) => {
            query.append_pair("serviceName", &grpc.service_name);
        }
        Network::H2(h2) => {
            query.append_pair("path", &h2.path);
            if let Some(host) = h2.first_host() {
                query.append_pair("host", host);
            }
        }
        Network::Tcp | Network::Other(_) => {}
    }
}

/// `user:pass@` when either credential is set, empty otherwise.
pub(crate) fn credentials(auth: &AuthNode) -> String {
    if !auth.has_credentials() {
        return String::new();
    }
    format!(
        "{}:{}@",
        url_encode(auth.username.as_deref().unwrap_or("")),
        url_encode(auth.password.as_deref().unwrap_or(""))
    )
}
