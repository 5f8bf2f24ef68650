use crate::models::proxy_node::AuthNode;
use crate::models::{Proxy, ProxyNode, ProxyType};
use crate::parser::uri::UriParts;

/// Optional `user:pass@` credentials shared by SOCKS5, NaiveProxy and AnyTLS links.
pub(crate) fn auth_from_parts(parts: &UriParts) -> AuthNode {
    AuthNode {
        username: parts.username_nonempty(),
        password: parts.password_nonempty(),
    }
}

/// Parse a SOCKS5 link into a Proxy object
pub fn explode_socks(socks: &str) -> Option<Proxy> {
    let parts = UriParts::parse(socks)?;

    Some(Proxy::new(
        parts.name_or(ProxyType::Socks5.default_name()),
        parts.server.clone(),
        parts.port_or(1080),
        ProxyNode::Socks5(auth_from_parts(&parts)),
    ))
}
