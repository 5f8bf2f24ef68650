use crate::models::{Proxy, ProxyNode, ProxyType};
use crate::parser::explodes::socks::auth_from_parts;
use crate::parser::uri::UriParts;

/// Parse an AnyTLS link into a Proxy object
pub fn explode_anytls(anytls: &str) -> Option<Proxy> {
    let parts = UriParts::parse(anytls)?;

    Some(Proxy::new(
        parts.name_or(ProxyType::AnyTls.default_name()),
        parts.server.clone(),
        parts.port_or(443),
        ProxyNode::AnyTls(auth_from_parts(&parts)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::proxy_node::AuthNode;

    #[test]
    fn test_explode_anytls() {
        let proxy = explode_anytls("anytls://:token@[2001:db8::7]:8443").unwrap();
        assert_eq!(proxy.name, "AnyTLS Node");
        assert_eq!(proxy.server, "2001:db8::7");
        assert_eq!(proxy.port, 8443);
        assert_eq!(
            proxy.node,
            ProxyNode::AnyTls(AuthNode {
                username: None,
                password: Some("token".to_string()),
            })
        );
    }
}
