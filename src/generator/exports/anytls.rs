use super::{authority, credentials, fragment};
use crate::models::{Proxy, ProxyNode};

/// Convert an AnyTLS node to an `anytls://` link
pub fn anytls_to_uri(proxy: &Proxy) -> Option<String> {
    let ProxyNode::AnyTls(auth) = &proxy.node else {
        return None;
    };

    Some(format!(
        "anytls://{}{}{}",
        credentials(auth),
        authority(&proxy.server, proxy.port),
        fragment(&proxy.name)
    ))
}
