use super::{authority, credentials, fragment};
use crate::models::{Proxy, ProxyNode};

/// Convert a NaiveProxy node to a `naive+https://` link
pub fn naive_to_uri(proxy: &Proxy) -> Option<String> {
    let ProxyNode::Naive(auth) = &proxy.node else {
        return None;
    };

    Some(format!(
        "naive+https://{}{}{}",
        credentials(auth),
        authority(&proxy.server, proxy.port),
        fragment(&proxy.name)
    ))
}
