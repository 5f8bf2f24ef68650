use super::single::proxy_to_single;
use crate::models::{ConfigOptions, Proxy};
use crate::utils::base64::base64_encode;

/// Convert proxies to a Base64 subscription
///
/// The body is the raw link list, Base64-encoded with the standard alphabet.
pub fn proxy_to_ss_sub(nodes: &[Proxy], options: &ConfigOptions) -> String {
    base64_encode(&proxy_to_single(nodes, options))
}
