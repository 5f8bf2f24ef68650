//! Proxy group names shared by every generator
//!
//! Selector, url-test and fallback groups reference each other by name, so
//! all formats take the names from here.

use crate::Proxy;

/// Manual selection group; also the target of proxied rules.
pub const SELECT_GROUP: &str = "🚀 Node Select";
/// Latency-based automatic selection.
pub const AUTO_GROUP: &str = "♻️ Auto Select";
pub const FALLBACK_GROUP: &str = "🔯 Fallback";

/// Health-check interval of the fallback group, in seconds.
pub const FALLBACK_INTERVAL: u32 = 7200;

/// Names of the nodes in the order they appear in the config
pub fn group_members<'a, I>(nodes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Proxy>,
{
    nodes.into_iter().map(|node| node.name.clone()).collect()
}
