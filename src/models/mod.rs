//! Core data models for the application
//!
//! This module contains the primary data structures used throughout the application,
//! separated from the logic that operates on them.
//!
//! # Usage
//!
//! ```rust
//! use linksub::models::proxy_node::{ProxyNode, ShadowsocksNode};
//! use linksub::{Proxy, ProxyType};
//!
//! let proxy = Proxy::new(
//!     "Tokyo",
//!     "example.com",
//!     8388,
//!     ProxyNode::Shadowsocks(ShadowsocksNode::new("aes-256-gcm", "secret")),
//! );
//! assert_eq!(proxy.proxy_type(), ProxyType::Shadowsocks);
//! assert_eq!(proxy.identity(), "secret");
//! ```
//!
//! Protocol fields live in the [`ProxyNode`](proxy_node::ProxyNode) variants, so a
//! generator matching on a node sees exactly the fields that protocol can carry.

pub mod configs;
pub mod proxy;
pub mod proxy_node;

pub use configs::{ConfigOptions, ProxiesStyle};
pub use proxy::*;
pub use proxy_node::ProxyNode;
