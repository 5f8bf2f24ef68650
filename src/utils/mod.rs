pub mod base64;
pub mod url;

// Re-export common utilities
pub use base64::{base64_decode, base64_encode, url_safe_base64_encode};
pub use url::{unwrap_ipv6, url_decode, url_encode, wrap_ipv6};
