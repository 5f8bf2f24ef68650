pub mod clash;
pub mod singbox;
pub mod single;
pub mod ss_sub;
pub mod surge;

// Re-export all format converters
pub use clash::{proxy_to_clash, proxy_to_clash_classic, proxy_to_clash_meta};
pub use singbox::proxy_to_singbox;
pub use single::{proxy_to_single, proxy_to_uri};
pub use ss_sub::proxy_to_ss_sub;
pub use surge::proxy_to_surge;
