pub mod anytls;
pub mod common;
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

pub use common::{explode, extract_links};
