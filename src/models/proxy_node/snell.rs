#[derive(Debug, Clone, PartialEq)]
pub struct SnellNode {
    pub psk: String,
    pub version: u32,
    pub obfs: Option<String>,
    /// Only meaningful together with `obfs`.
    pub obfs_host: Option<String>,
}
