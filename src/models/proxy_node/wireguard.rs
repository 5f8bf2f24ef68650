#[derive(Debug, Clone, PartialEq)]
pub struct WireGuardNode {
    pub private_key: String,
    pub public_key: String,
    /// Local tunnel address, `10.0.0.2` when absent.
    pub ip: String,
    pub mtu: u32,
    pub reserved: Option<String>,
    pub dns: Option<Vec<String>>,
}
