use super::transport::Network;

#[derive(Debug, Clone, PartialEq)]
pub struct VMessNode {
    pub uuid: String,
    pub alter_id: u32,
    pub cipher: String,
    pub network: Network,
    pub tls: bool,
    pub servername: Option<String>,
}

impl VMessNode {
    pub fn new(uuid: impl Into<String>) -> Self {
        VMessNode {
            uuid: uuid.into(),
            alter_id: 0,
            cipher: "auto".to_string(),
            network: Network::Tcp,
            tls: false,
            servername: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VlessSecurity {
    #[default]
    None,
    Tls,
    Reality(RealityOptions),
}

/// Reality handshake parameters together with the uTLS fingerprint it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealityOptions {
    pub public_key: String,
    pub short_id: String,
    pub client_fingerprint: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VlessNode {
    pub uuid: String,
    pub network: Network,
    pub security: VlessSecurity,
    pub servername: Option<String>,
    pub flow: Option<String>,
}

impl VlessNode {
    pub fn new(uuid: impl Into<String>) -> Self {
        VlessNode {
            uuid: uuid.into(),
            network: Network::Tcp,
            security: VlessSecurity::None,
            servername: None,
            flow: None,
        }
    }

    pub fn tls(&self) -> bool {
        !matches!(self.security, VlessSecurity::None)
    }

    pub fn reality(&self) -> Option<&RealityOptions> {
        match &self.security {
            VlessSecurity::Reality(opts) => Some(opts),
            _ => None,
        }
    }
}

/// Trojan only knows `tcp`, `ws` and `grpc`; anything else is read as `tcp`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrojanNode {
    pub password: String,
    pub sni: Option<String>,
    pub network: Network,
    pub client_fingerprint: Option<String>,
}

impl TrojanNode {
    pub fn new(password: impl Into<String>) -> Self {
        TrojanNode {
            password: password.into(),
            sni: None,
            network: Network::Tcp,
            client_fingerprint: None,
        }
    }
}
