/// SIP003 plugin, e.g. `obfs-local;obfs=http;obfs-host=example.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsPlugin {
    pub name: String,
    /// Options in link order. A bare flag such as `tls` has no value.
    pub opts: Vec<(String, Option<String>)>,
}

impl SsPlugin {
    /// Parses the value of the `plugin` query parameter.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split(';');
        let name = parts.next()?.trim();
        if name.is_empty() {
            return None;
        }
        let opts = parts
            .filter(|opt| !opt.is_empty())
            .map(|opt| match opt.split_once('=') {
                Some((k, v)) => (k.to_string(), Some(v.to_string())),
                None => (opt.to_string(), None),
            })
            .collect();
        Some(SsPlugin {
            name: name.to_string(),
            opts,
        })
    }

    pub fn opt(&self, key: &str) -> Option<&str> {
        self.opts
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.opts.iter().any(|(k, _)| k == key)
    }
}

impl std::fmt::Display for SsPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;
        for (key, value) in &self.opts {
            match value {
                Some(v) => write!(f, ";{}={}", key, v)?,
                None => write!(f, ";{}", key)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShadowsocksNode {
    pub cipher: String,
    pub password: String,
    pub plugin: Option<SsPlugin>,
    pub udp: bool,
}

impl ShadowsocksNode {
    pub fn new(cipher: impl Into<String>, password: impl Into<String>) -> Self {
        ShadowsocksNode {
            cipher: cipher.into(),
            password: password.into(),
            plugin: None,
            udp: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShadowsocksRNode {
    pub cipher: String,
    pub password: String,
    pub protocol: String,
    pub obfs: String,
    pub protocol_param: Option<String>,
    pub obfs_param: Option<String>,
}
