//! Authority/query/fragment split shared by the URL-shaped share links.

use log::debug;
use url::Url;

use crate::utils::url::{unwrap_ipv6, url_decode};

/// A share link broken into the pieces the codecs read.
///
/// `username`, `password` and `name` are percent-decoded, `server` has no
/// IPv6 brackets. Query values keep link order; lookups return the first one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UriParts {
    pub server: String,
    pub port: Option<u16>,
    pub username: String,
    pub password: Option<String>,
    pub params: Vec<(String, String)>,
    pub name: String,
}

impl UriParts {
    /// Parses `scheme://[user[:pass]@]host[:port][/path][?query][#name]`.
    ///
    /// Returns `None` when the link is not a URL, has no host, or carries an
    /// explicit port of 0.
    pub fn parse(link: &str) -> Option<Self> {
        let url = match Url::parse(link) {
            Ok(url) => url,
            Err(e) => {
                debug!("Invalid link URL '{}': {}", link, e);
                return None;
            }
        };

        let server = unwrap_ipv6(url.host_str().unwrap_or("")).to_string();
        if server.is_empty() {
            debug!("Link has no host: {}", link);
            return None;
        }

        let port = url.port();
        if port == Some(0) {
            debug!("Link has port 0: {}", link);
            return None;
        }

        let params = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Some(UriParts {
            server,
            port,
            username: url_decode(url.username()),
            password: url.password().map(url_decode),
            params,
            name: url.fragment().map(url_decode).unwrap_or_default(),
        })
    }

    /// First value of a query parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value of a query parameter, treating an empty value as absent.
    pub fn get_nonempty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn port_or(&self, default: u16) -> u16 {
        self.port.unwrap_or(default)
    }

    pub fn name_or(&self, default: &str) -> String {
        if self.name.is_empty() {
            default.to_string()
        } else {
            self.name.clone()
        }
    }

    pub fn password_nonempty(&self) -> Option<String> {
        self.password.clone().filter(|p| !p.is_empty())
    }

    pub fn username_nonempty(&self) -> Option<String> {
        Some(self.username.clone()).filter(|u| !u.is_empty())
    }
}
