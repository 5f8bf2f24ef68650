/// Optional username/password pair used by SOCKS5, NaiveProxy and AnyTLS.
///
/// Empty credentials are stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthNode {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AuthNode {
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }
}
