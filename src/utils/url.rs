//! URL encoding/decoding utilities

/// Encodes a string using URL encoding
///
/// # Examples
/// ```
/// use linksub::utils::url::url_encode;
///
/// let encoded = url_encode("Hello World!");
/// assert_eq!(encoded, "Hello%20World%21");
/// ```
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Decodes a URL-encoded string
///
/// Malformed escapes are kept literally; if the decoded bytes are not valid
/// UTF-8 the original string is returned unchanged.
///
/// # Examples
/// ```
/// use linksub::utils::url::url_decode;
///
/// assert_eq!(url_decode("Hello%20World%21"), "Hello World!");
/// assert_eq!(url_decode("100%"), "100%");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}

/// Wraps an IPv6 literal in brackets for use in a URI authority.
pub fn wrap_ipv6(server: &str) -> String {
    if server.contains(':') && !server.starts_with('[') {
        format!("[{}]", server)
    } else {
        server.to_string()
    }
}

/// Removes the brackets around an IPv6 literal taken from a URI authority.
pub fn unwrap_ipv6(host: &str) -> &str {
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host)
}
