use log::debug;

use crate::models::Proxy;
use crate::utils::base64::base64_decode;

/// Explode a proxy link into a Proxy object
///
/// This function detects the type of proxy link by its scheme and calls the
/// appropriate parser. Unknown schemes and malformed links yield `None`.
pub fn explode(link: &str) -> Option<Proxy> {
    // Trim the link
    let link = link.trim();

    // Check for empty link
    if link.is_empty() {
        return None;
    }

    // Detect link type and call appropriate parser
    let proxy = if link.starts_with("vmess://") {
        super::vmess::explode_vmess(link)
    } else if link.starts_with("vless://") {
        super::vless::explode_vless(link)
    } else if link.starts_with("ss://") {
        super::ss::explode_ss(link)
    } else if link.starts_with("ssr://") {
        super::ssr::explode_ssr(link)
    } else if link.starts_with("trojan://") {
        super::trojan::explode_trojan(link)
    } else if link.starts_with("hysteria2://") || link.starts_with("hy2://") {
        super::hysteria2::explode_hysteria2(link)
    } else if link.starts_with("hysteria://") {
        super::hysteria::explode_hysteria(link)
    } else if link.starts_with("tuic://") {
        super::tuic::explode_tuic(link)
    } else if link.starts_with("wireguard://") || link.starts_with("wg://") {
        super::wireguard::explode_wireguard(link)
    } else if link.starts_with("socks5://") {
        super::socks::explode_socks(link)
    } else if link.starts_with("snell://") {
        super::snell::explode_snell(link)
    } else if link.starts_with("naive+https://") {
        super::naive::explode_naive(link)
    } else if link.starts_with("anytls://") {
        super::anytls::explode_anytls(link)
    } else {
        debug!("Unsupported link scheme: {}", link);
        return None;
    };

    if proxy.is_none() {
        debug!("Failed to parse link: {}", link);
    }
    proxy
}

/// Split raw subscription text into individual links
///
/// Text without any `://` is treated as a Base64 subscription and replaced by
/// its decoded form when that decodes to something containing links.
pub fn extract_links(input: &str) -> Vec<String> {
    let mut content = input.trim().to_string();

    if !content.contains("://") {
        if let Some(decoded) = base64_decode(&content) {
            if decoded.contains("://") {
                content = decoded;
            }
        }
    }

    content
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
