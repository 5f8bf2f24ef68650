use crate::generator::config::group::{AUTO_GROUP, SELECT_GROUP};
use crate::generator::config::ruleconvert::surge_rules;
use crate::models::proxy_node::{Network, WireGuardNode};
use crate::models::{ConfigOptions, Proxy, ProxyNode};

const SKIP_PROXY: &str =
    "127.0.0.1, 192.168.0.0/16, 10.0.0.0/8, 172.16.0.0/12, 100.64.0.0/10, localhost, *.local";

fn push_ws(line: &mut String, network: &Network) {
    if let Network::Ws(ws) = network {
        line.push_str(&format!(", ws=true, ws-path={}", ws.path));
        if let Some(host) = ws.host.as_deref().filter(|h| !h.is_empty()) {
            line.push_str(&format!(", ws-headers=Host:{}", host));
        }
    }
}

/// The `[Proxy]` line for a node, or `None` when Surge has no such proxy type
fn surge_proxy_line(node: &Proxy) -> Option<String> {
    let name = &node.name;
    let mut line = match &node.node {
        ProxyNode::Shadowsocks(ss) => {
            let mut line = format!(
                "{} = ss, {}, {}, encrypt-method={}, password={}",
                name, node.server, node.port, ss.cipher, ss.password
            );
            if let Some(plugin) = &ss.plugin {
                if let Some(obfs) = plugin.opt("obfs") {
                    line.push_str(&format!(", obfs={}", obfs));
                    if let Some(host) = plugin.opt("obfs-host") {
                        line.push_str(&format!(", obfs-host={}", host));
                    }
                }
            }
            if ss.udp {
                line.push_str(", udp-relay=true");
            }
            line
        }
        ProxyNode::VMess(vmess) => {
            let mut line = format!(
                "{} = vmess, {}, {}, username={}",
                name, node.server, node.port, vmess.uuid
            );
            if vmess.tls {
                line.push_str(", tls=true");
            }
            push_ws(&mut line, &vmess.network);
            if let Some(sni) = &vmess.servername {
                line.push_str(&format!(", sni={}", sni));
            }
            line.push_str(", skip-cert-verify=true");
            line
        }
        ProxyNode::Vless(vless) => {
            let mut line = format!(
                "{} = vless, {}, {}, username={}",
                name, node.server, node.port, vless.uuid
            );
            if vless.tls() {
                line.push_str(", tls=true");
            }
            push_ws(&mut line, &vless.network);
            if let Some(sni) = vless.servername.as_deref().filter(|s| !s.is_empty()) {
                line.push_str(&format!(", sni={}", sni));
            }
            if let Some(flow) = &vless.flow {
                line.push_str(&format!(", flow={}", flow));
            }
            if let Some(reality) = vless.reality() {
                line.push_str(&format!(
                    ", client-fingerprint={}",
                    reality.client_fingerprint
                ));
            }
            line.push_str(", skip-cert-verify=true");
            line
        }
        ProxyNode::Trojan(trojan) => {
            let mut line = format!(
                "{} = trojan, {}, {}, password={}",
                name, node.server, node.port, trojan.password
            );
            if let Some(sni) = &trojan.sni {
                line.push_str(&format!(", sni={}", sni));
            }
            line.push_str(", skip-cert-verify=true");
            push_ws(&mut line, &trojan.network);
            line
        }
        ProxyNode::Hysteria2(hy2) => {
            let mut line = format!(
                "{} = hysteria2, {}, {}, password={}",
                name, node.server, node.port, hy2.password
            );
            if let Some(sni) = &hy2.sni {
                line.push_str(&format!(", sni={}", sni));
            }
            line.push_str(", skip-cert-verify=true");
            line
        }
        ProxyNode::Tuic(tuic) => {
            let mut line = format!(
                "{} = tuic, {}, {}, token={}",
                name, node.server, node.port, tuic.uuid
            );
            if let Some(sni) = &tuic.sni {
                line.push_str(&format!(", sni={}", sni));
            }
            if let Some(alpn) = tuic.alpn.as_ref().and_then(|a| a.first()) {
                line.push_str(&format!(", alpn={}", alpn));
            }
            line.push_str(", skip-cert-verify=true");
            line
        }
        ProxyNode::WireGuard(_) => format!("{} = wireguard, section-name={}", name, name),
        ProxyNode::Socks5(auth) => {
            let mut line = format!("{} = socks5, {}, {}", name, node.server, node.port);
            if let Some(username) = &auth.username {
                line.push_str(&format!(
                    ", username={}, password={}",
                    username,
                    auth.password.as_deref().unwrap_or("")
                ));
            }
            line
        }
        ProxyNode::Snell(snell) => {
            let mut line = format!(
                "{} = snell, {}, {}, psk={}, version={}",
                name, node.server, node.port, snell.psk, snell.version
            );
            if let Some(obfs) = &snell.obfs {
                line.push_str(&format!(", obfs={}", obfs));
                if let Some(host) = &snell.obfs_host {
                    line.push_str(&format!(", obfs-host={}", host));
                }
            }
            line
        }
        ProxyNode::ShadowsocksR(_)
        | ProxyNode::Hysteria(_)
        | ProxyNode::Naive(_)
        | ProxyNode::AnyTls(_) => return None,
    };
    line.push('\n');
    Some(line)
}

/// `[WireGuard <name>]` section referenced by a wireguard proxy line
fn wireguard_section(node: &Proxy, wg: &WireGuardNode) -> String {
    let mut section = format!("[WireGuard {}]\n", node.name);
    section.push_str(&format!("private-key = {}\n", wg.private_key));
    section.push_str(&format!("self-ip = {}\n", wg.ip.split('/').next().unwrap_or(&wg.ip)));
    if let Some(dns) = &wg.dns {
        section.push_str(&format!("dns-server = {}\n", dns.join(", ")));
    }
    section.push_str(&format!("mtu = {}\n", wg.mtu));
    section.push_str(&format!(
        "peer = (public-key = {}, allowed-ips = \"0.0.0.0/0, ::/0\", endpoint = {}:{})\n",
        wg.public_key,
        crate::utils::url::wrap_ipv6(&node.server),
        node.port
    ));
    section
}

/// Convert proxies to Surge format
///
/// Nodes Surge cannot express are kept as comments in `[Proxy]` and left out
/// of the groups.
///
/// # Arguments
/// * `nodes` - List of proxy nodes to convert
/// * `options` - Log level, LAN access and health-check settings
pub fn proxy_to_surge(nodes: &[Proxy], options: &ConfigOptions) -> String {
    let mut output = String::new();

    output.push_str("[General]\n");
    output.push_str(&format!("loglevel = {}\n", options.log_level));
    output.push_str(&format!("skip-proxy = {}\n", SKIP_PROXY));
    output.push_str(&format!("internet-test-url = {}\n", options.test_url));
    output.push_str(&format!("proxy-test-url = {}\n", options.test_url));
    output.push_str("test-timeout = 5\n");
    if options.allow_lan {
        output.push_str("allow-wifi-access = true\n");
    }
    output.push('\n');

    // Process proxies
    let mut names = Vec::new();
    let mut wireguard_sections = String::new();
    output.push_str("[Proxy]\n");
    output.push_str("DIRECT = direct\n");
    for node in nodes {
        match surge_proxy_line(node) {
            Some(line) => {
                output.push_str(&line);
                names.push(node.name.as_str());
                if let ProxyNode::WireGuard(wg) = &node.node {
                    wireguard_sections.push('\n');
                    wireguard_sections.push_str(&wireguard_section(node, wg));
                }
            }
            None => output.push_str(&format!(
                "# {} = {} (unsupported)\n",
                node.name,
                node.proxy_type()
            )),
        }
    }
    output.push('\n');

    // Process groups
    let mut select = vec![AUTO_GROUP, "DIRECT"];
    select.extend(names.iter().copied());
    let mut url_test = names.clone();
    let url = format!("url={}", options.test_url);
    let interval = format!("interval={}", options.test_interval);
    url_test.push(&url);
    url_test.push(&interval);

    output.push_str("[Proxy Group]\n");
    output.push_str(&format!("{} = select, {}\n", SELECT_GROUP, select.join(", ")));
    output.push_str(&format!("{} = url-test, {}\n", AUTO_GROUP, url_test.join(", ")));
    output.push('\n');

    output.push_str("[Rule]\n");
    for rule in surge_rules(SELECT_GROUP) {
        output.push_str(&rule);
        output.push('\n');
    }

    output.push_str(&wireguard_sections);
    output
}
