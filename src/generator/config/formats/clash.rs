use crate::generator::config::group::{
    group_members, AUTO_GROUP, FALLBACK_GROUP, FALLBACK_INTERVAL, SELECT_GROUP,
};
use crate::generator::config::ruleconvert::clash_rules;
use crate::generator::exports::clash::{
    is_clash_classic_supported, is_clash_meta_supported, proxy_to_clash as node_to_clash,
};
use crate::generator::yaml::{flow_obj, flow_val, to_block, Mapping, YamlValue};
use crate::models::{ConfigOptions, ProxiesStyle, Proxy};

const NAMESERVERS: &str = "[223.5.5.5, 119.29.29.29, 114.114.114.114]";

fn group(name: &str, group_type: &str, proxies: Vec<String>) -> Mapping {
    let mut map = Mapping::new();
    map.insert("name".to_string(), name.into());
    map.insert("type".to_string(), group_type.into());
    map.insert("proxies".to_string(), proxies.into());
    map
}

fn push_dns(lines: &mut Vec<String>) {
    lines.push("dns:".to_string());
    lines.push("    enable: true".to_string());
    lines.push("    ipv6: false".to_string());
    lines.push(format!("    default-nameserver: {}", NAMESERVERS));
    lines.push("    enhanced-mode: fake-ip".to_string());
    lines.push("    fake-ip-range: 198.18.0.1/16".to_string());
    lines.push("    use-hosts: true".to_string());
    lines.push("    respect-rules: true".to_string());
    lines.push(format!("    proxy-server-nameserver: {}", NAMESERVERS));
    lines.push(format!("    nameserver: {}", NAMESERVERS));
}

/// Convert proxies to a Clash configuration
///
/// Meta mode targets the mihomo core: it adds the Meta-only top-level keys and
/// accepts every protocol mihomo knows. Classic mode keeps only the protocols
/// the original Clash core supports; dropped nodes are left out of the groups
/// as well.
///
/// # Arguments
/// * `nodes` - List of proxy nodes to convert
/// * `options` - Ports, DNS and health-check settings
/// * `meta` - Whether to generate for Clash-Meta
pub fn proxy_to_clash(nodes: &[Proxy], options: &ConfigOptions, meta: bool) -> String {
    let supported = |node: &&Proxy| {
        if meta {
            is_clash_meta_supported(node.proxy_type())
        } else {
            is_clash_classic_supported(node.proxy_type())
        }
    };
    let (kept, mapped): (Vec<&Proxy>, Vec<Mapping>) = nodes
        .iter()
        .filter(supported)
        .filter_map(|node| node_to_clash(node).map(|map| (node, map)))
        .unzip();
    let names = group_members(kept);

    let mut lines = Vec::new();

    // General settings
    lines.push(format!("mixed-port: {}", options.http_port));
    lines.push(format!("allow-lan: {}", options.allow_lan));
    lines.push("bind-address: '*'".to_string());
    lines.push(format!("mode: {}", flow_val(&options.mode.as_str().into())));
    lines.push(format!(
        "log-level: {}",
        flow_val(&options.log_level.as_str().into())
    ));
    lines.push("external-controller: '127.0.0.1:9090'".to_string());
    if meta {
        lines.push("find-process-mode: strict".to_string());
    }
    lines.push("unified-delay: true".to_string());
    lines.push("tcp-concurrent: true".to_string());
    if meta {
        lines.push("global-client-fingerprint: chrome".to_string());
    }

    if options.enable_dns {
        push_dns(&mut lines);
    }

    // Proxies
    if mapped.is_empty() {
        lines.push("proxies: []".to_string());
    } else {
        lines.push("proxies:".to_string());
        match options.proxies_style {
            ProxiesStyle::Flow => {
                for map in &mapped {
                    lines.push(format!("    - {}", flow_obj(map)));
                }
            }
            ProxiesStyle::Block => {
                let seq = YamlValue::Seq(mapped.into_iter().map(YamlValue::Map).collect());
                lines.extend(to_block(&seq, 2).lines().map(str::to_string));
            }
        }
    }

    // Proxy groups
    let mut select_members = vec![AUTO_GROUP.to_string(), FALLBACK_GROUP.to_string()];
    select_members.extend(names.iter().cloned());
    let select = group(SELECT_GROUP, "select", select_members);

    let mut auto = group(AUTO_GROUP, "url-test", names.clone());
    auto.insert("url".to_string(), options.test_url.as_str().into());
    auto.insert("interval".to_string(), options.test_interval.into());

    let mut fallback = group(FALLBACK_GROUP, "fallback", names);
    fallback.insert("url".to_string(), options.test_url.as_str().into());
    fallback.insert("interval".to_string(), FALLBACK_INTERVAL.into());

    lines.push("proxy-groups:".to_string());
    for g in [&select, &auto, &fallback] {
        lines.push(format!("    - {}", flow_obj(g)));
    }

    // Rules
    lines.push("rules:".to_string());
    for rule in clash_rules(SELECT_GROUP) {
        lines.push(format!("    - '{}'", rule.replace('\'', "''")));
    }

    lines.join("\n") + "\n"
}

/// Clash-Meta (mihomo) configuration
pub fn proxy_to_clash_meta(nodes: &[Proxy], options: &ConfigOptions) -> String {
    proxy_to_clash(nodes, options, true)
}

/// Classic Clash configuration
pub fn proxy_to_clash_classic(nodes: &[Proxy], options: &ConfigOptions) -> String {
    proxy_to_clash(nodes, options, false)
}
