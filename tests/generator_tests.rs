use linksub::models::ProxiesStyle;
use linksub::{convert_links, formats, generate, ConfigOptions, ConvertError};
use serde_yaml::Value as Yaml;

const LINKS: &str = "\
ss://YWVzLTI1Ni1nY206cGFzc3dvcmQ=@1.1.1.1:8888#My_SS_Node
vless://b831381d-6324-4d53-ad4f-8cda48b30811@1.2.3.4:443?type=tcp&security=reality&pbk=ab%3Acd&sid=12%3A34&sni=www.example.com#Reality
trojan://pw@t.example.com:443?type=ws&path=%2Fws&host=cdn.example.com#Trojan WS
naive+https://u:p@n.example.com#Naive
hy2://letmein@h2.example.com#Hy2";

fn parse_yaml(text: &str) -> Yaml {
    serde_yaml::from_str(text).expect("generated YAML parses")
}

fn names(seq: &Yaml) -> Vec<String> {
    seq.as_sequence()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_clash_meta_reality_quoting() {
    let result = convert_links(LINKS, "clash-meta", &ConfigOptions::default()).unwrap();
    assert!(result
        .output
        .contains("reality-opts: { public-key: 'ab:cd', short-id: '12:34' }"));
    assert!(result.output.contains("global-client-fingerprint: chrome"));

    let doc = parse_yaml(&result.output);
    let proxies = doc["proxies"].as_sequence().unwrap();
    // Naive is dropped, everything else is kept
    assert_eq!(proxies.len(), 4);
    assert_eq!(proxies[0]["server"].as_str(), Some("1.1.1.1"));
    assert_eq!(proxies[1]["reality-opts"]["public-key"].as_str(), Some("ab:cd"));
    assert_eq!(proxies[2]["ws-opts"]["path"].as_str(), Some("/ws"));
    assert_eq!(doc["mixed-port"].as_u64(), Some(7890));

    let groups = doc["proxy-groups"].as_sequence().unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(
        names(&groups[1]["proxies"]),
        vec!["My_SS_Node", "Reality", "Trojan WS", "Hy2"]
    );
    assert_eq!(groups[2]["interval"].as_u64(), Some(7200));
    let rules = names(&doc["rules"]);
    assert_eq!(rules.last().map(String::as_str), Some("MATCH,🚀 Node Select"));
}

#[test]
fn test_clash_classic_drops_meta_only_nodes() {
    let result = convert_links(LINKS, "clash-yaml", &ConfigOptions::default()).unwrap();
    assert!(!result.output.contains("find-process-mode"));

    let doc = parse_yaml(&result.output);
    assert_eq!(doc["proxies"].as_sequence().unwrap().len(), 2);
    assert_eq!(
        names(&doc["proxy-groups"][0]["proxies"]),
        vec!["♻️ Auto Select", "🔯 Fallback", "My_SS_Node", "Trojan WS"]
    );
}

#[test]
fn test_clash_block_style_parses() {
    let options = ConfigOptions {
        proxies_style: ProxiesStyle::Block,
        enable_dns: false,
        ..Default::default()
    };
    let output = generate_for(LINKS, "clash-meta", &options);
    assert!(!output.contains("dns:"));
    assert!(output.contains("    - name: My_SS_Node\n"));

    let doc = parse_yaml(&output);
    let proxies = doc["proxies"].as_sequence().unwrap();
    assert_eq!(proxies.len(), 4);
    assert_eq!(proxies[1]["reality-opts"]["short-id"].as_str(), Some("12:34"));
    assert_eq!(proxies[1]["tls"].as_bool(), Some(true));
}

fn generate_for(links: &str, key: &str, options: &ConfigOptions) -> String {
    convert_links(links, key, options).unwrap().output
}

#[test]
fn test_empty_input_is_valid_everywhere() {
    let options = ConfigOptions::default();
    for format in formats() {
        let output = generate(format.key, &[], &options).unwrap();
        match format.key {
            "clash-yaml" | "clash-meta" => {
                let doc = parse_yaml(&output);
                assert_eq!(doc["proxies"].as_sequence().map(Vec::len), Some(0));
            }
            "sing-box" => {
                let json: serde_json::Value = serde_json::from_str(&output).unwrap();
                assert!(json["outbounds"].is_array());
            }
            "surge" => assert!(output.contains("[Rule]")),
            _ => assert_eq!(output, ""),
        }
    }
}

#[test]
fn test_singbox_output() {
    let output = generate_for(LINKS, "sing-box", &ConfigOptions::default());
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    let outbounds = json["outbounds"].as_array().unwrap();
    let types: Vec<&str> = outbounds.iter().map(|o| o["type"].as_str().unwrap()).collect();
    assert_eq!(
        types,
        vec![
            "selector",
            "urltest",
            "shadowsocks",
            "vless",
            "trojan",
            "hysteria2",
            "direct",
            "block",
            "dns"
        ]
    );
    assert_eq!(outbounds[4]["transport"]["type"], "ws");
    assert_eq!(outbounds[5]["tls"]["server_name"], "h2.example.com");
    assert!(output.starts_with("{\n  \"log\""));
}

#[test]
fn test_surge_output() {
    let output = generate_for(LINKS, "surge", &ConfigOptions::default());
    assert!(output.contains("My_SS_Node = ss, 1.1.1.1, 8888, encrypt-method=aes-256-gcm, password=password"));
    assert!(output.contains("# Naive = naive (unsupported)\n"));
    assert!(output.contains("FINAL,🚀 Node Select"));
}

#[test]
fn test_raw_and_base64_agree() {
    let options = ConfigOptions::default();
    let raw = generate_for(LINKS, "raw", &options);
    assert_eq!(raw.lines().count(), 5);
    let encoded = generate_for(LINKS, "base64", &options);
    assert_eq!(linksub::utils::base64::base64_decode(&encoded), Some(raw));
}

#[test]
fn test_unknown_format() {
    assert!(matches!(
        convert_links(LINKS, "quanx", &ConfigOptions::default()),
        Err(ConvertError::UnsupportedFormat(_))
    ));
}
