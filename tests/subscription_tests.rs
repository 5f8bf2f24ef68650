use std::io::Write;

use linksub::generator::find_format;
use linksub::interfaces::subscription::format_traffic;
use linksub::{detect_format_from_user_agent, subscription_headers, ConvertError, Settings};

fn settings_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(content.as_bytes()).expect("write settings");
    file
}

#[test]
fn test_user_agent_maps_to_registered_format() {
    for ua in [
        "clash-verge/v1.7.7",
        "ClashX Pro/1.118",
        "Surge Mac/2450",
        "sing-box 1.9.0",
        "Shadowrocket/2070",
        "",
    ] {
        let key = detect_format_from_user_agent(ua);
        assert!(find_format(key).is_some(), "{} -> {}", ua, key);
    }
    assert_eq!(detect_format_from_user_agent("ClashX Pro/1.118"), "clash-yaml");
    assert_eq!(detect_format_from_user_agent("MIHOMO"), "clash-meta");
}

#[test]
fn test_load_toml_settings() {
    let file = settings_file(
        ".toml",
        r#"
[defaults]
httpPort = 7891
mode = "global"

[limits]
maxLinksCount = 100

[subscription]
title = "Home"
updateInterval = 6

[subscription.traffic]
enabled = true
upload = 1024
download = 2048
total = 4096
"#,
    );
    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.defaults.http_port, 7891);
    assert_eq!(settings.defaults.mode, "global");
    assert_eq!(settings.defaults.test_interval, 300);
    assert_eq!(settings.limits.max_links_count, 100);
    assert_eq!(settings.limits.max_link_length, 8192);

    let headers = subscription_headers(&settings.subscription);
    assert_eq!(headers[0], ("Profile-Title".to_string(), "SG9tZQ==".to_string()));
    assert_eq!(headers[1].1, "6");
    assert_eq!(headers[2].1, "upload=1024; download=2048; total=4096");
}

#[test]
fn test_load_yaml_and_json_settings() {
    let yaml = settings_file(".yaml", "subscription:\n  expire:\n    enabled: true\n    timestamp: 1700000000\n");
    let settings = Settings::load(yaml.path()).unwrap();
    let headers = subscription_headers(&settings.subscription);
    assert_eq!(
        headers.last().unwrap().1,
        "upload=0; download=0; total=0; expire=1700000000"
    );

    let json = settings_file(".json", r#"{"defaults": {"allowLan": false}}"#);
    let settings = Settings::load(json.path()).unwrap();
    assert!(!settings.defaults.allow_lan);
}

#[test]
fn test_settings_errors() {
    let ini = settings_file(".ini", "[defaults]\n");
    assert!(matches!(
        Settings::load(ini.path()),
        Err(ConvertError::UnknownConfigFormat(_))
    ));

    let broken = settings_file(".json", "{ not json");
    assert!(matches!(
        Settings::load(broken.path()),
        Err(ConvertError::Json(_))
    ));
}

#[test]
fn test_traffic_formatting() {
    assert_eq!(format_traffic(0), "0 B");
    assert_eq!(format_traffic(1024 * 1024), "1.00 MB");
    assert_eq!(format_traffic(5 * 1024 * 1024 * 1024 + 512 * 1024 * 1024), "5.50 GB");
}
