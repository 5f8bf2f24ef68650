use once_cell::sync::Lazy;
use regex::Regex;

use super::{Mapping, YamlValue};

static NUMERIC_LIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d[\d.eE+\-]*$").unwrap());
static FLOW_SCALAR_SPECIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[:{}\[\],&*?|>!'"%@`\n]"#).unwrap());
static FLOW_KEY_SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[:{}\[\],&*?|>!'"%@`]"#).unwrap());
static BLOCK_SCALAR_SPECIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[:\-#{}\[\],&*?|>!'"%@`\n/ ]"#).unwrap());
static BLOCK_KEY_SPECIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[:\-#{}\[\],&*?|>!'"%@` ]"#).unwrap());

fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Strings a YAML reader would take for something other than a string.
fn looks_typed(s: &str) -> bool {
    s.is_empty()
        || s.eq_ignore_ascii_case("true")
        || s.eq_ignore_ascii_case("false")
        || s.eq_ignore_ascii_case("null")
        || NUMERIC_LIKE.is_match(s)
}

fn flow_str(s: &str) -> String {
    if looks_typed(s) || FLOW_SCALAR_SPECIAL.is_match(s) {
        single_quote(s)
    } else {
        s.to_string()
    }
}

fn block_str(s: &str) -> String {
    if looks_typed(s) || BLOCK_SCALAR_SPECIAL.is_match(s) {
        single_quote(s)
    } else {
        s.to_string()
    }
}

/// Quote a mapping key for flow style
pub fn flow_key(key: &str) -> String {
    if key.is_empty() || FLOW_KEY_SPECIAL.is_match(key) {
        single_quote(key)
    } else {
        key.to_string()
    }
}

fn block_key(key: &str) -> String {
    if key.is_empty() || BLOCK_KEY_SPECIAL.is_match(key) {
        single_quote(key)
    } else {
        key.to_string()
    }
}

/// Render any value in single-line flow style
pub fn flow_val(value: &YamlValue) -> String {
    match value {
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Int(i) => i.to_string(),
        YamlValue::Str(s) => flow_str(s),
        YamlValue::Seq(items) => {
            let items: Vec<String> = items.iter().map(flow_val).collect();
            format!("[{}]", items.join(", "))
        }
        YamlValue::Map(map) => flow_obj(map),
    }
}

/// Render a mapping as `{ key: value, ... }`, skipping null values
pub fn flow_obj(map: &Mapping) -> String {
    let parts: Vec<String> = map
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| format!("{}: {}", flow_key(k), flow_val(v)))
        .collect();
    if parts.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", parts.join(", "))
    }
}

fn block_scalar(value: &YamlValue) -> String {
    match value {
        YamlValue::Str(s) => block_str(s),
        other => flow_val(other),
    }
}

fn push_child_lines(lines: &mut Vec<String>, rendered: &str) {
    lines.extend(rendered.trim_end_matches('\n').lines().map(str::to_string));
}

fn append_kv(lines: &mut Vec<String>, prefix: &str, key: &str, value: &YamlValue, indent: usize) {
    let key = block_key(key);
    match value {
        YamlValue::Seq(items) if items.is_empty() => lines.push(format!("{}{}: []", prefix, key)),
        YamlValue::Seq(items) if items.iter().all(YamlValue::is_scalar) => {
            lines.push(format!("{}{}:", prefix, key));
            let child_pad = "  ".repeat(indent + 1);
            for item in items {
                lines.push(format!("{}- {}", child_pad, block_scalar(item)));
            }
        }
        YamlValue::Map(map) if map.values().all(YamlValue::is_null) => {
            lines.push(format!("{}{}: {{}}", prefix, key))
        }
        YamlValue::Seq(_) | YamlValue::Map(_) => {
            lines.push(format!("{}{}:", prefix, key));
            push_child_lines(lines, &to_block(value, indent + 1));
        }
        scalar => lines.push(format!("{}{}: {}", prefix, key, block_scalar(scalar))),
    }
}

/// Render a value in block style with two-space indentation
///
/// `indent` is the nesting level of the value itself; sequence items are
/// introduced by `- ` and mapping entries under an item continue two columns
/// further in.
pub fn to_block(value: &YamlValue, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    let mut lines = Vec::new();

    match value {
        YamlValue::Seq(items) => {
            for item in items {
                match item {
                    YamlValue::Map(map) => {
                        let mut first = true;
                        for (key, val) in map.iter().filter(|(_, v)| !v.is_null()) {
                            let prefix = if first {
                                format!("{}- ", pad)
                            } else {
                                format!("{}  ", pad)
                            };
                            first = false;
                            append_kv(&mut lines, &prefix, key, val, indent + 1);
                        }
                    }
                    YamlValue::Seq(_) => lines.push(format!("{}- {}", pad, flow_val(item))),
                    scalar => lines.push(format!("{}- {}", pad, block_scalar(scalar))),
                }
            }
        }
        YamlValue::Map(map) => {
            for (key, val) in map.iter().filter(|(_, v)| !v.is_null()) {
                append_kv(&mut lines, &pad, key, val, indent);
            }
        }
        scalar => lines.push(format!("{}{}", pad, block_scalar(scalar))),
    }

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> YamlValue {
        YamlValue::from(v)
    }

    #[test]
    fn test_flow_val_quoting() {
        assert_eq!(flow_val(&s("true")), "'true'");
        assert_eq!(flow_val(&s("NULL")), "'NULL'");
        assert_eq!(flow_val(&s("a,b")), "'a,b'");
        assert_eq!(flow_val(&s("plain")), "plain");
        assert_eq!(flow_val(&s("")), "''");
        assert_eq!(flow_val(&s("1.5e3")), "'1.5e3'");
        assert_eq!(flow_val(&s("it's: here")), "'it''s: here'");
        assert_eq!(flow_val(&s("/path with space")), "/path with space");
        assert_eq!(flow_val(&YamlValue::Int(42)), "42");
        assert_eq!(flow_val(&YamlValue::Bool(false)), "false");
    }

    #[test]
    fn test_flow_key_quoting() {
        assert_eq!(flow_key("name"), "name");
        assert_eq!(flow_key("skip-cert-verify"), "skip-cert-verify");
        assert_eq!(flow_key(""), "''");
        assert_eq!(flow_key("a:b"), "'a:b'");
    }

    #[test]
    fn test_flow_obj_skips_null_and_nests() {
        let mut headers = Mapping::new();
        headers.insert("Host".to_string(), s("cdn.example.com"));
        let mut opts = Mapping::new();
        opts.insert("path".to_string(), s("/ws"));
        opts.insert("headers".to_string(), headers.into());
        let mut map = Mapping::new();
        map.insert("name".to_string(), s("HK 01"));
        map.insert("sni".to_string(), YamlValue::Null);
        map.insert("port".to_string(), 443u16.into());
        map.insert("alpn".to_string(), vec!["h2", "http/1.1"].into());
        map.insert("ws-opts".to_string(), opts.into());

        assert_eq!(
            flow_obj(&map),
            "{ name: HK 01, port: 443, alpn: [h2, http/1.1], ws-opts: { path: /ws, headers: { Host: cdn.example.com } } }"
        );
        assert_eq!(flow_obj(&Mapping::new()), "{}");
    }

    #[test]
    fn test_to_block() {
        let mut inner = Mapping::new();
        inner.insert("public-key".to_string(), s("abc"));
        let mut node = Mapping::new();
        node.insert("name".to_string(), s("my node"));
        node.insert("type".to_string(), s("vless"));
        node.insert("tls".to_string(), true.into());
        node.insert("flow".to_string(), YamlValue::Null);
        node.insert("alpn".to_string(), vec!["h2"].into());
        node.insert("dns".to_string(), Vec::<String>::new().into());
        node.insert("reality-opts".to_string(), inner.into());
        let doc = YamlValue::Seq(vec![node.into(), s("-x")]);

        assert_eq!(
            to_block(&doc, 0),
            "- name: 'my node'\n  type: vless\n  tls: true\n  alpn:\n    - h2\n  dns: []\n  'reality-opts':\n    'public-key': abc\n- '-x'\n"
        );
    }

    #[test]
    fn test_to_block_quotes_keys() {
        let mut map = Mapping::new();
        map.insert("a key".to_string(), s("v"));
        map.insert("path".to_string(), s("/x"));
        assert_eq!(to_block(&map.into(), 1), "  'a key': v\n  path: '/x'\n");
    }
}
