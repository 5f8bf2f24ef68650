//! Built-in routing rules

/// Clash rule list; `proxy_group` receives the traffic that should be proxied
pub fn clash_rules(proxy_group: &str) -> Vec<String> {
    let p = proxy_group;
    vec![
        "GEOSITE,private,DIRECT".to_string(),
        "GEOIP,LAN,DIRECT,no-resolve".to_string(),
        "GEOSITE,cn,DIRECT".to_string(),
        "GEOIP,CN,DIRECT,no-resolve".to_string(),
        format!("IP-CIDR,1.1.1.1/32,{},no-resolve", p),
        format!("IP-CIDR,8.8.8.8/32,{},no-resolve", p),
        format!("DOMAIN-SUFFIX,services.googleapis.cn,{}", p),
        format!("DOMAIN-SUFFIX,xn--ngstr-lra8j.com,{}", p),
        "DOMAIN,safebrowsing.urlsec.qq.com,DIRECT".to_string(),
        "DOMAIN,safebrowsing.googleapis.com,DIRECT".to_string(),
        format!("DOMAIN,developer.apple.com,{}", p),
        "DOMAIN-SUFFIX,apple.com,DIRECT".to_string(),
        "DOMAIN-SUFFIX,icloud.com,DIRECT".to_string(),
        format!("DOMAIN-KEYWORD,google,{}", p),
        format!("DOMAIN-KEYWORD,youtube,{}", p),
        format!("DOMAIN-KEYWORD,github,{}", p),
        format!("DOMAIN-KEYWORD,twitter,{}", p),
        format!("DOMAIN-KEYWORD,telegram,{}", p),
        format!("IP-CIDR,91.108.4.0/22,{},no-resolve", p),
        "DOMAIN-SUFFIX,cn,DIRECT".to_string(),
        "DOMAIN-KEYWORD,-cn,DIRECT".to_string(),
        "GEOIP,CN,DIRECT".to_string(),
        format!("MATCH,{}", p),
    ]
}

/// Surge rule list, ending with the `FINAL` rule
pub fn surge_rules(proxy_group: &str) -> Vec<String> {
    vec![
        "GEOIP,LAN,DIRECT".to_string(),
        "GEOIP,CN,DIRECT".to_string(),
        format!("FINAL,{}", proxy_group),
    ]
}
