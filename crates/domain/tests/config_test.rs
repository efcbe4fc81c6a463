use ferrous_cname_domain::{CliOverrides, CnameRulesDocument, Config, ConfigError};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.upstream.server, "8.8.8.8:53");
    assert_eq!(config.upstream.query_timeout, 2000);
    assert_eq!(config.cname.rules_file, "cname-rules.json");
    assert_eq!(config.cname.reload_interval_secs, 30);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_toml_uses_defaults() {
    let config = Config::from_toml_str(
        r#"
        [server]
        dns_port = 5353

        [cname]
        rules_file = "/etc/ferrous-cname/rules.json"
    "#,
    )
    .unwrap();

    assert_eq!(config.server.dns_port, 5353);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.cname.rules_file, "/etc/ferrous-cname/rules.json");
    assert_eq!(config.cname.reload_interval_secs, 30);
    assert_eq!(config.upstream.server, "8.8.8.8:53");
}

#[test]
fn test_config_rejects_malformed_toml() {
    let result = Config::from_toml_str("[server\ndns_port = 53");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_validation_rejects_zero_port() {
    let mut config = Config::default();
    config.server.dns_port = 0;

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_config_validation_rejects_empty_upstream() {
    let mut config = Config::default();
    config.upstream.server = " ".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_config_load_missing_file_fails() {
    let result = Config::load(
        Some("/nonexistent/ferrous-cname.toml"),
        CliOverrides::default(),
    );

    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_rules_document_defaults_enabled() {
    let doc = CnameRulesDocument::from_json_str(
        r#"{ "rules": {
            "usher.ttvnw.net": { "target": "proxy.example.com", "ipv4": "1.2.3.4" }
        } }"#,
    )
    .unwrap();

    assert!(doc.enabled);
    assert_eq!(doc.rules.len(), 1);
}

#[test]
fn test_rules_document_explicit_disable() {
    let doc = CnameRulesDocument::from_json_str(r#"{ "enabled": false, "rules": {} }"#).unwrap();

    assert!(!doc.enabled);
    assert!(doc.rules.is_empty());
}

#[test]
fn test_rules_document_preserves_key_order() {
    let doc = CnameRulesDocument::from_json_str(
        r#"{
            "rules": {
                "*.z.example.com": { "target": "z.example.net" },
                "*.a.example.com": { "target": "a.example.net", "ipv6": null },
                "m.example.com":   { "target": "m.example.net" }
            }
        }"#,
    )
    .unwrap();

    let keys: Vec<&str> = doc.rules.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["*.z.example.com", "*.a.example.com", "m.example.com"]);
}

#[test]
fn test_rules_document_requires_rules_object() {
    assert!(CnameRulesDocument::from_json_str(r#"{ "enabled": true }"#).is_err());
    assert!(CnameRulesDocument::from_json_str(r#"{ "rules": [] }"#).is_err());
    assert!(CnameRulesDocument::from_json_str("not json").is_err());
}

#[test]
fn test_rules_document_keeps_malformed_entries_individually() {
    let doc = CnameRulesDocument::from_json_str(
        r#"{
            "rules": {
                "no-target.example.com": { "ipv4": "1.2.3.4" },
                "numeric-ip.example.com": { "target": "proxy.example.com", "ipv4": 1234 },
                "good.example.com": { "target": "proxy.example.com" }
            }
        }"#,
    )
    .unwrap();

    let values: Vec<bool> = doc.rules.iter().map(|(_, v)| v.is_ok()).collect();
    assert_eq!(values, vec![false, false, true]);
}
