#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::io::Write;
use tempfile::NamedTempFile;

pub const TWITCH_RULES: &str = r#"{
    "enabled": true,
    "rules": {
        "usher.ttvnw.net": { "target": "proxy.example.com", "ipv4": "1.2.3.4" },
        "*.ttvnw.net": { "target": "edge.example.com", "ipv6": "2001:db8::1" },
        "bad.example.com": { "target": "proxy.example.com", "ipv4": "999.1.1.1" }
    }
}"#;

pub const DISABLED_RULES: &str = r#"{ "enabled": false, "rules": {
    "usher.ttvnw.net": { "target": "proxy.example.com" }
} }"#;

pub const IDN_RULES: &str = r#"{
    "rules": {
        "xn--bcher-kva.example": { "target": "proxy.example.com", "ipv4": "1.2.3.4" },
        "*.bücher.example": { "target": "edge.bücher.example" }
    }
}"#;

pub const MALFORMED_ENTRY_RULES: &str = r#"{
    "rules": {
        "no-target.example.com": { "ipv4": "1.2.3.4" },
        "numeric-ip.example.com": { "target": "proxy.example.com", "ipv4": 1234 },
        "usher.ttvnw.net": { "target": "proxy.example.com", "ipv4": "1.2.3.4" }
    }
}"#;

pub fn rules_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn rewrite(file: &NamedTempFile, contents: &str) {
    std::fs::write(file.path(), contents).unwrap();
}

/// Wire-format query as a stub resolver would send it.
pub fn wire_query(id: u16, name: &str, record_type: RecordType, rd: bool) -> Vec<u8> {
    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(rd);
    message.add_query(Query::query(Name::from_ascii(name).unwrap(), record_type));
    message.to_vec().unwrap()
}
