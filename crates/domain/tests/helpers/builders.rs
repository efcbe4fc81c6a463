#![allow(dead_code)]
use ferrous_cname_domain::{
    CnameRule, DnsQueryMessage, DnsQuestion, RecordType, RuleTable, DNS_CLASS_IN,
};

pub struct QueryMessageBuilder {
    id: u16,
    recursion_desired: Option<bool>,
    questions: Vec<DnsQuestion>,
}

impl QueryMessageBuilder {
    pub fn new() -> Self {
        Self {
            id: 1234,
            recursion_desired: Some(true),
            questions: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn recursion_desired(mut self, rd: Option<bool>) -> Self {
        self.recursion_desired = rd;
        self
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.questions
            .push(DnsQuestion::new(name, record_type, DNS_CLASS_IN));
        self
    }

    pub fn build(self) -> DnsQueryMessage {
        DnsQueryMessage::new(self.id, self.questions).with_recursion_desired(self.recursion_desired)
    }
}

/// Builds a table from `(pattern, rule)` pairs, in order.
pub fn table(rules: Vec<(&str, CnameRule)>) -> RuleTable {
    rules
        .into_iter()
        .try_fold(RuleTable::builder(), |b, (pattern, rule)| b.with_rule(pattern, rule))
        .unwrap()
        .build()
}

pub fn proxy_rule() -> CnameRule {
    CnameRule::new("proxy.example.com").with_ipv4("1.2.3.4".parse().unwrap())
}
