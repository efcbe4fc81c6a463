//! Ferrous CNAME Domain Layer
pub mod cname_response;
pub mod cname_rule;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod domain_pattern;
pub mod errors;
pub mod rule_table;
pub mod stage;

pub use cname_response::{AnswerRecords, CnameResponse, CnameResponseBuilder, SYNTHESIZED_TTL};
pub use cname_rule::CnameRule;
pub use config::{
    CliOverrides, CnameConfig, CnameRuleConfig, CnameRulesDocument, Config, ConfigError,
    LoggingConfig, RuleMap, RuleValue, ServerConfig, UpstreamConfig,
};
pub use dns_query::{normalize_domain, DnsQueryMessage, DnsQuestion, MessageKind};
pub use dns_record::{DnsRecord, RecordData, RecordType, DNS_CLASS_IN};
pub use domain_pattern::{DomainPattern, WildcardPattern};
pub use errors::DomainError;
pub use rule_table::{CompiledRules, MatchResult, RuleEntry, RuleTable, RuleTableBuilder};
pub use stage::{StageContext, StageResponse};
