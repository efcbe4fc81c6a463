mod cname_rule_source;
mod dns_message_codec;

pub use cname_rule_source::{CnameRuleSource, RulesReloadOutcome};
pub use dns_message_codec::DnsMessageCodec;
