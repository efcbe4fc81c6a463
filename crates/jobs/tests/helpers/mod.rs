#![allow(dead_code)]

mod mock_rule_source;

pub use mock_rule_source::MockRuleSource;
