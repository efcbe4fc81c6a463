pub mod cname;
pub mod cname_rules;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use cname::CnameConfig;
pub use cname_rules::{CnameRuleConfig, CnameRulesDocument, RuleMap, RuleValue};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
