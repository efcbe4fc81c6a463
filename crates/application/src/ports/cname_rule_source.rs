use async_trait::async_trait;
use ferrous_cname_domain::{DomainError, RuleTable};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RulesReloadOutcome {
    pub enabled: bool,
    pub rules: usize,
    pub rejected: usize,
}

/// Holder of the currently published rule table.
#[async_trait]
pub trait CnameRuleSource: Send + Sync {
    /// `None` while injection is disabled (no valid rules loaded, or the rules
    /// file turned it off). The returned table never changes; a reload
    /// publishes a new one.
    fn snapshot(&self) -> Option<Arc<RuleTable>>;

    /// Re-read the rules and publish the result. A failed load leaves the
    /// source disabled and returns the error.
    async fn reload(&self) -> Result<RulesReloadOutcome, DomainError>;
}
