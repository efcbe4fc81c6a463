use async_trait::async_trait;
use ferrous_cname_application::ports::{CnameRuleSource, RulesReloadOutcome};
use ferrous_cname_domain::{DomainError, RuleTable};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub struct MockRuleSource {
    reload_calls: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockRuleSource {
    pub fn new() -> Self {
        Self {
            reload_calls: AtomicUsize::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn reload_call_count(&self) -> usize {
        self.reload_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CnameRuleSource for MockRuleSource {
    fn snapshot(&self) -> Option<Arc<RuleTable>> {
        None
    }

    async fn reload(&self) -> Result<RulesReloadOutcome, DomainError> {
        self.reload_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::IoError("rules file vanished".to_string()));
        }
        Ok(RulesReloadOutcome {
            enabled: true,
            rules: 3,
            rejected: 0,
        })
    }
}
