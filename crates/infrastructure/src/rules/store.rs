use super::loader::{LoadedRules, RulesFileLoader};
use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use ferrous_cname_application::ports::{CnameRuleSource, RulesReloadOutcome};
use ferrous_cname_domain::{DomainError, RuleTable};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// File-backed rule source. The current table is published through an
/// `ArcSwapOption`; `None` means injection is disabled.
pub struct RuleStore {
    path: PathBuf,
    table: ArcSwapOption<RuleTable>,
}

impl RuleStore {
    /// Load `path` once. Failure does not abort startup: the store comes up
    /// disabled and every query falls through to normal resolution.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let store = Self {
            path: path.as_ref().to_path_buf(),
            table: ArcSwapOption::empty(),
        };

        match RulesFileLoader::load(&store.path) {
            Ok(loaded) => {
                store.publish(loaded);
            }
            Err(e) => store.disable(&e),
        }
        store
    }

    pub fn with_table(path: impl AsRef<Path>, table: Option<RuleTable>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            table: ArcSwapOption::new(table.map(Arc::new)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_enabled(&self) -> bool {
        self.table.load().is_some()
    }

    fn publish(&self, loaded: LoadedRules) -> RulesReloadOutcome {
        let outcome = loaded.outcome();
        self.table.store(loaded.table.map(Arc::new));
        outcome
    }

    fn disable(&self, error: &DomainError) {
        error!(
            path = %self.path.display(),
            error = %error,
            "Failed to load CNAME rules, injection DISABLED"
        );
        self.table.store(None);
    }
}

#[async_trait]
impl CnameRuleSource for RuleStore {
    #[inline]
    fn snapshot(&self) -> Option<Arc<RuleTable>> {
        self.table.load_full()
    }

    async fn reload(&self) -> Result<RulesReloadOutcome, DomainError> {
        info!(path = %self.path.display(), "CNAME rules reload started");
        match RulesFileLoader::load_async(&self.path).await {
            Ok(loaded) => Ok(self.publish(loaded)),
            Err(e) => {
                self.disable(&e);
                Err(e)
            }
        }
    }
}
