use crate::dns::names::to_ascii_domain;
use ferrous_cname_application::ports::RulesReloadOutcome;
use ferrous_cname_domain::{CnameRulesDocument, DomainError, RuleTable};
use std::path::Path;
use tracing::{info, warn};

/// Result of reading a rules file. `table` is `None` when the file sets
/// `"enabled": false`.
#[derive(Debug)]
pub struct LoadedRules {
    pub table: Option<RuleTable>,
    pub rejected: usize,
}

impl LoadedRules {
    pub fn outcome(&self) -> RulesReloadOutcome {
        RulesReloadOutcome {
            enabled: self.table.is_some(),
            rules: self.table.as_ref().map_or(0, RuleTable::len),
            rejected: self.rejected,
        }
    }
}

pub struct RulesFileLoader;

impl RulesFileLoader {
    pub fn load(path: &Path) -> Result<LoadedRules, DomainError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DomainError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&contents)
    }

    pub async fn load_async(path: &Path) -> Result<LoadedRules, DomainError> {
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&contents)
    }

    /// Parse and compile a rules document. Entries with a bad pattern,
    /// address or shape are skipped with a warning; the rest of the file
    /// still loads. Unicode keys and targets are stored in their `xn--` form.
    pub fn parse(contents: &str) -> Result<LoadedRules, DomainError> {
        let document = CnameRulesDocument::from_json_str(contents)
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;

        if !document.enabled {
            info!("CNAME injector disabled by rules file");
            return Ok(LoadedRules {
                table: None,
                rejected: 0,
            });
        }

        let compiled = RuleTable::compile_with(&document, to_ascii_domain);

        for (pattern, error) in &compiled.rejected {
            warn!(pattern = %pattern, error = %error, "Skipping invalid CNAME rule");
        }

        info!(
            rules = compiled.table.len(),
            wildcards = compiled.table.wildcard_count(),
            rejected = compiled.rejected.len(),
            "CNAME injector loaded"
        );

        Ok(LoadedRules {
            rejected: compiled.rejected.len(),
            table: Some(compiled.table),
        })
    }
}
