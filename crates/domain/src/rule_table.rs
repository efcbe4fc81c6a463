use crate::config::{CnameRulesDocument, RuleValue};
use crate::domain_pattern::{DomainPattern, WildcardPattern};
use crate::{CnameRule, DomainError};
use compact_str::CompactString;
use rustc_hash::FxBuildHasher;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
    NoMatch,
    Matched(&'a CnameRule),
}

impl<'a> MatchResult<'a> {
    pub fn rule(self) -> Option<&'a CnameRule> {
        match self {
            MatchResult::Matched(rule) => Some(rule),
            MatchResult::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub pattern: DomainPattern,
    pub rule: CnameRule,
}

/// Immutable pattern → rule mapping.
///
/// Every key (wildcard keys included) is reachable by direct lookup. Wildcard
/// patterns are additionally scanned in insertion order and the first one
/// that matches wins, regardless of how specific a later pattern is.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    entries: Vec<RuleEntry>,
    index: HashMap<CompactString, usize, FxBuildHasher>,
    wildcards: Vec<(WildcardPattern, usize)>,
}

/// Result of compiling a rules document: the usable table plus the keys
/// that were dropped and why.
#[derive(Debug)]
pub struct CompiledRules {
    pub table: RuleTable,
    pub rejected: Vec<(String, DomainError)>,
}

impl RuleTable {
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    pub fn compile(document: &CnameRulesDocument) -> CompiledRules {
        Self::compile_with(document, |name| Ok(name.to_string()))
    }

    /// Like [`RuleTable::compile`], with every rule key and target passed
    /// through `to_ascii` first so they compare equal to names read off the
    /// wire (IDN labels in their `xn--` form).
    pub fn compile_with<F>(document: &CnameRulesDocument, to_ascii: F) -> CompiledRules
    where
        F: Fn(&str) -> Result<String, DomainError>,
    {
        let mut builder = RuleTable::builder();
        let mut rejected = Vec::new();

        for (key, value) in document.rules.iter() {
            match compile_entry(key, value, &to_ascii) {
                Ok((pattern, rule)) => builder.insert(pattern, rule),
                Err(e) => rejected.push((key.clone(), e)),
            }
        }

        CompiledRules {
            table: builder.build(),
            rejected,
        }
    }

    /// Exact key first, then the first wildcard in table order.
    pub fn find(&self, name: &str) -> MatchResult<'_> {
        match self.find_entry(name) {
            Some(entry) => MatchResult::Matched(&entry.rule),
            None => MatchResult::NoMatch,
        }
    }

    pub fn find_entry(&self, name: &str) -> Option<&RuleEntry> {
        if let Some(&i) = self.index.get(name) {
            return Some(&self.entries[i]);
        }

        self.wildcards
            .iter()
            .find(|(pattern, _)| pattern.matches(name))
            .map(|(_, i)| &self.entries[*i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn wildcard_count(&self) -> usize {
        self.wildcards.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = &RuleEntry> {
        self.entries.iter()
    }
}

fn compile_entry<F>(
    key: &str,
    value: &RuleValue,
    to_ascii: &F,
) -> Result<(DomainPattern, CnameRule), DomainError>
where
    F: Fn(&str) -> Result<String, DomainError>,
{
    let config = value
        .as_ref()
        .map_err(|reason| DomainError::InvalidRule(reason.clone()))?;
    let pattern = DomainPattern::parse(&to_ascii(key)?)?;

    let mut rule = CnameRule::from_config(config)?;
    rule.target = Arc::from(to_ascii(&rule.target)?);

    Ok((pattern, rule))
}

#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    table: RuleTable,
}

impl RuleTableBuilder {
    /// A repeated key replaces the earlier rule but keeps its position.
    pub fn insert(&mut self, pattern: DomainPattern, rule: CnameRule) {
        let table = &mut self.table;
        let key = CompactString::from(pattern.as_str());

        if let Some(&i) = table.index.get(&key) {
            table.entries[i].rule = rule;
            return;
        }

        let i = table.entries.len();
        if let DomainPattern::Wildcard(w) = &pattern {
            table.wildcards.push((w.clone(), i));
        }
        table.index.insert(key, i);
        table.entries.push(RuleEntry { pattern, rule });
    }

    pub fn with_rule(mut self, pattern: &str, rule: CnameRule) -> Result<Self, DomainError> {
        self.insert(DomainPattern::parse(pattern)?, rule);
        Ok(self)
    }

    pub fn build(self) -> RuleTable {
        self.table
    }
}
