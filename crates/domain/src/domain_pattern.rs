use crate::dns_query::normalize_domain;
use crate::DomainError;
use compact_str::CompactString;
use std::fmt;

/// A rule key: either a literal domain or a domain with exactly one `*` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainPattern {
    Exact(CompactString),
    Wildcard(WildcardPattern),
}

impl DomainPattern {
    /// Normalizes (lowercase, no trailing dot) and classifies a rule key.
    ///
    /// A `*` that is only part of a label (`foo*.example.com`) is literal, so
    /// such keys are exact. More than one `*` label is rejected.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = normalize_domain(raw.trim());
        if normalized.is_empty() {
            return Err(DomainError::InvalidPattern(format!(
                "empty pattern '{}'",
                raw
            )));
        }

        let wildcard_labels = normalized.split('.').filter(|l| *l == "*").count();
        match wildcard_labels {
            0 => Ok(DomainPattern::Exact(CompactString::from(normalized))),
            1 => Ok(DomainPattern::Wildcard(WildcardPattern::compile(&normalized))),
            n => Err(DomainPattern::too_many_wildcards(raw, n)),
        }
    }

    fn too_many_wildcards(raw: &str, n: usize) -> DomainError {
        DomainError::InvalidPattern(format!(
            "'{}' has {} wildcard labels, only one is supported",
            raw, n
        ))
    }

    pub fn as_str(&self) -> &str {
        match self {
            DomainPattern::Exact(name) => name,
            DomainPattern::Wildcard(w) => w.as_str(),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, DomainPattern::Wildcard(_))
    }
}

impl fmt::Display for DomainPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Precompiled form of `head.*.tail`.
///
/// The `*` position absorbs one or more characters, dots included, so
/// `*.ttvnw.net` matches `a.b.c.ttvnw.net` but never `ttvnw.net` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    pattern: CompactString,
    // "head." or "" when the pattern starts with `*`
    head: CompactString,
    // ".tail" or "" when the pattern ends with `*`
    tail: CompactString,
}

impl WildcardPattern {
    fn compile(normalized: &str) -> Self {
        let labels: Vec<&str> = normalized.split('.').collect();
        let star = labels.iter().position(|l| *l == "*").unwrap_or(0);

        let mut head = CompactString::default();
        for label in &labels[..star] {
            head.push_str(label);
            head.push('.');
        }

        let mut tail = CompactString::default();
        for label in &labels[star + 1..] {
            tail.push('.');
            tail.push_str(label);
        }

        Self {
            pattern: CompactString::from(normalized),
            head,
            tail,
        }
    }

    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        name.len() > self.head.len() + self.tail.len()
            && name.starts_with(self.head.as_str())
            && name.ends_with(self.tail.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Literal labels after the `*`, without the leading dot.
    pub fn suffix(&self) -> &str {
        self.tail.strip_prefix('.').unwrap_or("")
    }
}
