use crate::config::CnameRuleConfig;
use crate::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// What a matching query gets answered with.
///
/// A rule with no address at all is valid: it produces a CNAME-only answer
/// for every query type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnameRule {
    pub target: Arc<str>,
    pub ipv4: Option<Ipv4Addr>,
    pub ipv6: Option<Ipv6Addr>,
}

impl CnameRule {
    pub fn new(target: impl Into<Arc<str>>) -> Self {
        Self {
            target: target.into(),
            ipv4: None,
            ipv6: None,
        }
    }

    pub fn with_ipv4(mut self, ipv4: Ipv4Addr) -> Self {
        self.ipv4 = Some(ipv4);
        self
    }

    pub fn with_ipv6(mut self, ipv6: Ipv6Addr) -> Self {
        self.ipv6 = Some(ipv6);
        self
    }

    pub fn from_config(config: &CnameRuleConfig) -> Result<Self, DomainError> {
        let target = config.target.trim().trim_end_matches('.');
        if target.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "rule target cannot be empty".to_string(),
            ));
        }

        let ipv4 = parse_optional::<Ipv4Addr>(config.ipv4.as_deref())?;
        let ipv6 = parse_optional::<Ipv6Addr>(config.ipv6.as_deref())?;

        Ok(Self {
            target: Arc::from(target),
            ipv4,
            ipv6,
        })
    }
}

// Empty strings count as "not configured".
fn parse_optional<T: std::str::FromStr>(value: Option<&str>) -> Result<Option<T>, DomainError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| DomainError::InvalidIpAddress(raw.to_string())),
    }
}
