use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid rule pattern: {0}")]
    InvalidPattern(String),

    #[error("Malformed rule: {0}")]
    InvalidRule(String),

    #[error("Not a DNS message: {0}")]
    NotDnsMessage(String),

    #[error("Malformed DNS query: {0}")]
    MalformedQuery(String),

    #[error("Failed to encode DNS response: {0}")]
    EncodeFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Upstream query timeout")]
    QueryTimeout,
}
