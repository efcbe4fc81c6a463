use ferrous_cname_domain::{CnameResponse, DnsQueryMessage, DomainError};

/// Wire-format boundary: bytes in, structured query out; structured response
/// in, bytes out.
pub trait DnsMessageCodec: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<DnsQueryMessage, DomainError>;

    fn encode(&self, response: &CnameResponse) -> Result<Vec<u8>, DomainError>;
}
