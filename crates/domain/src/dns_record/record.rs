use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Class IN.
pub const DNS_CLASS_IN: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Cname(Arc<str>),
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::Cname(_) => RecordType::CNAME,
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
        }
    }
}

/// One resource record of a synthesized answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: Arc<str>,

    pub ttl: u32,

    pub class: u16,

    pub data: RecordData,
}

impl DnsRecord {
    pub fn new(name: impl Into<Arc<str>>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            class: DNS_CLASS_IN,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}
