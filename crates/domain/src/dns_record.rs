mod record;
mod record_type;

pub use record::{DnsRecord, RecordData, DNS_CLASS_IN};
pub use record_type::RecordType;
