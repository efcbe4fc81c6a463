//! Mapping between `ferrous_cname_domain::RecordType` and `hickory_proto::rr::RecordType`.

use ferrous_cname_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for encoding responses)
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::SVCB => HickoryRecordType::SVCB,
            RecordType::HTTPS => HickoryRecordType::HTTPS,
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::Unknown(code) => HickoryRecordType::from(code),
        }
    }

    /// Convert hickory RecordType → domain RecordType (for incoming queries)
    ///
    /// Types without a dedicated variant are carried by their numeric code.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::AAAA => RecordType::AAAA,
            HickoryRecordType::CNAME => RecordType::CNAME,
            HickoryRecordType::MX => RecordType::MX,
            HickoryRecordType::TXT => RecordType::TXT,
            HickoryRecordType::PTR => RecordType::PTR,
            HickoryRecordType::SRV => RecordType::SRV,
            HickoryRecordType::SOA => RecordType::SOA,
            HickoryRecordType::NS => RecordType::NS,
            HickoryRecordType::SVCB => RecordType::SVCB,
            HickoryRecordType::HTTPS => RecordType::HTTPS,
            HickoryRecordType::CAA => RecordType::CAA,
            other => RecordType::Unknown(u16::from(other)),
        }
    }
}
