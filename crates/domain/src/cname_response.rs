use crate::dns_query::{DnsQueryMessage, DnsQuestion};
use crate::dns_record::{DnsRecord, RecordData, RecordType};
use crate::CnameRule;
use smallvec::SmallVec;
use std::sync::Arc;

/// TTL of every synthesized record, in seconds.
pub const SYNTHESIZED_TTL: u32 = 300;

/// CNAME plus at most one address record.
pub type AnswerRecords = SmallVec<[DnsRecord; 2]>;

/// Response packet description, ready for wire encoding.
///
/// Flags not stored here are fixed for every synthesized answer: QR=1,
/// OPCODE=QUERY, AA=0, TC=0, RA=1, RCODE=NOERROR, and the authority and
/// additional sections are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnameResponse {
    pub id: u16,
    pub recursion_desired: bool,
    pub questions: Vec<DnsQuestion>,
    pub answers: AnswerRecords,
}

impl CnameResponse {
    pub const AUTHORITATIVE: bool = false;
    pub const TRUNCATED: bool = false;
    pub const RECURSION_AVAILABLE: bool = true;
}

pub struct CnameResponseBuilder;

impl CnameResponseBuilder {
    /// Always one CNAME (`query_name` → `target`), followed by an A record
    /// for A queries when the rule has an IPv4 address, or an AAAA record for
    /// AAAA queries when it has an IPv6 address. The address record is owned
    /// by `target`.
    pub fn build(
        original: &DnsQueryMessage,
        query_name: &str,
        target: &str,
        query_type: RecordType,
        rule: &CnameRule,
    ) -> CnameResponse {
        let target: Arc<str> = Arc::from(target);

        let mut answers = AnswerRecords::new();
        answers.push(DnsRecord::new(
            query_name,
            SYNTHESIZED_TTL,
            RecordData::Cname(Arc::clone(&target)),
        ));

        let address = match query_type {
            RecordType::A => rule.ipv4.map(RecordData::A),
            RecordType::AAAA => rule.ipv6.map(RecordData::Aaaa),
            _ => None,
        };
        if let Some(data) = address {
            answers.push(DnsRecord::new(target, SYNTHESIZED_TTL, data));
        }

        CnameResponse {
            id: original.id,
            // A query that does not report the flag is treated as RD=1.
            recursion_desired: original.recursion_desired.unwrap_or(true),
            questions: original.questions.clone(),
            answers,
        }
    }
}
