//! DNS wire codec backed by `hickory-proto`.
//!
//! Decodes incoming queries into `DnsQueryMessage` and serializes locally
//! built `CnameResponse`s back to wire format.

use super::record_type_map::RecordTypeMapper;
use ferrous_cname_application::ports::DnsMessageCodec;
use ferrous_cname_domain::{
    CnameResponse, DnsQueryMessage, DnsQuestion, DnsRecord, DomainError, MessageKind, RecordData,
};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{rdata, DNSClass, Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

pub struct HickoryMessageCodec;

impl HickoryMessageCodec {
    pub fn new() -> Self {
        Self
    }

    fn parse_name(name: &str) -> Result<Name, DomainError> {
        let mut parsed = Name::from_ascii(name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e))
        })?;
        parsed.set_fqdn(true);
        Ok(parsed)
    }

    fn to_query(question: &DnsQuestion) -> Result<Query, DomainError> {
        let mut query = Query::query(
            Self::parse_name(&question.name)?,
            RecordTypeMapper::to_hickory(question.record_type),
        );
        query.set_query_class(DNSClass::from(question.class));
        Ok(query)
    }

    fn to_record(record: &DnsRecord) -> Result<Record, DomainError> {
        let rdata = match &record.data {
            RecordData::Cname(target) => RData::CNAME(rdata::CNAME(Self::parse_name(target)?)),
            RecordData::A(ip) => RData::A(rdata::A(*ip)),
            RecordData::Aaaa(ip) => RData::AAAA(rdata::AAAA(*ip)),
        };

        // from_rdata always tags the record class IN
        Ok(Record::from_rdata(
            Self::parse_name(&record.name)?,
            record.ttl,
            rdata,
        ))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::EncodeFailed(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

impl Default for HickoryMessageCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl DnsMessageCodec for HickoryMessageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DnsQueryMessage, DomainError> {
        let message = Message::from_vec(bytes).map_err(|e| {
            DomainError::NotDnsMessage(format!("Failed to parse DNS message: {}", e))
        })?;

        let questions = message
            .queries()
            .iter()
            .map(|query| {
                // Wire form: IDN labels stay as `xn--` so they match rule
                // keys and can be echoed back verbatim.
                DnsQuestion::new(
                    query.name().to_ascii(),
                    RecordTypeMapper::from_hickory(query.query_type()),
                    u16::from(query.query_class()),
                )
            })
            .collect();

        let mut decoded = DnsQueryMessage::new(message.id(), questions)
            .with_recursion_desired(Some(message.recursion_desired()));
        decoded.kind = match message.message_type() {
            MessageType::Query => MessageKind::Query,
            MessageType::Response => MessageKind::Response,
        };

        Ok(decoded)
    }

    fn encode(&self, response: &CnameResponse) -> Result<Vec<u8>, DomainError> {
        let mut message = Message::new(response.id, MessageType::Response, OpCode::Query);
        message.set_authoritative(CnameResponse::AUTHORITATIVE);
        message.set_truncated(CnameResponse::TRUNCATED);
        message.set_recursion_desired(response.recursion_desired);
        message.set_recursion_available(CnameResponse::RECURSION_AVAILABLE);
        message.set_response_code(ResponseCode::NoError);

        for question in &response.questions {
            message.add_query(Self::to_query(question)?);
        }

        for record in &response.answers {
            message.add_answer(Self::to_record(record)?);
        }

        Self::serialize_message(&message)
    }
}
