use super::RecordType;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    /// Name exactly as it was decoded, including any trailing dot.
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: u16,
}

impl DnsQuestion {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, class: u16) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Query,
    Response,
}

/// A decoded DNS message as handed to the injector by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQueryMessage {
    pub id: u16,
    pub kind: MessageKind,
    /// `None` when the decoder did not report the flag.
    pub recursion_desired: Option<bool>,
    pub questions: Vec<DnsQuestion>,
}

impl DnsQueryMessage {
    pub fn new(id: u16, questions: Vec<DnsQuestion>) -> Self {
        Self {
            id,
            kind: MessageKind::Query,
            recursion_desired: Some(true),
            questions,
        }
    }

    pub fn with_recursion_desired(mut self, rd: Option<bool>) -> Self {
        self.recursion_desired = rd;
        self
    }

    pub fn single_question(&self) -> Option<&DnsQuestion> {
        match self.questions.as_slice() {
            [question] => Some(question),
            _ => None,
        }
    }

    pub fn is_query(&self) -> bool {
        self.kind == MessageKind::Query
    }
}

/// Lowercases a domain and strips the trailing root dot.
pub fn normalize_domain(domain: &str) -> String {
    domain.trim_end_matches('.').to_ascii_lowercase()
}
