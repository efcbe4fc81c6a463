use crate::{CnameResponse, DnsQueryMessage, DomainError};
use std::sync::Arc;

/// What the host pipeline hands to the injector for one request.
#[derive(Debug, Clone)]
pub struct StageContext {
    /// Only used to correlate log lines.
    pub request_id: Arc<str>,
    /// False when the raw input was not recognized as DNS at all.
    pub is_dns_msg: bool,
    pub query: Option<DnsQueryMessage>,
}

impl StageContext {
    pub fn new(request_id: impl Into<Arc<str>>, query: DnsQueryMessage) -> Self {
        Self {
            request_id: request_id.into(),
            is_dns_msg: true,
            query: Some(query),
        }
    }

    pub fn not_dns(request_id: impl Into<Arc<str>>) -> Self {
        Self {
            request_id: request_id.into(),
            is_dns_msg: false,
            query: None,
        }
    }
}

/// Outcome of one stage invocation. Never a panic, never a bare error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageResponse {
    /// Nothing to do here; the pipeline continues with normal resolution.
    Empty,
    Answer {
        response: CnameResponse,
        wire: Vec<u8>,
    },
    Error {
        stage: &'static str,
        error: DomainError,
    },
}

impl StageResponse {
    pub fn is_empty(&self) -> bool {
        matches!(self, StageResponse::Empty)
    }

    pub fn wire(&self) -> Option<&[u8]> {
        match self {
            StageResponse::Answer { wire, .. } => Some(wire),
            _ => None,
        }
    }
}
