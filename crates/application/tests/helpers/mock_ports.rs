#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_cname_application::ports::{CnameRuleSource, DnsMessageCodec, RulesReloadOutcome};
use ferrous_cname_domain::{CnameResponse, DnsQueryMessage, DomainError, RuleTable};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct MockRuleSource {
    table: Mutex<Option<Arc<RuleTable>>>,
    reload_calls: AtomicUsize,
}

impl MockRuleSource {
    pub fn new(table: RuleTable) -> Self {
        Self {
            table: Mutex::new(Some(Arc::new(table))),
            reload_calls: AtomicUsize::new(0),
        }
    }

    pub fn disabled() -> Self {
        Self {
            table: Mutex::new(None),
            reload_calls: AtomicUsize::new(0),
        }
    }

    pub fn publish(&self, table: Option<RuleTable>) {
        *self.table.lock().unwrap() = table.map(Arc::new);
    }

    pub fn reload_call_count(&self) -> usize {
        self.reload_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CnameRuleSource for MockRuleSource {
    fn snapshot(&self) -> Option<Arc<RuleTable>> {
        self.table.lock().unwrap().clone()
    }

    async fn reload(&self) -> Result<RulesReloadOutcome, DomainError> {
        self.reload_calls.fetch_add(1, Ordering::SeqCst);
        let rules = self.snapshot().map(|t| t.len()).unwrap_or(0);
        Ok(RulesReloadOutcome {
            enabled: rules > 0,
            rules,
            rejected: 0,
        })
    }
}

/// Codec that hands back a preset query and records what it was asked to
/// encode. The "wire" form is just the transaction id and answer count.
pub struct MockCodec {
    decoded: Mutex<Result<DnsQueryMessage, DomainError>>,
    encode_error: Mutex<Option<DomainError>>,
    encoded: Mutex<Vec<CnameResponse>>,
}

impl MockCodec {
    pub fn new() -> Self {
        Self {
            decoded: Mutex::new(Err(DomainError::NotDnsMessage("no packet".to_string()))),
            encode_error: Mutex::new(None),
            encoded: Mutex::new(Vec::new()),
        }
    }

    pub fn decoding_to(self, query: DnsQueryMessage) -> Self {
        *self.decoded.lock().unwrap() = Ok(query);
        self
    }

    pub fn failing_encode(self, error: DomainError) -> Self {
        *self.encode_error.lock().unwrap() = Some(error);
        self
    }

    pub fn encode_call_count(&self) -> usize {
        self.encoded.lock().unwrap().len()
    }
}

impl DnsMessageCodec for MockCodec {
    fn decode(&self, _bytes: &[u8]) -> Result<DnsQueryMessage, DomainError> {
        self.decoded.lock().unwrap().clone()
    }

    fn encode(&self, response: &CnameResponse) -> Result<Vec<u8>, DomainError> {
        self.encoded.lock().unwrap().push(response.clone());
        if let Some(e) = self.encode_error.lock().unwrap().clone() {
            return Err(e);
        }
        let id = response.id.to_be_bytes();
        Ok(vec![id[0], id[1], response.answers.len() as u8])
    }
}
