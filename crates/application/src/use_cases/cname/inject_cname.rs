use crate::ports::{CnameRuleSource, DnsMessageCodec};
use ferrous_cname_domain::{
    normalize_domain, CnameResponseBuilder, DnsQueryMessage, RuleTable, StageContext,
    StageResponse,
};
use std::sync::Arc;
use tracing::{debug, error, info};

pub const CNAME_INJECTOR_STAGE: &str = "CnameInjector";

/// Answers queries for configured domains with a locally built CNAME (plus
/// an optional A/AAAA record) instead of letting them go upstream.
pub struct InjectCnameUseCase {
    rules: Arc<dyn CnameRuleSource>,
    codec: Arc<dyn DnsMessageCodec>,
}

impl InjectCnameUseCase {
    pub fn new(rules: Arc<dyn CnameRuleSource>, codec: Arc<dyn DnsMessageCodec>) -> Self {
        Self { rules, codec }
    }

    pub fn execute(&self, ctx: &StageContext) -> StageResponse {
        // One snapshot per request; a concurrent reload does not affect it.
        let Some(table) = self.rules.snapshot() else {
            return StageResponse::Empty;
        };

        if !ctx.is_dns_msg {
            debug!(request_id = %ctx.request_id, "Not a DNS message, skipping CNAME injection");
            return StageResponse::Empty;
        }

        match &ctx.query {
            Some(query) => self.answer(&ctx.request_id, &table, query),
            None => StageResponse::Empty,
        }
    }

    /// Decodes `bytes` with the codec and runs the stage. Input that does not
    /// decode is treated as "not a DNS message".
    pub fn execute_wire(&self, request_id: &str, bytes: &[u8]) -> StageResponse {
        let ctx = match self.codec.decode(bytes) {
            Ok(query) => StageContext::new(request_id, query),
            Err(e) => {
                debug!(request_id = %request_id, error = %e, "Failed to decode DNS message");
                StageContext::not_dns(request_id)
            }
        };

        self.execute(&ctx)
    }

    fn answer(
        &self,
        request_id: &str,
        table: &RuleTable,
        query: &DnsQueryMessage,
    ) -> StageResponse {
        if !query.is_query() {
            debug!(request_id = %request_id, "Message is not a query, skipping");
            return StageResponse::Empty;
        }

        let Some(question) = query.single_question() else {
            debug!(
                request_id = %request_id,
                questions = query.questions.len(),
                "No single question, skipping"
            );
            return StageResponse::Empty;
        };

        let query_name = normalize_domain(&question.name);
        let query_type = question.record_type;

        debug!(
            request_id = %request_id,
            domain = %query_name,
            record_type = %query_type,
            "Checking CNAME rules"
        );

        let Some(entry) = table.find_entry(&query_name) else {
            debug!(request_id = %request_id, domain = %query_name, "No CNAME match");
            return StageResponse::Empty;
        };

        let rule = &entry.rule;
        info!(
            request_id = %request_id,
            domain = %query_name,
            pattern = %entry.pattern,
            target = %rule.target,
            "CNAME match"
        );

        let response =
            CnameResponseBuilder::build(query, &query_name, &rule.target, query_type, rule);

        match self.codec.encode(&response) {
            Ok(wire) => {
                debug!(
                    request_id = %request_id,
                    answers = response.answers.len(),
                    bytes = wire.len(),
                    "CNAME response built"
                );
                StageResponse::Answer { response, wire }
            }
            Err(e) => {
                error!(
                    request_id = %request_id,
                    domain = %query_name,
                    error = %e,
                    "CNAME injection failed"
                );
                StageResponse::Error {
                    stage: CNAME_INJECTOR_STAGE,
                    error: e,
                }
            }
        }
    }
}
