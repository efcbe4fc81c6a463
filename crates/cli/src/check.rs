use ferrous_cname_application::use_cases::InjectCnameUseCase;
use ferrous_cname_domain::{
    DnsQueryMessage, DnsQuestion, RecordData, RecordType, StageContext, StageResponse,
    DNS_CLASS_IN,
};

/// One-shot lookup against the loaded rules. Prints the synthesized answer
/// section, or "no match".
pub fn run_check(use_case: &InjectCnameUseCase, name: &str, qtype: &str) -> anyhow::Result<()> {
    let record_type: RecordType = qtype.parse().map_err(anyhow::Error::msg)?;
    let query = DnsQueryMessage::new(0, vec![DnsQuestion::new(name, record_type, DNS_CLASS_IN)]);

    match use_case.execute(&StageContext::new("check", query)) {
        StageResponse::Answer { response, wire } => {
            println!(";; {} {} -> {} bytes", name, record_type, wire.len());
            for record in &response.answers {
                let data = match &record.data {
                    RecordData::Cname(target) => format!("{}.", target),
                    RecordData::A(ip) => ip.to_string(),
                    RecordData::Aaaa(ip) => ip.to_string(),
                };
                println!(
                    "{}.\t{}\tIN\t{}\t{}",
                    record.name,
                    record.ttl,
                    record.record_type(),
                    data
                );
            }
            if record_type.is_address() && response.answers.len() == 1 {
                println!(";; no {} address configured for the target", record_type);
            }
            Ok(())
        }
        StageResponse::Empty => {
            println!(";; {} {}: no match", name, record_type);
            Ok(())
        }
        StageResponse::Error { stage, error } => {
            anyhow::bail!("{} failed: {}", stage, error)
        }
    }
}
