use ferrous_cname_domain::DomainError;
use hickory_proto::rr::Name;

/// Rewrites every non-ASCII label to its IDNA `xn--` form, the way the name
/// travels on the wire. ASCII labels (including `*`) pass through untouched.
pub fn to_ascii_domain(name: &str) -> Result<String, DomainError> {
    if name.is_ascii() {
        return Ok(name.to_string());
    }

    let labels = name
        .split('.')
        .map(|label| {
            if label.is_ascii() {
                return Ok(label.to_string());
            }
            Name::from_utf8(label)
                .map(|encoded| encoded.to_ascii().trim_end_matches('.').to_string())
                .map_err(|e| {
                    DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(labels.join("."))
}
