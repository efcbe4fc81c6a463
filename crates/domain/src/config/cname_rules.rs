use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::errors::ConfigError;

/// The rules file:
///
/// ```json
/// {
///   "enabled": true,
///   "rules": {
///     "usher.ttvnw.net": { "target": "proxy.example.com", "ipv4": "1.2.3.4" },
///     "*.ttvnw.net":     { "target": "proxy.example.com", "ipv6": "2001:db8::1" }
///   }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CnameRulesDocument {
    #[serde(default = "default_true")]
    pub enabled: bool,

    pub rules: RuleMap,
}

impl CnameRulesDocument {
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CnameRuleConfig {
    pub target: String,

    #[serde(default)]
    pub ipv4: Option<String>,

    #[serde(default)]
    pub ipv6: Option<String>,
}

/// One rule value as read from the file. `Err` carries the reason an entry
/// did not have the rule shape (missing `target`, an address that is not a
/// string, ...); it is rejected on its own when the table is compiled.
pub type RuleValue = Result<CnameRuleConfig, String>;

/// Rule entries in the order they appear in the file.
///
/// Wildcard precedence depends on that order, so this cannot be a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleMap(Vec<(String, RuleValue)>);

impl RuleMap {
    pub fn iter(&self) -> impl Iterator<Item = (&String, &RuleValue)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, CnameRuleConfig)> for RuleMap {
    fn from_iter<I: IntoIterator<Item = (String, CnameRuleConfig)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k, Ok(v))).collect())
    }
}

impl FromIterator<(String, RuleValue)> for RuleMap {
    fn from_iter<I: IntoIterator<Item = (String, RuleValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for RuleMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RuleMapVisitor;

        impl<'de> Visitor<'de> for RuleMapVisitor {
            type Value = RuleMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping domain patterns to CNAME rules")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
                    let rule = serde_json::from_value::<CnameRuleConfig>(value)
                        .map_err(|e| e.to_string());
                    entries.push((key, rule));
                }
                Ok(RuleMap(entries))
            }
        }

        deserializer.deserialize_map(RuleMapVisitor)
    }
}

fn default_true() -> bool {
    true
}
