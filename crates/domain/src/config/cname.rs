use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CnameConfig {
    #[serde(default = "default_rules_file")]
    pub rules_file: String,

    /// Seconds between rules file reloads; 0 turns reloading off.
    #[serde(default = "default_reload_interval")]
    pub reload_interval_secs: u64,
}

impl Default for CnameConfig {
    fn default() -> Self {
        Self {
            rules_file: default_rules_file(),
            reload_interval_secs: default_reload_interval(),
        }
    }
}

fn default_rules_file() -> String {
    "cname-rules.json".to_string()
}

fn default_reload_interval() -> u64 {
    30
}
