pub mod rules_reload;
pub mod runner;

pub use rules_reload::RulesReloadJob;
pub use runner::JobRunner;
