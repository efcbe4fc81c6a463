pub mod loader;
pub mod store;

pub use loader::{LoadedRules, RulesFileLoader};
pub use store::RuleStore;
