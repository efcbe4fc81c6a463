pub mod builders;

#[allow(unused_imports)]
pub use builders::{proxy_rule, table, QueryMessageBuilder};
