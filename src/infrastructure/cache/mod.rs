pub mod query_cache;
pub mod query_key;
pub mod query_state;

pub use query_cache::{CacheSnapshot, QueryCache};
pub use query_key::{QueryFilter, QueryKey, QueryNamespace};
pub use query_state::{QueryData, QueryState, QueryValue};
