pub mod discovery_service;
pub mod mutation;
pub mod post_service;
pub mod profile_service;
pub mod query_gate;
pub mod role_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use discovery_service::DiscoveryService;
pub use mutation::{MutationState, MutationTracker};
pub use post_service::PostService;
pub use profile_service::ProfileService;
pub use query_gate::{DisabledReason, QueryGate};
pub use role_service::RoleService;
