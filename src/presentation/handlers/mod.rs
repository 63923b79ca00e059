pub mod discovery_handler;
pub mod post_handler;
pub mod profile_handler;
pub mod role_handler;

pub use discovery_handler::DiscoveryHandler;
pub use post_handler::PostHandler;
pub use profile_handler::ProfileHandler;
pub use role_handler::RoleHandler;
