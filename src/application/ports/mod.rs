pub mod actor_client;
pub mod identity_provider;

pub use actor_client::{ActorClient, ActorConnection, ActorStatus};
pub use identity_provider::IdentityProvider;
