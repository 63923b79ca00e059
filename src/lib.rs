pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod state;

pub use application::ports::{ActorClient, ActorConnection, ActorStatus, IdentityProvider};
pub use infrastructure::cache::{QueryCache, QueryFilter, QueryKey, QueryState};
pub use shared::{AppConfig, AppError, Result};
pub use state::AppState;
