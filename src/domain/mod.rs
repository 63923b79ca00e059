pub mod constants;
pub mod entities;
pub mod value_objects;

pub use constants::INTEREST_CATALOG;
pub use entities::{Post, Profile, ProfileDraft, Reply, UserRole};
pub use value_objects::{InterestSelection, PrincipalId, Timestamp};
