pub mod post;
pub mod profile;
pub mod user_role;

pub use post::{Post, Reply, sort_newest_first};
pub use profile::{Profile, ProfileDraft};
pub use user_role::UserRole;
