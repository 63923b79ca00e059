pub mod fake_actor;

pub use fake_actor::*;
