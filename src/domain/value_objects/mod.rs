pub mod interest_selection;
pub mod principal_id;
pub mod timestamp;

pub use interest_selection::InterestSelection;
pub use principal_id::PrincipalId;
pub use timestamp::Timestamp;
