use crate::domain::value_objects::{PrincipalId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: PrincipalId,
    pub display_name: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub join_date: Timestamp,
}

impl Profile {
    pub fn new(id: PrincipalId, display_name: String, join_date: Timestamp) -> Self {
        Self {
            id,
            display_name,
            bio: String::new(),
            interests: Vec::new(),
            join_date,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_interests(mut self, interests: Vec<String>) -> Self {
        self.interests = interests;
        self
    }

    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|tag| tag == interest)
    }
}

/// Fields accepted by create/update/save profile calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub display_name: String,
    pub bio: String,
    pub interests: Vec<String>,
}
