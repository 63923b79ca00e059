use super::Validate;
use crate::domain::entities::{Profile, ProfileDraft};
use crate::shared::format::{interest_preview, joined_label, long_date};
use serde::{Deserialize, Serialize};

/// Tags shown on a profile card before collapsing into "+N".
pub const INTEREST_PREVIEW_LIMIT: usize = 4;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProfileResponse {
    pub id: String,
    pub display_name: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub interest_preview: Vec<String>,
    pub hidden_interest_count: usize,
    pub join_date: u64,
    pub joined_label: String,
    pub member_since: String,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        let (interest_preview, hidden_interest_count) =
            interest_preview(&profile.interests, INTEREST_PREVIEW_LIMIT);
        Self {
            id: profile.id.to_string(),
            joined_label: joined_label(profile.join_date),
            member_since: long_date(profile.join_date),
            join_date: profile.join_date.as_nanos(),
            display_name: profile.display_name,
            bio: profile.bio,
            interests: profile.interests,
            interest_preview,
            hidden_interest_count,
        }
    }
}

/// Body of create, update and save-profile calls.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProfileRequest {
    pub display_name: String,
    pub bio: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Validate for ProfileRequest {
    fn validate(&self) -> Result<(), String> {
        if self.display_name.trim().is_empty() {
            return Err("Display name is required.".to_string());
        }
        Ok(())
    }
}

impl From<ProfileRequest> for ProfileDraft {
    fn from(request: ProfileRequest) -> Self {
        ProfileDraft {
            display_name: request.display_name,
            bio: request.bio.unwrap_or_default(),
            interests: request.interests,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiscoverRequest {
    pub interests: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InterestOption {
    pub name: String,
    pub selected: bool,
}
