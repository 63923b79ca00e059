use crate::domain::entities::{Post, Profile};
use serde::{Deserialize, Serialize};

/// Observable phase of one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum QueryState<T> {
    Pending,
    Resolved(T),
    Errored(String),
}

impl<T> QueryState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, QueryState::Resolved(_))
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, QueryState::Errored(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Resolved(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            QueryState::Resolved(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Errored(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        match self {
            QueryState::Pending => QueryState::Pending,
            QueryState::Resolved(data) => QueryState::Resolved(f(data)),
            QueryState::Errored(message) => QueryState::Errored(message),
        }
    }
}

impl<T: Default> QueryState<T> {
    /// Resolved data, or the empty value while pending or after a failure.
    pub fn data_or_default(self) -> T {
        self.into_data().unwrap_or_default()
    }
}

/// Payload stored in a cache entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryData {
    Posts(Vec<Post>),
    Profile(Option<Profile>),
    Profiles(Vec<Profile>),
}

/// Types that can live in the query cache.
pub trait QueryValue: Clone + Sized {
    fn into_query_data(self) -> QueryData;
    fn from_query_data(data: &QueryData) -> Option<Self>;
}

impl QueryValue for Vec<Post> {
    fn into_query_data(self) -> QueryData {
        QueryData::Posts(self)
    }

    fn from_query_data(data: &QueryData) -> Option<Self> {
        match data {
            QueryData::Posts(posts) => Some(posts.clone()),
            _ => None,
        }
    }
}

impl QueryValue for Option<Profile> {
    fn into_query_data(self) -> QueryData {
        QueryData::Profile(self)
    }

    fn from_query_data(data: &QueryData) -> Option<Self> {
        match data {
            QueryData::Profile(profile) => Some(profile.clone()),
            _ => None,
        }
    }
}

impl QueryValue for Vec<Profile> {
    fn into_query_data(self) -> QueryData {
        QueryData::Profiles(self)
    }

    fn from_query_data(data: &QueryData) -> Option<Self> {
        match data {
            QueryData::Profiles(profiles) => Some(profiles.clone()),
            _ => None,
        }
    }
}
