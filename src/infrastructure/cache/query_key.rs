use crate::domain::value_objects::InterestSelection;
use std::fmt;

/// Groups of keys that can be invalidated together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryNamespace {
    Posts,
    CurrentUserProfile,
    Profile,
    Discover,
}

impl QueryNamespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryNamespace::Posts => "posts",
            QueryNamespace::CurrentUserProfile => "currentUserProfile",
            QueryNamespace::Profile => "profile",
            QueryNamespace::Discover => "discover",
        }
    }
}

/// Logical identity of one remote read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    AllPosts,
    CallerProfile,
    /// Keyed by the requested text, which may not be a valid principal.
    Profile(String),
    /// Interest tags in selection order.
    Discover(Vec<String>),
}

impl QueryKey {
    pub fn profile(raw_key: impl Into<String>) -> Self {
        QueryKey::Profile(raw_key.into())
    }

    pub fn discover(selection: &InterestSelection) -> Self {
        QueryKey::Discover(selection.as_slice().to_vec())
    }

    pub fn namespace(&self) -> QueryNamespace {
        match self {
            QueryKey::AllPosts => QueryNamespace::Posts,
            QueryKey::CallerProfile => QueryNamespace::CurrentUserProfile,
            QueryKey::Profile(_) => QueryNamespace::Profile,
            QueryKey::Discover(_) => QueryNamespace::Discover,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::AllPosts | QueryKey::CallerProfile => f.write_str(self.namespace().as_str()),
            QueryKey::Profile(id) => write!(f, "profile:{id}"),
            QueryKey::Discover(tags) => write!(f, "discover:{}", tags.join(",")),
        }
    }
}

/// Selects the entries an invalidation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFilter {
    Exact(QueryKey),
    Namespace(QueryNamespace),
}

impl QueryFilter {
    pub fn matches(&self, key: &QueryKey) -> bool {
        match self {
            QueryFilter::Exact(expected) => expected == key,
            QueryFilter::Namespace(namespace) => key.namespace() == *namespace,
        }
    }
}

impl From<QueryKey> for QueryFilter {
    fn from(key: QueryKey) -> Self {
        QueryFilter::Exact(key)
    }
}

impl From<QueryNamespace> for QueryFilter {
    fn from(namespace: QueryNamespace) -> Self {
        QueryFilter::Namespace(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_filter_matches_every_profile_key() {
        let filter = QueryFilter::Namespace(QueryNamespace::Profile);
        assert!(filter.matches(&QueryKey::profile("aaaaa-aa")));
        assert!(filter.matches(&QueryKey::profile("garbage")));
        assert!(!filter.matches(&QueryKey::CallerProfile));
    }

    #[test]
    fn exact_filter_matches_one_key() {
        let filter = QueryFilter::from(QueryKey::AllPosts);
        assert!(filter.matches(&QueryKey::AllPosts));
        assert!(!filter.matches(&QueryKey::profile("aaaaa-aa")));
    }

    #[test]
    fn discover_key_follows_selection_order() {
        let a = QueryKey::discover(&InterestSelection::new(["Yoga", "Bhakti"]));
        let b = QueryKey::discover(&InterestSelection::new(["Bhakti", "Yoga"]));
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "discover:Yoga,Bhakti");
        assert_eq!(a.namespace(), b.namespace());
    }
}
