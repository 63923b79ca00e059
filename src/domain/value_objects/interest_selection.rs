use crate::shared::validation::normalize_interests;
use serde::{Deserialize, Serialize};

/// Ordered set of interest tags chosen by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct InterestSelection(Vec<String>);

impl InterestSelection {
    pub fn new<I, S>(interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(normalize_interests(interests))
    }

    /// Adds the tag if absent, removes it otherwise.
    pub fn toggle(&mut self, interest: &str) {
        let tag = interest.trim();
        if tag.is_empty() {
            return;
        }
        if let Some(pos) = self.0.iter().position(|existing| existing == tag) {
            self.0.remove(pos);
        } else {
            self.0.push(tag.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, interest: &str) -> bool {
        self.0.iter().any(|existing| existing == interest)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for InterestSelection {
    fn from(value: Vec<String>) -> Self {
        Self::new(value)
    }
}

impl From<InterestSelection> for Vec<String> {
    fn from(value: InterestSelection) -> Self {
        value.0
    }
}
