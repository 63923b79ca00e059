use ic_principal::Principal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity key of an authenticated principal, held in its canonical
/// textual form (`xxxxx-xxxxx-...-xxx`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrincipalId(String);

impl PrincipalId {
    /// Parses the textual form. Only the canonical encoding is accepted:
    /// lowercase, dash-grouped, with a matching CRC-32 prefix.
    pub fn parse(text: &str) -> Result<Self, String> {
        let principal = Principal::from_text(text).map_err(|err| err.to_string())?;
        Ok(Self(principal.to_text()))
    }

    /// Builds the textual form from raw principal bytes (at most 29).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        let principal = Principal::try_from_slice(bytes).map_err(|err| err.to_string())?;
        Ok(Self(principal.to_text()))
    }

    /// The anonymous principal used by unauthenticated callers.
    pub fn anonymous() -> Self {
        Self(Principal::anonymous().to_text())
    }

    pub fn is_anonymous(&self) -> bool {
        *self == Self::anonymous()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PrincipalId> for String {
    fn from(value: PrincipalId) -> Self {
        value.0
    }
}

impl TryFrom<String> for PrincipalId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for PrincipalId {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl std::str::FromStr for PrincipalId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
