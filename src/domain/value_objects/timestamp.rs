use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Actor time: nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    pub fn from_datetime(value: DateTime<Utc>) -> Self {
        let nanos = value.timestamp_nanos_opt().unwrap_or_default().max(0);
        Self(nanos as u64)
    }

    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub const fn as_nanos(&self) -> u64 {
        self.0
    }

    pub fn as_millis(&self) -> i64 {
        (self.0 / NANOS_PER_MILLI) as i64
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.as_millis())
            .single()
            .unwrap_or_default()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
