//! Calendar day keys used for plan validity windows.

use std::{fmt, str::FromStr};

use jiff::{
    civil::{Date, DateTime},
    tz::TimeZone,
    Timestamp,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, VanSalesError};

/// A calendar day in UTC, held as its `YYYY-MM-DD` key.
///
/// Ordering and equality are those of the key string, so `a < b` holds
/// exactly when the `YYYY-MM-DD` text of `a` sorts before that of `b`.
/// Plan validity checks are defined in terms of that text comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(String);

impl CalendarDay {
    /// The current day in UTC.
    pub fn today() -> Self {
        Self::from_timestamp(Timestamp::now())
    }

    /// Builds the key for a civil date.
    pub fn from_date(date: Date) -> Self {
        Self(date.strftime("%Y-%m-%d").to_string())
    }

    /// The UTC calendar day containing the given instant.
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        Self::from_date(timestamp.to_zoned(TimeZone::UTC).date())
    }

    /// Parses a plan date as sent by the journey plan API.
    ///
    /// Accepted forms:
    /// - `2024-06-10` (taken as that UTC day)
    /// - `2024-06-10T18:30:00Z`, `2024-06-10T23:00:00+05:30` (converted to
    ///   the UTC day of that instant)
    /// - `2024-06-10T09:00:00` (no offset: read in the system time zone,
    ///   then converted to UTC)
    ///
    /// # Errors
    ///
    /// Returns `VanSalesError::InvalidDate` for anything else.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        let invalid = |reason: String| VanSalesError::InvalidDate {
            value: value.to_string(),
            reason,
        };

        if let Ok(timestamp) = value.parse::<Timestamp>() {
            return Ok(Self::from_timestamp(timestamp));
        }

        if value.contains(['T', 't', ' ']) {
            let local: DateTime = value.parse().map_err(|e: jiff::Error| invalid(e.to_string()))?;
            let zoned = local
                .to_zoned(TimeZone::system())
                .map_err(|e| invalid(e.to_string()))?;
            return Ok(Self::from_timestamp(zoned.timestamp()));
        }

        let date: Date = value.parse().map_err(|e: jiff::Error| invalid(e.to_string()))?;
        Ok(Self::from_date(date))
    }

    /// The `YYYY-MM-DD` key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CalendarDay {
    type Err = VanSalesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CalendarDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
