//! Availability domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityError;

/// Why a day is unavailable. Each value is written by exactly one feed:
/// `blocked` by the full-replace calendar feed, `booked` by reservations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Blocked,
    Booked,
}

impl AvailabilityStatus {
    /// Every status that makes a day unavailable to guests.
    pub const UNAVAILABLE: [AvailabilityStatus; 2] = [Self::Blocked, Self::Booked];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blocked => "blocked",
            Self::Booked => "booked",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvailabilityStatus {
    type Err = AvailabilityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "blocked" => Ok(Self::Blocked),
            "booked" => Ok(Self::Booked),
            other => Err(AvailabilityError::Corrupt(format!(
                "unknown availability status '{other}'"
            ))),
        }
    }
}

/// One stored row of the availability mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRecord {
    pub id: uuid::Uuid,
    pub property_id: String,
    pub date: NaiveDate,
    pub status: AvailabilityStatus,
}

/// Public projection of a row: `{date, status}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateStatus {
    pub date: NaiveDate,
    pub status: AvailabilityStatus,
}

impl From<&AvailabilityRecord> for DateStatus {
    fn from(record: &AvailabilityRecord) -> Self {
        Self {
            date: record.date,
            status: record.status,
        }
    }
}
