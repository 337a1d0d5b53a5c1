//! Availability reconciliation.
//!
//! Mirrors the booking platform's calendar into the `availability` table.
//! Two feeds write here: the calendar feed replaces a property's `blocked`
//! days wholesale, and the reservation feed upserts `booked` days. Reads
//! treat both statuses as unavailable.

pub mod dates;
pub mod queries;
pub mod sync;

use thiserror::Error;

/// Availability errors.
#[derive(Debug, Error)]
pub enum AvailabilityError {
    #[error("{0}")]
    Validation(String),

    #[error("Corrupt availability row: {0}")]
    Corrupt(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),
}
