//! Storage seams for users and availability.
//!
//! [`PgStore`] is the production backend. [`MemoryStore`] keeps everything in
//! process and backs the router tests and `--in-memory` demo runs.

pub mod memory;
pub mod pg;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::auth::AuthError;
use crate::availability::AvailabilityError;
use crate::models::auth::{NewUser, UserWithPassword};
use crate::models::availability::DateStatus;

pub use memory::MemoryStore;
pub use pg::PgStore;

/// Persistence for admin accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by already-normalized email.
    async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserWithPassword>, AuthError>;

    /// Insert unless a user with the same email exists. Returns `true` when a
    /// row was written.
    async fn insert_user_if_absent(&self, user: &NewUser) -> Result<bool, AuthError>;

    /// Count users.
    async fn user_count(&self) -> Result<i64, AuthError>;
}

/// Persistence for the per-day availability mirror.
///
/// Every method applies its writes atomically: concurrent readers see either
/// the state before the call or after it.
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// Replace the property's `blocked` days with `dates`. Days already
    /// `booked` stay booked.
    async fn replace_blocked_dates(
        &self,
        property_id: &str,
        dates: &[NaiveDate],
    ) -> Result<(), AvailabilityError>;

    /// Mark each of `dates` as `booked`, overwriting any existing status.
    async fn upsert_booked_dates(
        &self,
        property_id: &str,
        dates: &[NaiveDate],
    ) -> Result<(), AvailabilityError>;

    /// All rows for a property whose status makes the day unavailable,
    /// ordered by date.
    async fn unavailable_records(
        &self,
        property_id: &str,
    ) -> Result<Vec<DateStatus>, AvailabilityError>;
}
