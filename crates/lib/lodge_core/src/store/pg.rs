//! PostgreSQL store, delegating to the query modules.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use super::{AvailabilityStore, UserStore};
use crate::auth::{self, AuthError};
use crate::availability::{self, AvailabilityError};
use crate::models::auth::{NewUser, UserWithPassword};
use crate::models::availability::DateStatus;

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserWithPassword>, AuthError> {
        auth::queries::find_user_by_email(&self.pool, email).await
    }

    async fn insert_user_if_absent(&self, user: &NewUser) -> Result<bool, AuthError> {
        auth::queries::insert_user_if_absent(&self.pool, user).await
    }

    async fn user_count(&self) -> Result<i64, AuthError> {
        auth::queries::user_count(&self.pool).await
    }
}

#[async_trait]
impl AvailabilityStore for PgStore {
    async fn replace_blocked_dates(
        &self,
        property_id: &str,
        dates: &[NaiveDate],
    ) -> Result<(), AvailabilityError> {
        availability::queries::replace_blocked_dates(&self.pool, property_id, dates).await
    }

    async fn upsert_booked_dates(
        &self,
        property_id: &str,
        dates: &[NaiveDate],
    ) -> Result<(), AvailabilityError> {
        availability::queries::upsert_booked_dates(&self.pool, property_id, dates).await
    }

    async fn unavailable_records(
        &self,
        property_id: &str,
    ) -> Result<Vec<DateStatus>, AvailabilityError> {
        availability::queries::unavailable_records(&self.pool, property_id).await
    }
}
