//! In-process store.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use super::{AvailabilityStore, UserStore};
use crate::auth::AuthError;
use crate::availability::AvailabilityError;
use crate::models::auth::{NewUser, User, UserWithPassword};
use crate::models::availability::{AvailabilityRecord, AvailabilityStatus, DateStatus};
use crate::uuid::uuidv7;

/// Keyed like the SQL schema: users by email, availability by
/// `(property_id, date)`, so the same uniqueness rules hold.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserWithPassword>>,
    availability: RwLock<HashMap<String, BTreeMap<NaiveDate, AvailabilityRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserWithPassword>, AuthError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn insert_user_if_absent(&self, user: &NewUser) -> Result<bool, AuthError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Ok(false);
        }
        users.insert(
            user.email.clone(),
            UserWithPassword {
                user: User {
                    id: user.id.to_string(),
                    email: user.email.clone(),
                    role: user.role,
                    created_at: user.created_at,
                },
                password_hash: user.password_hash.clone(),
            },
        );
        Ok(true)
    }

    async fn user_count(&self) -> Result<i64, AuthError> {
        Ok(self.users.read().await.len() as i64)
    }
}

#[async_trait]
impl AvailabilityStore for MemoryStore {
    async fn replace_blocked_dates(
        &self,
        property_id: &str,
        dates: &[NaiveDate],
    ) -> Result<(), AvailabilityError> {
        let mut all = self.availability.write().await;
        let days = all.entry(property_id.to_string()).or_default();
        days.retain(|_, r| r.status != AvailabilityStatus::Blocked);
        for date in dates {
            days.entry(*date).or_insert_with(|| AvailabilityRecord {
                id: uuidv7(),
                property_id: property_id.to_string(),
                date: *date,
                status: AvailabilityStatus::Blocked,
            });
        }
        Ok(())
    }

    async fn upsert_booked_dates(
        &self,
        property_id: &str,
        dates: &[NaiveDate],
    ) -> Result<(), AvailabilityError> {
        let mut all = self.availability.write().await;
        let days = all.entry(property_id.to_string()).or_default();
        for date in dates {
            days.entry(*date)
                .and_modify(|r| r.status = AvailabilityStatus::Booked)
                .or_insert_with(|| AvailabilityRecord {
                    id: uuidv7(),
                    property_id: property_id.to_string(),
                    date: *date,
                    status: AvailabilityStatus::Booked,
                });
        }
        Ok(())
    }

    async fn unavailable_records(
        &self,
        property_id: &str,
    ) -> Result<Vec<DateStatus>, AvailabilityError> {
        let all = self.availability.read().await;
        Ok(all
            .get(property_id)
            .map(|days| {
                days.values()
                    .filter(|r| AvailabilityStatus::UNAVAILABLE.contains(&r.status))
                    .map(DateStatus::from)
                    .collect()
            })
            .unwrap_or_default())
    }
}
