//! Availability database queries.
//!
//! Writes for one webhook call run inside a single transaction, so readers on
//! other connections never see a half-applied feed.

use chrono::NaiveDate;
use sqlx::PgPool;

use super::AvailabilityError;
use crate::models::availability::{AvailabilityStatus, DateStatus};
use crate::uuid::uuidv7;

/// Replace the `blocked` rows of a property.
pub async fn replace_blocked_dates(
    pool: &PgPool,
    property_id: &str,
    dates: &[NaiveDate],
) -> Result<(), AvailabilityError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM availability WHERE property_id = $1 AND status = $2")
        .bind(property_id)
        .bind(AvailabilityStatus::Blocked.as_str())
        .execute(&mut *tx)
        .await?;

    for date in dates {
        // A booked day keeps its booking; it is unavailable either way.
        sqlx::query(
            "INSERT INTO availability (id, property_id, date, status) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (property_id, date) DO NOTHING",
        )
        .bind(uuidv7())
        .bind(property_id)
        .bind(*date)
        .bind(AvailabilityStatus::Blocked.as_str())
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Upsert `booked` rows keyed by `(property_id, date)`.
pub async fn upsert_booked_dates(
    pool: &PgPool,
    property_id: &str,
    dates: &[NaiveDate],
) -> Result<(), AvailabilityError> {
    let mut tx = pool.begin().await?;

    for date in dates {
        sqlx::query(
            "INSERT INTO availability (id, property_id, date, status) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (property_id, date) \
             DO UPDATE SET status = EXCLUDED.status, updated_at = now()",
        )
        .bind(uuidv7())
        .bind(property_id)
        .bind(*date)
        .bind(AvailabilityStatus::Booked.as_str())
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Fetch unavailable rows for a property, ordered by date.
pub async fn unavailable_records(
    pool: &PgPool,
    property_id: &str,
) -> Result<Vec<DateStatus>, AvailabilityError> {
    let statuses: Vec<String> = AvailabilityStatus::UNAVAILABLE
        .iter()
        .map(|s| s.as_str().to_string())
        .collect();

    let rows = sqlx::query_as::<_, (NaiveDate, String)>(
        "SELECT date, status FROM availability \
         WHERE property_id = $1 AND status = ANY($2) \
         ORDER BY date",
    )
    .bind(property_id)
    .bind(statuses)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|(date, status)| {
            Ok(DateStatus {
                date,
                status: status.parse()?,
            })
        })
        .collect()
}
