//! Feed application and reads over an [`AvailabilityStore`].
//!
//! Inputs arrive as raw strings from the webhooks; everything is validated
//! here before the store is touched.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::info;

use super::AvailabilityError;
use super::dates::{MAX_FEED_DAYS, expand_nights, parse_date};
use crate::models::availability::DateStatus;
use crate::store::AvailabilityStore;

fn require_property(property_id: &str) -> Result<&str, AvailabilityError> {
    let property_id = property_id.trim();
    if property_id.is_empty() {
        return Err(AvailabilityError::Validation("propertyId is required".into()));
    }
    Ok(property_id)
}

/// Apply a calendar feed: the property's blocked days become exactly `dates`.
///
/// Duplicates are collapsed. Returns the number of distinct days applied.
/// Feeds longer than [`MAX_FEED_DAYS`] are rejected before any write.
pub async fn apply_blocked_feed(
    store: &dyn AvailabilityStore,
    property_id: &str,
    dates: &[String],
) -> Result<usize, AvailabilityError> {
    let property_id = require_property(property_id)?;
    if dates.len() > MAX_FEED_DAYS {
        return Err(AvailabilityError::Validation(format!(
            "blockedDates exceeds {MAX_FEED_DAYS} entries"
        )));
    }
    let days = dates
        .iter()
        .map(|d| parse_date(d))
        .collect::<Result<BTreeSet<NaiveDate>, _>>()?;
    let days: Vec<NaiveDate> = days.into_iter().collect();

    store.replace_blocked_dates(property_id, &days).await?;
    info!(property_id, days = days.len(), "applied blocked-date feed");
    Ok(days.len())
}

/// Apply a reservation: every night of `[arrival, departure)` becomes booked.
///
/// Returns the booked nights.
pub async fn apply_booking(
    store: &dyn AvailabilityStore,
    property_id: &str,
    arrival: &str,
    departure: &str,
) -> Result<Vec<NaiveDate>, AvailabilityError> {
    let property_id = require_property(property_id)?;
    let nights = expand_nights(parse_date(arrival)?, parse_date(departure)?)?;

    store.upsert_booked_dates(property_id, &nights).await?;
    info!(property_id, nights = nights.len(), "applied booking");
    Ok(nights)
}

/// Sorted, distinct unavailable days for a property. Unknown properties yield
/// an empty list.
pub async fn unavailable_dates(
    store: &dyn AvailabilityStore,
    property_id: &str,
) -> Result<Vec<NaiveDate>, AvailabilityError> {
    let records = unavailable_records(store, property_id).await?;
    let days: BTreeSet<NaiveDate> = records.into_iter().map(|r| r.date).collect();
    Ok(days.into_iter().collect())
}

/// Unavailable rows for a property as `{date, status}`, ordered by date.
pub async fn unavailable_records(
    store: &dyn AvailabilityStore,
    property_id: &str,
) -> Result<Vec<DateStatus>, AvailabilityError> {
    let property_id = require_property(property_id)?;
    store.unavailable_records(property_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::availability::AvailabilityStatus;
    use crate::store::MemoryStore;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn booked(s: &str) -> DateStatus {
        DateStatus {
            date: d(s),
            status: AvailabilityStatus::Booked,
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    async fn dates_of(store: &MemoryStore, property_id: &str) -> Vec<NaiveDate> {
        unavailable_dates(store, property_id).await.unwrap()
    }

    #[tokio::test]
    async fn blocked_feed_replaces_previous_feed() {
        let store = MemoryStore::new();
        apply_blocked_feed(&store, "p1", &strings(&["2026-02-20", "2026-02-21"]))
            .await
            .unwrap();
        apply_blocked_feed(&store, "p1", &strings(&["2026-02-22"]))
            .await
            .unwrap();

        assert_eq!(vec![d("2026-02-22")], dates_of(&store, "p1").await);
    }

    #[tokio::test]
    async fn replaying_blocked_feed_is_idempotent() {
        let store = MemoryStore::new();
        let feed = strings(&["2026-02-21", "2026-02-20", "2026-02-20"]);
        assert_eq!(2, apply_blocked_feed(&store, "p1", &feed).await.unwrap());
        let first = dates_of(&store, "p1").await;
        apply_blocked_feed(&store, "p1", &feed).await.unwrap();

        assert_eq!(first, dates_of(&store, "p1").await);
        assert_eq!(vec![d("2026-02-20"), d("2026-02-21")], first);
    }

    #[tokio::test]
    async fn invalid_date_leaves_store_untouched() {
        let store = MemoryStore::new();
        apply_blocked_feed(&store, "p1", &strings(&["2026-02-20"]))
            .await
            .unwrap();
        let err = apply_blocked_feed(&store, "p1", &strings(&["2026-02-21", "tomorrow"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AvailabilityError::Validation(_)));
        assert_eq!(vec![d("2026-02-20")], dates_of(&store, "p1").await);
    }

    #[tokio::test]
    async fn oversized_feed_is_rejected_before_writing() {
        let store = MemoryStore::new();
        apply_blocked_feed(&store, "p1", &strings(&["2026-02-20"]))
            .await
            .unwrap();
        let feed: Vec<String> = d("2026-01-01")
            .iter_days()
            .take(MAX_FEED_DAYS + 1)
            .map(|day| day.to_string())
            .collect();

        let err = apply_blocked_feed(&store, "p1", &feed).await.unwrap_err();

        assert!(matches!(err, AvailabilityError::Validation(_)));
        assert_eq!(vec![d("2026-02-20")], dates_of(&store, "p1").await);
    }

    #[tokio::test]
    async fn feed_at_the_limit_is_accepted() {
        let store = MemoryStore::new();
        let feed: Vec<String> = d("2026-01-01")
            .iter_days()
            .take(MAX_FEED_DAYS)
            .map(|day| day.to_string())
            .collect();

        let applied = apply_blocked_feed(&store, "p1", &feed).await.unwrap();

        assert_eq!(MAX_FEED_DAYS, applied);
    }

    #[tokio::test]
    async fn booking_books_each_night() {
        let store = MemoryStore::new();
        let nights = apply_booking(&store, "p2", "2026-03-01", "2026-03-04")
            .await
            .unwrap();
        assert_eq!(3, nights.len());

        let records = unavailable_records(&store, "p2").await.unwrap();
        assert_eq!(
            vec![
                booked("2026-03-01"),
                booked("2026-03-02"),
                booked("2026-03-03"),
            ],
            records
        );
    }

    #[tokio::test]
    async fn overlapping_bookings_do_not_duplicate_days() {
        let store = MemoryStore::new();
        apply_booking(&store, "p2", "2026-03-01", "2026-03-04")
            .await
            .unwrap();
        apply_booking(&store, "p2", "2026-03-03", "2026-03-05")
            .await
            .unwrap();

        let records = unavailable_records(&store, "p2").await.unwrap();
        assert_eq!(4, records.len());
    }

    #[tokio::test]
    async fn blocked_feed_does_not_erase_bookings() {
        let store = MemoryStore::new();
        apply_booking(&store, "p3", "2026-05-10", "2026-05-12")
            .await
            .unwrap();
        apply_blocked_feed(&store, "p3", &strings(&["2026-05-11", "2026-05-20"]))
            .await
            .unwrap();
        apply_blocked_feed(&store, "p3", &[]).await.unwrap();

        let records = unavailable_records(&store, "p3").await.unwrap();
        assert_eq!(vec![booked("2026-05-10"), booked("2026-05-11")], records);
    }

    #[tokio::test]
    async fn unknown_property_reads_empty() {
        let store = MemoryStore::new();
        assert!(dates_of(&store, "unknown-property").await.is_empty());
    }

    #[tokio::test]
    async fn blank_property_is_rejected() {
        let store = MemoryStore::new();
        assert!(matches!(
            unavailable_dates(&store, "  ").await,
            Err(AvailabilityError::Validation(_))
        ));
        assert!(matches!(
            apply_booking(&store, "", "2026-03-01", "2026-03-02").await,
            Err(AvailabilityError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn properties_are_isolated() {
        let store = MemoryStore::new();
        apply_blocked_feed(&store, "a", &strings(&["2026-01-01"]))
            .await
            .unwrap();
        apply_blocked_feed(&store, "b", &strings(&["2026-01-02"]))
            .await
            .unwrap();
        assert_eq!(vec![d("2026-01-01")], dates_of(&store, "a").await);
        assert_eq!(vec![d("2026-01-02")], dates_of(&store, "b").await);
    }
}
