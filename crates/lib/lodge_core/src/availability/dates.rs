//! Calendar date parsing and stay expansion.

use chrono::NaiveDate;

use super::AvailabilityError;

/// Longest stay the reservation feed may expand, in nights.
pub const MAX_STAY_NIGHTS: i64 = 366;

/// Most dates one blocked-calendar feed may carry (three years of days).
pub const MAX_FEED_DAYS: usize = 1096;

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, AvailabilityError> {
    let value = value.trim();
    // chrono accepts unpadded fields; the feeds always send the padded form.
    if value.len() != 10 {
        return Err(invalid_date(value));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid_date(value))
}

/// Expand a stay into the nights it occupies: `[arrival, departure)`.
///
/// The departure day is free for the next guest, so it is not included.
pub fn expand_nights(
    arrival: NaiveDate,
    departure: NaiveDate,
) -> Result<Vec<NaiveDate>, AvailabilityError> {
    if arrival >= departure {
        return Err(AvailabilityError::Validation(
            "arrivalDate must be before departureDate".into(),
        ));
    }
    if (departure - arrival).num_days() > MAX_STAY_NIGHTS {
        return Err(AvailabilityError::Validation(format!(
            "Stay exceeds {MAX_STAY_NIGHTS} nights"
        )));
    }
    Ok(arrival.iter_days().take_while(|d| *d < departure).collect())
}

fn invalid_date(value: &str) -> AvailabilityError {
    AvailabilityError::Validation(format!("Invalid date '{value}', expected YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn departure_day_is_excluded() {
        let nights = expand_nights(d("2026-03-01"), d("2026-03-04")).unwrap();
        assert_eq!(vec![d("2026-03-01"), d("2026-03-02"), d("2026-03-03")], nights);
    }

    #[test]
    fn single_night_stay() {
        let nights = expand_nights(d("2026-12-31"), d("2027-01-01")).unwrap();
        assert_eq!(vec![d("2026-12-31")], nights);
    }

    #[test]
    fn stay_across_leap_day() {
        let nights = expand_nights(d("2028-02-28"), d("2028-03-01")).unwrap();
        assert_eq!(vec![d("2028-02-28"), d("2028-02-29")], nights);
    }

    #[test]
    fn empty_or_inverted_stay_is_rejected() {
        assert!(expand_nights(d("2026-03-04"), d("2026-03-04")).is_err());
        assert!(expand_nights(d("2026-03-04"), d("2026-03-01")).is_err());
    }

    #[test]
    fn overly_long_stay_is_rejected() {
        assert!(expand_nights(d("2026-01-01"), d("2027-01-02")).is_ok());
        assert!(expand_nights(d("2026-01-01"), d("2027-01-03")).is_err());
    }

    #[test]
    fn parse_requires_iso_day() {
        assert!(parse_date("2026-02-20").is_ok());
        assert!(parse_date("2026-2-20").is_err());
        assert!(parse_date("20/02/2026").is_err());
        assert!(parse_date("2026-02-30").is_err());
        assert!(parse_date("2026-02-20T00:00:00Z").is_err());
    }
}
