//! Router tests for the webhooks and the availability read.

mod common;

use axum::http::StatusCode;
use lodge_core::availability::dates::MAX_FEED_DAYS;
use serde_json::json;

use common::*;

#[tokio::test]
async fn hostaway_feed_then_read() {
    let app = app();
    let payload = json!({"propertyId": "p1", "blockedDates": ["2026-02-20", "2026-02-21"]});

    let (status, json) = post_json(&app, "/webhook/hostaway", payload.clone()).await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(json!({"success": true}), json);

    let expected = json!({"blockedDates": ["2026-02-20", "2026-02-21"]});
    let (status, json) = get(&app, "/api/availability?propertyId=p1").await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(expected, json);

    // Replaying the same delivery changes nothing.
    post_json(&app, "/webhook/hostaway", payload).await;
    assert_eq!(expected, get(&app, "/api/availability?propertyId=p1").await.1);
}

#[tokio::test]
async fn hostaway_feed_replaces_previous_days() {
    let app = app();
    post_json(
        &app,
        "/webhook/hostaway",
        json!({"propertyId": "p1", "blockedDates": ["2026-02-20", "2026-02-21"]}),
    )
    .await;
    post_json(
        &app,
        "/webhook/hostaway",
        json!({"propertyId": "p1", "blockedDates": []}),
    )
    .await;

    assert_eq!(
        json!({"blockedDates": []}),
        get(&app, "/api/availability?propertyId=p1").await.1
    );
}

#[tokio::test]
async fn booking_webhook_excludes_departure_day() {
    let app = app();
    let (status, json) = post_json(
        &app,
        "/webhook/availability",
        json!({"propertyId": "p2", "arrivalDate": "2026-03-01", "departureDate": "2026-03-04"}),
    )
    .await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(json!({"success": true}), json);

    let (status, rows) = get(&app, "/api/availability/records?propertyId=p2").await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(
        json!([
            {"date": "2026-03-01", "status": "booked"},
            {"date": "2026-03-02", "status": "booked"},
            {"date": "2026-03-03", "status": "booked"},
        ]),
        rows
    );

    assert_eq!(
        json!({"blockedDates": ["2026-03-01", "2026-03-02", "2026-03-03"]}),
        get(&app, "/api/availability?propertyId=p2").await.1
    );
}

#[tokio::test]
async fn read_merges_blocked_and_booked_days() {
    let app = app();
    post_json(
        &app,
        "/webhook/availability",
        json!({"propertyId": "p3", "arrivalDate": "2026-04-02", "departureDate": "2026-04-04"}),
    )
    .await;
    post_json(
        &app,
        "/webhook/hostaway",
        json!({"propertyId": "p3", "blockedDates": ["2026-04-03", "2026-04-01"]}),
    )
    .await;

    assert_eq!(
        json!({"blockedDates": ["2026-04-01", "2026-04-02", "2026-04-03"]}),
        get(&app, "/api/availability?propertyId=p3").await.1
    );
}

#[tokio::test]
async fn unknown_property_reads_empty() {
    let app = app();
    let (status, json) = get(&app, "/api/availability?propertyId=unknown-property").await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(json!({"blockedDates": []}), json);

    let (status, json) = get(&app, "/api/availability/records?propertyId=unknown-property").await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(json!([]), json);
}

#[tokio::test]
async fn read_requires_property_id() {
    let app = app();
    for uri in ["/api/availability", "/api/availability?propertyId=", "/api/availability/records"] {
        let (status, json) = get(&app, uri).await;
        assert_eq!(StatusCode::BAD_REQUEST, status, "{uri}");
        assert!(json["error"].is_string());
    }
}

#[tokio::test]
async fn hostaway_requires_both_fields() {
    let app = app();
    for body in [
        json!({"propertyId": "p1"}),
        json!({"blockedDates": ["2026-02-20"]}),
        json!({}),
    ] {
        let (status, json) = post_json(&app, "/webhook/hostaway", body).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert!(json["error"].is_string());
    }
}

#[tokio::test]
async fn hostaway_rejects_bad_dates() {
    let app = app();
    let (status, _) = post_json(
        &app,
        "/webhook/hostaway",
        json!({"propertyId": "p1", "blockedDates": ["2026-02-20", "next tuesday"]}),
    )
    .await;
    assert_eq!(StatusCode::BAD_REQUEST, status);
    assert_eq!(
        json!({"blockedDates": []}),
        get(&app, "/api/availability?propertyId=p1").await.1
    );
}

#[tokio::test]
async fn booking_requires_all_fields() {
    let app = app();
    for body in [
        json!({"arrivalDate": "2026-03-01", "departureDate": "2026-03-04"}),
        json!({"propertyId": "p2", "departureDate": "2026-03-04"}),
        json!({"propertyId": "p2", "arrivalDate": "2026-03-01"}),
    ] {
        let (status, _) = post_json(&app, "/webhook/availability", body).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }
}

#[tokio::test]
async fn booking_rejects_inverted_range() {
    let app = app();
    let (status, json) = post_json(
        &app,
        "/webhook/availability",
        json!({"propertyId": "p2", "arrivalDate": "2026-03-04", "departureDate": "2026-03-01"}),
    )
    .await;
    assert_eq!(StatusCode::BAD_REQUEST, status);
    assert_eq!("arrivalDate must be before departureDate", json["error"]);
}

#[tokio::test]
async fn webhook_rejects_unknown_fields() {
    let app = app();
    let (status, json) = post_json(
        &app,
        "/webhook/hostaway",
        json!({"propertyId": "p1", "blockedDates": [], "listingMapId": 42}),
    )
    .await;
    assert_eq!(StatusCode::BAD_REQUEST, status);
    assert_eq!("Invalid request body", json["error"]);
}

#[tokio::test]
async fn hostaway_rejects_oversized_feed() {
    let app = app();
    let start = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let dates: Vec<String> = start
        .iter_days()
        .take(MAX_FEED_DAYS + 1)
        .map(|d| d.to_string())
        .collect();

    let (status, json) = post_json(
        &app,
        "/webhook/hostaway",
        json!({"propertyId": "p1", "blockedDates": dates}),
    )
    .await;
    assert_eq!(StatusCode::BAD_REQUEST, status);
    assert_eq!(
        format!("blockedDates exceeds {MAX_FEED_DAYS} entries"),
        json["error"]
    );
}
