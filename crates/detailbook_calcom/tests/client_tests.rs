//! HTTP-level tests for the Cal.com client against a mock server.

use chrono::NaiveDate;
use detailbook_calcom::CalcomClient;
use detailbook_common::{Attendee, BookingError, BookingOrder, SchedulingService};
use detailbook_config::CalcomConfig;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn direct_client(base_url: String) -> CalcomClient {
    let config = CalcomConfig {
        username: "southern-utah-detailing".to_string(),
        base_url: Some(base_url),
        api_version: None,
        api_key: Some("test-key".to_string()),
        time_zone: Some("America/Denver".to_string()),
        language: Some("en".to_string()),
    };
    CalcomClient::direct(&config).unwrap()
}

fn order(start: chrono::DateTime<chrono::Utc>) -> BookingOrder {
    BookingOrder {
        event_type_slug: "express-wash".to_string(),
        start,
        attendee: Attendee {
            name: "Dana Rivera".to_string(),
            email: "dana@example.com".to_string(),
            time_zone: "America/Denver".to_string(),
            language: "en".to_string(),
        },
        location: Some("410 Red Hills Pkwy, St. George, UT 84770".to_string()),
        phone: "(435) 555-0188".to_string(),
    }
}

#[tokio::test]
async fn slots_for_date_sends_credentials_and_sorts_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slots"))
        .and(query_param("username", "southern-utah-detailing"))
        .and(query_param("eventTypeSlug", "express-wash"))
        .and(query_param("start", "2025-06-04"))
        .and(query_param("end", "2025-06-04"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("cal-api-version", "2024-08-13"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "2025-06-04": [
                    { "start": "2025-06-04T20:00:00Z" },
                    { "start": "2025-06-04T15:00:00Z" }
                ]
            }
        })))
        .mount(&server)
        .await;

    let client = direct_client(server.uri());
    let date = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
    let times = client.slots_for_date("express-wash", date).await.unwrap();

    assert_eq!(times.len(), 2);
    assert!(times[0] < times[1], "slots must come back in ascending order");
}

#[tokio::test]
async fn a_day_with_no_slots_is_an_ok_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .mount(&server)
        .await;

    let client = direct_client(server.uri());
    let date = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
    let times = client.slots_for_date("express-wash", date).await.unwrap();
    assert!(times.is_empty());
}

#[tokio::test]
async fn evening_slots_stay_on_their_venue_local_day() {
    // 8:30 PM in St. George on June 4th is 02:30 UTC on June 5th. The slot
    // must still be requested under, keyed by and returned for June 4th.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slots"))
        .and(query_param("start", "2025-06-04"))
        .and(query_param("end", "2025-06-04"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "2025-06-04": [ { "start": "2025-06-05T02:30:00Z" } ]
            }
        })))
        .mount(&server)
        .await;

    let client = direct_client(server.uri());
    let date = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
    let times = client.slots_for_date("express-wash", date).await.unwrap();
    assert_eq!(times.len(), 1);
}

#[tokio::test]
async fn upstream_rejection_surfaces_status_and_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slots"))
        .respond_with(ResponseTemplate::new(500).set_body_string("calendar backend down"))
        .mount(&server)
        .await;

    let client = direct_client(server.uri());
    let date = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
    let err = SchedulingService::slots_for_date(&client, "express-wash", date)
        .await
        .unwrap_err();
    match err {
        BookingError::Upstream {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 500);
            assert!(message.contains("calendar backend down"));
        }
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_booking_returns_the_confirmation_reference() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bookings"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "username": "southern-utah-detailing",
            "eventTypeSlug": "express-wash",
            "attendee": { "email": "dana@example.com", "timeZone": "America/Denver" },
            "metadata": { "phone": "(435) 555-0188" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": { "uid": "bkg_7f3a", "status": "accepted" }
        })))
        .mount(&server)
        .await;

    let client = direct_client(server.uri());
    let start = "2025-06-04T20:00:00Z".parse().unwrap();
    let confirmation = SchedulingService::create_booking(&client, order(start))
        .await
        .unwrap();
    assert_eq!(confirmation.reference, "bkg_7f3a");
    assert_eq!(confirmation.status, "accepted");
}

#[tokio::test]
async fn slot_conflict_maps_to_upstream_409() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bookings"))
        .respond_with(
            ResponseTemplate::new(409).set_body_string("slot is no longer available"),
        )
        .mount(&server)
        .await;

    let client = direct_client(server.uri());
    let start = "2025-06-04T20:00:00Z".parse().unwrap();
    let err = SchedulingService::create_booking(&client, order(start))
        .await
        .unwrap_err();
    match err {
        BookingError::Upstream { status_code, .. } => assert_eq!(status_code, 409),
        other => panic!("expected Upstream error, got {other:?}"),
    }
}
