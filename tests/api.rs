//! Integration tests for the Aladhan API client.
//!
//! These tests use wiremock to simulate the prayer-times API and verify
//! URL construction, response parsing, and error handling.

use chrono::NaiveDate;
use sunnah_sleep::{config::NetworkConfig, prayer::AladhanClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn network_config() -> NetworkConfig {
    NetworkConfig {
        request_timeout_secs: 10,
        connect_timeout_secs: 5,
    }
}

const TIMINGS_BODY: &str = r#"{
    "code": 200,
    "status": "OK",
    "data": {
        "timings": {
            "Fajr": "04:12",
            "Sunrise": "05:48",
            "Dhuhr": "13:01",
            "Asr": "16:38",
            "Maghrib": "20:13",
            "Isha": "21:42",
            "Imsak": "04:02",
            "Midnight": "01:01"
        }
    }
}"#;

/// Successful coordinate lookup parses the nested envelope.
#[tokio::test]
async fn test_timings_by_coords_success() {
    let mock_server = MockServer::start().await;
    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/timings/15-06-2025"))
        .and(query_param("latitude", "41.0082"))
        .and(query_param("longitude", "28.9784"))
        .and(query_param("method", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TIMINGS_BODY))
        .mount(&mock_server)
        .await;

    let client =
        AladhanClient::new(mock_server.uri(), 2, &network_config()).expect("client should build");

    let timings = client
        .timings_by_coords(41.0082, 28.9784, date)
        .await
        .expect("fetch should succeed");

    assert_eq!(timings.fajr, "04:12");
    assert_eq!(timings.isha, "21:42");
}

/// The request date must be zero-padded DD-MM-YYYY.
#[tokio::test]
async fn test_request_date_is_zero_padded() {
    let mock_server = MockServer::start().await;
    let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/timings/05-01-2026"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TIMINGS_BODY))
        .mount(&mock_server)
        .await;

    let client = AladhanClient::new(mock_server.uri(), 2, &network_config()).unwrap();
    let result = client.timings_by_coords(30.0444, 31.2357, date).await;
    assert!(result.is_ok(), "padded date path should be hit: {:?}", result);
}

/// Address lookup uses the timingsByAddress endpoint with the address as a
/// query parameter.
#[tokio::test]
async fn test_timings_by_address_success() {
    let mock_server = MockServer::start().await;
    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/timingsByAddress/15-06-2025"))
        .and(query_param("address", "Cairo, Egypt"))
        .and(query_param("method", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TIMINGS_BODY))
        .mount(&mock_server)
        .await;

    let client = AladhanClient::new(mock_server.uri(), 3, &network_config()).unwrap();
    let timings = client
        .timings_by_address("Cairo, Egypt", date)
        .await
        .expect("fetch should succeed");

    assert_eq!(timings.maghrib, "20:13");
}

/// Non-2xx responses surface as errors, not panics.
#[tokio::test]
async fn test_server_error_is_reported() {
    let mock_server = MockServer::start().await;
    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = AladhanClient::new(mock_server.uri(), 2, &network_config()).unwrap();
    let result = client.timings_by_coords(41.0, 28.9, date).await;

    assert!(result.is_err());
    let message = format!("{}", result.unwrap_err());
    assert!(message.contains("500"), "error should name the status: {}", message);
}

/// A body that is not the expected envelope is a parse error.
#[tokio::test]
async fn test_malformed_body_is_reported() {
    let mock_server = MockServer::start().await;
    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": {}}"#))
        .mount(&mock_server)
        .await;

    let client = AladhanClient::new(mock_server.uri(), 2, &network_config()).unwrap();
    let result = client.timings_by_coords(41.0, 28.9, date).await;

    assert!(result.is_err());
}

/// Extra fields in the timings object (Imsak, Midnight, ...) are ignored.
#[tokio::test]
async fn test_extra_timing_fields_are_ignored() {
    let mock_server = MockServer::start().await;
    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TIMINGS_BODY))
        .mount(&mock_server)
        .await;

    let client = AladhanClient::new(mock_server.uri(), 2, &network_config()).unwrap();
    let timings = client.timings_by_coords(41.0, 28.9, date).await.unwrap();

    assert_eq!(timings.sunrise, "05:48");
}
