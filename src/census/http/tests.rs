//! Unit tests for the Census HTTP client

use super::*;
use crate::core::columns::METRIC_COLUMNS;
use crate::core::table::Cell;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn state_payload() -> serde_json::Value {
    let mut header: Vec<&str> = METRIC_COLUMNS.to_vec();
    header.extend(["YEAR", "state"]);
    json!([
        header,
        ["100", "120", "1500", "5", "12", "10", "150", "140", "10", "2020", "06"],
        ["D", "S", "1600", "6", "13", "11", "160", "150", "10", "2020", "60"]
    ])
}

#[test]
fn test_query_params_without_key() {
    let params = query_params(Dataset::ByState, None);
    assert_eq!(params.len(), 3);
    assert_eq!(params[1], ("for", "state:*".to_string()));
    assert_eq!(params[2], ("YEAR", "*".to_string()));
}

#[test]
fn test_query_params_with_key() {
    let params = query_params(Dataset::National, Some("abc"));
    assert_eq!(params.last().unwrap(), &("key", "abc".to_string()));
}

#[test]
fn test_build_client() {
    assert!(build_client().is_ok());
}

#[tokio::test]
async fn test_fetch_dataset_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/timeseries/bds"))
        .and(query_param("get", Dataset::ByState.get_param()))
        .and(query_param("for", "state:*"))
        .and(query_param("YEAR", "*"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(state_payload()))
        .mount(&mock_server)
        .await;

    let client = build_client().unwrap();
    let url = format!("{}/data/timeseries/bds", mock_server.uri());
    let table = fetch_dataset(&client, &url, Dataset::ByState, None)
        .await
        .unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(1, "FIRM"), Some(&Cell::Text("D".to_string())));
    assert_eq!(table.get(0, "state"), Some(&Cell::Text("06".to_string())));
}

#[tokio::test]
async fn test_fetch_dataset_sends_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("key", "my-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(state_payload()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_client().unwrap();
    let result = fetch_dataset(&client, &mock_server.uri(), Dataset::ByState, Some("my-key")).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_fetch_dataset_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("error: unknown variable"))
        .mount(&mock_server)
        .await;

    let client = build_client().unwrap();
    let result = fetch_dataset(&client, &mock_server.uri(), Dataset::National, None).await;

    match result {
        Err(BdsError::ApiStatus { dataset, status }) => {
            assert_eq!(dataset, Dataset::National);
            assert_eq!(status, 500);
        }
        other => panic!("Expected ApiStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_dataset_non_json_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = build_client().unwrap();
    let result = fetch_dataset(&client, &mock_server.uri(), Dataset::ByFirmAge, None).await;
    assert!(matches!(result, Err(BdsError::MalformedPayload { .. })));
}

#[tokio::test]
async fn test_fetch_dataset_numeric_cells_are_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([["FIRM"], [12]])))
        .mount(&mock_server)
        .await;

    let client = build_client().unwrap();
    let result = fetch_dataset(&client, &mock_server.uri(), Dataset::National, None).await;
    assert!(matches!(result, Err(BdsError::MalformedPayload { .. })));
}
