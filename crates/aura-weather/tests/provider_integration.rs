//! Integration tests for WeatherProvider using wiremock.
//!
//! These tests verify request shaping and response parsing against a mock
//! Open-Meteo server.

use aura_weather::WeatherProvider;
use chrono::Timelike;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": 20.75,
        "longitude": 78.6,
        "current": {
            "time": "2026-08-29T14:00",
            "temperature_2m": 27.4,
            "relative_humidity_2m": 74.0,
            "apparent_temperature": 31.2,
            "weather_code": 63,
            "wind_speed_10m": 11.5,
            "visibility": 8200.0,
            "precipitation": 1.4
        },
        "hourly": {
            "time": ["2026-08-29T13:00", "2026-08-29T14:00", "2026-08-29T15:00"],
            "temperature_2m": [26.8, 27.4, 27.1],
            "weather_code": [61, 63, 63],
            "precipitation_probability": [40, 65, 70]
        },
        "daily": {
            "time": ["2026-08-29"],
            "uv_index_max": [6.5],
            "precipitation_probability_max": [80]
        }
    })
}

fn air_quality_body() -> serde_json::Value {
    serde_json::json!({
        "current": {
            "time": "2026-08-29T14:00",
            "pm2_5": 18.3
        }
    })
}

async fn mock_provider(server: &MockServer) -> WeatherProvider {
    WeatherProvider::with_base_urls(
        format!("{}/v1/forecast", server.uri()),
        format!("{}/v1/air-quality", server.uri()),
    )
    .unwrap()
}

#[tokio::test]
async fn fetch_shapes_snapshot() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/air-quality"))
        .and(query_param("current", "pm2_5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(air_quality_body()))
        .mount(&server)
        .await;

    let provider = mock_provider(&server).await;
    let snapshot = provider.fetch(20.7478, 78.6022).await.unwrap();

    assert_eq!(snapshot.current.weather_code, 63);
    assert!((snapshot.current.temperature - 27.4).abs() < f64::EPSILON);
    assert!((snapshot.current.visibility_meters - 8200.0).abs() < f64::EPSILON);

    assert_eq!(snapshot.hourly.len(), 3);
    assert_eq!(snapshot.hourly[0].time.hour(), 13);
    assert_eq!(snapshot.hourly[1].precipitation_probability, 65);

    let today = snapshot.today.unwrap();
    assert_eq!(today.precipitation_probability_max, 80);

    assert!((snapshot.air_quality.pm2_5 - 18.3).abs() < f64::EPSILON);
}

#[tokio::test]
async fn fetch_requests_expected_field_lists() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param(
            "current",
            "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m,visibility,precipitation",
        ))
        .and(query_param(
            "hourly",
            "temperature_2m,weather_code,precipitation_probability",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/air-quality"))
        .respond_with(ResponseTemplate::new(200).set_body_json(air_quality_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = mock_provider(&server).await;
    provider.fetch(20.7478, 78.6022).await.unwrap();
}

#[tokio::test]
async fn fetch_surfaces_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let provider = mock_provider(&server).await;
    let err = provider.fetch(20.7478, 78.6022).await.unwrap_err();

    assert!(matches!(err, aura_weather::WeatherError::Status(503)));
}

#[tokio::test]
async fn fetch_rejects_mismatched_hourly_series() {
    let server = MockServer::start().await;

    let mut body = forecast_body();
    body["hourly"]["temperature_2m"] = serde_json::json!([26.8]);

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/air-quality"))
        .respond_with(ResponseTemplate::new(200).set_body_json(air_quality_body()))
        .mount(&server)
        .await;

    let provider = mock_provider(&server).await;
    let err = provider.fetch(20.7478, 78.6022).await.unwrap_err();

    assert!(matches!(err, aura_weather::WeatherError::Parse(_)));
}

#[tokio::test]
async fn fetch_tolerates_missing_daily_block() {
    let server = MockServer::start().await;

    let mut body = forecast_body();
    body.as_object_mut().unwrap().remove("daily");

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/air-quality"))
        .respond_with(ResponseTemplate::new(200).set_body_json(air_quality_body()))
        .mount(&server)
        .await;

    let provider = mock_provider(&server).await;
    let snapshot = provider.fetch(20.7478, 78.6022).await.unwrap();

    assert!(snapshot.today.is_none());
}
