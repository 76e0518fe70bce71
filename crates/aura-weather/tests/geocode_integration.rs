//! Integration tests for city-search geocoding using wiremock.

use aura_weather::{CityResolver, GeocodeError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver(server: &MockServer) -> CityResolver {
    CityResolver::with_base_url(format!("{}/v1/search", server.uri())).unwrap()
}

#[tokio::test]
async fn search_city_uses_first_result_with_region() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "pune"))
        .and(query_param("count", "1"))
        .and(query_param("language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{
                "latitude": 18.5204,
                "longitude": 73.8567,
                "name": "Pune",
                "admin1": "Maharashtra",
                "country": "India"
            }]
        })))
        .mount(&server)
        .await;

    let city = resolver(&server).search_city("pune").await.unwrap();

    assert_eq!(city.display_name, "Pune, Maharashtra");
    assert!((city.latitude - 18.5204).abs() < f64::EPSILON);
}

#[tokio::test]
async fn search_city_falls_back_to_country() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{
                "latitude": 1.3521,
                "longitude": 103.8198,
                "name": "Singapore",
                "country": "Singapore"
            }]
        })))
        .mount(&server)
        .await;

    let city = resolver(&server).search_city("singapore").await.unwrap();

    assert_eq!(city.display_name, "Singapore, Singapore");
}

#[tokio::test]
async fn search_city_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "generationtime_ms": 0.5
        })))
        .mount(&server)
        .await;

    let err = resolver(&server)
        .search_city("zzzznotfound")
        .await
        .unwrap_err();

    match err {
        GeocodeError::CityNotFound(q) => assert_eq!(q, "zzzznotfound"),
        other => panic!("expected CityNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn search_city_surfaces_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = resolver(&server).search_city("pune").await.unwrap_err();

    assert!(matches!(err, GeocodeError::Status(500)));
}

#[tokio::test]
async fn resolver_is_reusable_across_searches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "pune"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{
                "latitude": 18.5204,
                "longitude": 73.8567,
                "name": "Pune",
                "admin1": "Maharashtra",
                "country": "India"
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "zzzznotfound"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": []
        })))
        .mount(&server)
        .await;

    let resolver = resolver(&server);
    let city = resolver.search_city("pune").await.unwrap();
    assert_eq!(city.display_name, "Pune, Maharashtra");

    let err = resolver.search_city("zzzznotfound").await.unwrap_err();
    assert!(matches!(err, GeocodeError::CityNotFound(_)));
}
