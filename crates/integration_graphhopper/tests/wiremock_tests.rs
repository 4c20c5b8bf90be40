//! Integration tests for the GraphHopper clients (wiremock-based)

#![allow(clippy::panic)]

use domain::value_objects::GeoPoint;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_graphhopper::{
    GeocodingClient, GraphHopperConfig, GraphHopperError, GraphHopperGeocodingClient,
    GraphHopperRoutingClient, RoutingClient,
};

fn config_for_mock(base_url: &str) -> GraphHopperConfig {
    GraphHopperConfig {
        base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        timeout_secs: 5,
        ..GraphHopperConfig::default()
    }
}

fn paris() -> GeoPoint {
    GeoPoint::new(48.8566, 2.3522).unwrap()
}

fn lyon() -> GeoPoint {
    GeoPoint::new(45.764, 4.8357).unwrap()
}

const fn sample_geocode_json() -> &'static str {
    r#"{
        "hits": [{
            "point": { "lat": 48.8566, "lng": 2.3522 },
            "name": "Paris",
            "country": "France",
            "osm_key": "place"
        }],
        "locale": "en"
    }"#
}

const fn sample_route_json() -> &'static str {
    r#"{
        "paths": [
            { "points": "_p~iF~ps|U_ulLnnqC", "distance": 465123.4, "time": 16380000 },
            { "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@", "distance": 480900.0, "time": 16920000 }
        ],
        "info": { "took": 8 }
    }"#
}

// ============================================================================
// Geocoding
// ============================================================================

#[tokio::test]
async fn test_geocode_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .and(query_param("q", "Paris"))
        .and(query_param("locale", "en"))
        .and(query_param("limit", "1"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_geocode_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GraphHopperGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let point = client.geocode("Paris").await.unwrap();

    assert_eq!(point, Some(paris()));
}

#[tokio::test]
async fn test_geocode_no_hits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"hits": []}"#))
        .mount(&server)
        .await;

    let client = GraphHopperGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    assert_eq!(client.geocode("Atlantis").await.unwrap(), None);
}

#[tokio::test]
async fn test_geocode_missing_hits_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = GraphHopperGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    assert_eq!(client.geocode("Atlantis").await.unwrap(), None);
}

#[tokio::test]
async fn test_geocode_query_with_suffix_is_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .and(query_param("q", "Vinjanampadu, India"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"hits": [{"point": {"lat": 16.3, "lng": 80.4}}]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = GraphHopperGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let point = client.geocode("Vinjanampadu, India").await.unwrap();
    assert_eq!(point, Some(GeoPoint::new(16.3, 80.4).unwrap()));
}

#[tokio::test]
async fn test_geocode_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"message": "Wrong credentials. Register and get a valid API key"}"#),
        )
        .mount(&server)
        .await;

    let client = GraphHopperGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.geocode("Paris").await.unwrap_err();

    match err {
        GraphHopperError::RequestFailed { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("Wrong credentials"));
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_geocode_out_of_range_point_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"hits": [{"point": {"lat": 123.0, "lng": 2.0}}]}"#,
        ))
        .mount(&server)
        .await;

    let client = GraphHopperGeocodingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.geocode("Nowhere").await.unwrap_err();
    assert!(matches!(err, GraphHopperError::ParseError(_)));
}

// ============================================================================
// Routing
// ============================================================================

#[tokio::test]
async fn test_route_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .and(query_param("point", "48.8566,2.3522"))
        .and(query_param("point", "45.764,4.8357"))
        .and(query_param("vehicle", "car"))
        .and(query_param("points_encoded", "true"))
        .and(query_param("algorithm", "alternative_route"))
        .and(query_param("max_paths", "3"))
        .and(query_param("locale", "en"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();
    let paths = client.route(paris(), lyon(), "car").await.unwrap();

    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].points, "_p~iF~ps|U_ulLnnqC");
    assert!((paths[0].distance - 465_123.4).abs() < f64::EPSILON);
    assert_eq!(paths[0].time, 16_380_000);
    assert_eq!(paths[1].time, 16_920_000);
}

#[tokio::test]
async fn test_route_empty_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"paths": []}"#))
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();
    assert!(client.route(paris(), lyon(), "car").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_route_missing_paths_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"info": {"took": 1}}"#))
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();
    assert!(client.route(paris(), lyon(), "car").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_route_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.route(paris(), lyon(), "car").await.unwrap_err();

    assert!(matches!(
        err,
        GraphHopperError::RateLimitExceeded {
            retry_after_secs: Some(30)
        }
    ));
}

#[tokio::test]
async fn test_route_bad_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"message": "Cannot find point 0: 0.0,0.0"}"#),
        )
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.route(paris(), lyon(), "car").await.unwrap_err();

    match err {
        GraphHopperError::RequestFailed { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Cannot find point 0: 0.0,0.0");
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_route_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.route(paris(), lyon(), "car").await.unwrap_err();

    // Plain-text bodies carry no message
    assert!(matches!(
        err,
        GraphHopperError::RequestFailed { status: 500, ref message } if message.is_empty()
    ));
}

#[tokio::test]
async fn test_route_invalid_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = GraphHopperRoutingClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.route(paris(), lyon(), "car").await.unwrap_err();
    assert!(matches!(err, GraphHopperError::ParseError(_)));
}

#[tokio::test]
async fn test_route_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sample_route_json())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = GraphHopperConfig {
        timeout_secs: 1,
        ..config_for_mock(&server.uri())
    };
    let client = GraphHopperRoutingClient::new(&config).unwrap();
    let err = client.route(paris(), lyon(), "car").await.unwrap_err();

    assert!(matches!(err, GraphHopperError::Timeout { timeout_secs: 1 }));
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on the discard port
    let config = config_for_mock("http://127.0.0.1:9");
    let client = GraphHopperRoutingClient::new(&config).unwrap();
    let err = client.route(paris(), lyon(), "car").await.unwrap_err();
    assert!(matches!(err, GraphHopperError::ConnectionFailed(_)));
}
