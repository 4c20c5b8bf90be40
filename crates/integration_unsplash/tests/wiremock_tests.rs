//! Integration tests for the Unsplash client (wiremock-based)

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_unsplash::{ImageSearchClient, UnsplashClient, UnsplashConfig, UnsplashError};

fn config_for_mock(base_url: &str) -> UnsplashConfig {
    UnsplashConfig {
        base_url: base_url.to_string(),
        access_key: "test-access-key".to_string(),
        timeout_secs: 5,
        ..UnsplashConfig::default()
    }
}

const fn sample_search_json() -> &'static str {
    r#"{
        "total": 2,
        "total_pages": 2,
        "results": [
            {
                "id": "first",
                "urls": {
                    "regular": "https://images.unsplash.com/photo-first?w=1080",
                    "small": "https://images.unsplash.com/photo-first?w=400"
                }
            },
            {
                "id": "second",
                "urls": { "regular": "https://images.unsplash.com/photo-second?w=1080" }
            }
        ]
    }"#
}

#[tokio::test]
async fn test_first_photo_url_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .and(query_param("query", "Taj Mahal"))
        .and(query_param("client_id", "test-access-key"))
        .and(query_param("orientation", "landscape"))
        .and(query_param("per_page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = UnsplashClient::new(&config_for_mock(&server.uri())).unwrap();
    let url = client.first_photo_url("Taj Mahal").await.unwrap();

    assert_eq!(
        url.as_deref(),
        Some("https://images.unsplash.com/photo-first?w=1080")
    );
}

#[tokio::test]
async fn test_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"total": 0, "total_pages": 0, "results": []}"#),
        )
        .mount(&server)
        .await;

    let client = UnsplashClient::new(&config_for_mock(&server.uri())).unwrap();
    assert_eq!(client.first_photo_url("qwertyuiop").await.unwrap(), None);
}

#[tokio::test]
async fn test_invalid_access_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"errors": ["OAuth error: The access token is invalid"]}"#),
        )
        .mount(&server)
        .await;

    let client = UnsplashClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.first_photo_url("Goa").await.unwrap_err();
    assert!(matches!(err, UnsplashError::RequestFailed { status: 401 }));
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Rate Limit Exceeded"))
        .mount(&server)
        .await;

    let client = UnsplashClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.first_photo_url("Goa").await.unwrap_err();
    assert!(matches!(err, UnsplashError::ParseError(_)));
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sample_search_json())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = UnsplashConfig {
        timeout_secs: 1,
        ..config_for_mock(&server.uri())
    };
    let client = UnsplashClient::new(&config).unwrap();
    let err = client.first_photo_url("Goa").await.unwrap_err();
    assert!(matches!(err, UnsplashError::Timeout { timeout_secs: 1 }));
}
