use std::time::Duration;

use jikan_api::types::{Anime, Response};
use jikan_api::{AnimeQuery, Client, ClientConfig, Error, PagedQuery, QueryParams};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

async fn last_query(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await.unwrap();
    requests.last().unwrap().url.query().map(str::to_string)
}

#[tokio::test]
async fn get_by_id_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime/1"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("anime.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.anime.by_id(1).await.unwrap();
    assert_eq!(resp.data.title, "Cowboy Bebop");
    assert_eq!(last_query(&mock_server).await, None);
}

#[tokio::test]
async fn query_params_sent_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime"))
        .and(query_param("q", "naruto"))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("anime_search.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = AnimeQuery::default().with_search("naruto").with_limit(10);
    let resp = client.anime.search(&query).await.unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(
        last_query(&mock_server).await.as_deref(),
        Some("q=naruto&limit=10")
    );
}

#[tokio::test]
async fn null_params_are_dropped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let params = QueryParams::new()
        .with("q", "naruto")
        .with("page", None::<u32>)
        .with("sfw", true);
    let _: Value = client.request("/anime", &params).await.unwrap();
    assert_eq!(
        last_query(&mock_server).await.as_deref(),
        Some("q=naruto&sfw=true")
    );
}

#[tokio::test]
async fn not_found_carries_json_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "type": "BadResponseException",
            "message": "Resource does not exist",
            "error": "404 on https://myanimelist.net/anime/999999/"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.anime.by_id(999999).await.unwrap_err();
    assert_eq!(err.status(), 404);
    assert_eq!(err.message(), "API request failed with status 404");
    assert_eq!(
        err.data().and_then(|d| d["message"].as_str()),
        Some("Resource does not exist")
    );
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn non_json_error_body_gives_empty_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top/anime"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>Service Unavailable</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.top.anime(&Default::default()).await.unwrap_err();
    assert_eq!(err.status(), 503);
    assert_eq!(err.data(), Some(&json!({})));
}

#[tokio::test]
async fn unreadable_error_body_keeps_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime/1"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("content-encoding", "gzip")
                .set_body_bytes(b"definitely not gzip".to_vec()),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.anime.by_id(1).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    assert_eq!(err.status(), 404);
    assert_eq!(err.data(), Some(&json!({})));
}

#[tokio::test]
async fn unreadable_success_body_is_a_transport_fault() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-encoding", "gzip")
                .set_body_bytes(b"definitely not gzip".to_vec()),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.anime.by_id(1).await.unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));
    assert_eq!(err.status(), 500);
}

#[tokio::test]
async fn rate_limited_response_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/random/anime"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "status": 429,
            "type": "RateLimitException",
            "message": "You are being rate-limited."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.random.anime().await.unwrap_err();
    assert_eq!(err.status(), 429);
    assert_eq!(err.data().unwrap()["type"], "RateLimitException");
}

#[tokio::test]
async fn slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("anime.json"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(&mock_server.uri())
        .with_timeout(Duration::from_millis(50));
    let client = Client::with_config(config);
    let err = client.anime.by_id(1).await.unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(err.status(), 408);
    assert_eq!(err.message(), "Request timeout");
    assert!(err.data().is_none());
}

#[tokio::test]
async fn connection_refused_is_a_transport_fault() {
    let client = Client::with_base_url("http://127.0.0.1:1");
    let err = client.random.manga().await.unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));
    assert_eq!(err.status(), 500);
    assert!(!err.message().is_empty());
    assert!(err.data().is_none());
}

#[tokio::test]
async fn custom_header_overrides_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/genres/anime"))
        .and(header("accept", "application/vnd.jikan+json"))
        .and(header("x-client", "jikan-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(&mock_server.uri())
        .with_header("ACCEPT", "application/vnd.jikan+json")
        .with_header("X-Client", "jikan-tests");
    let client = Client::with_config(config);
    let resp = client.genres.anime(&Default::default()).await.unwrap();
    assert!(resp.data.is_empty());
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.anime.by_id(1).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert_eq!(err.status(), 500);
}

#[tokio::test]
async fn untyped_request_passes_body_through() {
    let mock_server = MockServer::start().await;
    let body = json!({"data": {"mal_id": 1, "unexpected": [1, 2, 3]}});

    Mock::given(method("GET"))
        .and(path("/anime/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let first: Value = client.request("/anime/1", &QueryParams::new()).await.unwrap();
    let second: Value = client.request("/anime/1", &QueryParams::new()).await.unwrap();
    assert_eq!(first, body);
    assert_eq!(first, second);

    // The same body fails typed decoding.
    let typed = client
        .request::<Response<Anime>, _>("/anime/1", &QueryParams::new())
        .await;
    assert!(matches!(typed, Err(Error::Decode { .. })));
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("anime.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/anime/2"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let other = client.clone();
    let (ok, missing) = tokio::join!(client.anime.by_id(1), other.anime.by_id(2));
    assert_eq!(ok.unwrap().data.mal_id, 1);
    assert_eq!(missing.unwrap_err().status(), 404);
}
