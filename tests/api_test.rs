use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use movie_browser::config::Config;
use movie_browser::server;
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Helper to build the full application against the mock upstream
fn setup_app(upstream: &MockServer) -> Router {
    let uri = upstream.uri();
    let config = Config::from_vars(|key| match key {
        "API_KEY" => Some("test-token".to_string()),
        "TMDB_API_URL" => Some(uri.clone()),
        _ => None,
    });
    let state = server::build_state(&config).expect("Failed to build state");
    server::build_router(state, &config)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let upstream = MockServer::start().await;
    let (status, body) = get_json(setup_app(&upstream), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "movie-browser");
}

#[tokio::test]
async fn test_list_movies_defaults_to_popular() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [
                {"id": 550, "title": "Fight Club", "release_date": "1999-10-15",
                 "poster_path": null, "vote_average": 8.4, "overview": "Soap.",
                 "genre_ids": [18]}
            ]
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let (status, body) = get_json(setup_app(&upstream), "/api/movies").await;

    assert_eq!(status, StatusCode::OK);
    let movies = body.as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["id"], 550);
    assert_eq!(movies[0]["title"], "Fight Club");
}

#[tokio::test]
async fn test_get_movie_not_found_keeps_status() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&upstream)
        .await;

    let (status, body) = get_json(setup_app(&upstream), "/api/movies/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Failed to fetch data: 404");
}

#[tokio::test]
async fn test_get_movie_with_non_numeric_id_is_json_not_found() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let (status, body) = get_json(setup_app(&upstream), "/api/movies/abc").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Movie not found");
}

#[tokio::test]
async fn test_get_movie_flattens_summary_fields() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/27205"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 27205,
            "title": "Inception",
            "runtime": 148
        })))
        .mount(&upstream)
        .await;

    let (status, body) = get_json(setup_app(&upstream), "/api/movies/27205").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 27205);
    assert_eq!(body["title"], "Inception");
    assert_eq!(body["runtime"], 148);
}

#[tokio::test]
async fn test_unparseable_upstream_is_bad_gateway() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&upstream)
        .await;

    let (status, body) = get_json(setup_app(&upstream), "/api/movies").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().starts_with("Failed to parse JSON"));
}

#[tokio::test]
async fn test_search_requires_a_query() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let app = setup_app(&upstream);
    for uri in ["/api/search", "/api/search?query=%20"] {
        let (status, body) = get_json(app.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No search query provided");
    }
}

#[tokio::test]
async fn test_search_returns_matches() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "heat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": 949, "title": "Heat", "release_date": "1995-12-15",
                         "vote_average": 7.9, "overview": "", "genre_ids": [80]}]
        })))
        .mount(&upstream)
        .await;

    let (status, body) = get_json(setup_app(&upstream), "/api/search?query=heat").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["title"], "Heat");
}

#[tokio::test]
async fn test_openapi_document_lists_movie_paths() {
    let upstream = MockServer::start().await;
    let (status, body) = get_json(setup_app(&upstream), "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/movies/{id}"].is_object());
    assert!(body["paths"]["/api/search"].is_object());
}
