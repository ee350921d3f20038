//! Integration tests for the HTTP API.
//!
//! These drive the full router through `tower::ServiceExt::oneshot`, no
//! listening socket required.

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use pi_backend::api::{create_router, AppState};
use pi_backend::config::Config;
use pi_backend::pi::PiMethod;

/// Send a GET to the root route, optionally with a User-Agent.
async fn get_root(config: Config, user_agent: Option<&str>) -> Response<Body> {
    let app = create_router(AppState::new(config));

    let mut request = Request::builder().uri("/");
    if let Some(ua) = user_agent {
        request = request.header("User-Agent", ua);
    }

    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn request_without_headers_returns_pi() {
    let response = get_root(Config::default(), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Welcome to the backend service");

    let pi = body["pi"].as_f64().unwrap();
    assert!((pi - 3.14159265).abs() < 1e-6);

    let seconds = body["calculation_time_seconds"].as_f64().unwrap();
    assert!(seconds >= 0.0);
}

#[tokio::test]
async fn browser_user_agent_returns_pi() {
    let response = get_root(
        Config::default(),
        Some("Mozilla/5.0 (X11; Linux x86_64) Firefox/127.0"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn curl_user_agent_is_rejected() {
    let response = get_root(Config::default(), Some("curl/7.68.0")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = json_body(response).await;
    assert_eq!(body, json!({ "error": "curl is not allowed for this endpoint" }));
}

#[tokio::test]
async fn curl_detection_ignores_case() {
    for ua in ["CURL/8.5.0", "Curl", "something-with-cUrL-inside"] {
        let response = get_root(Config::default(), Some(ua)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "ua: {}", ua);
    }
}

#[tokio::test]
async fn extra_header_is_always_present() {
    let ok = get_root(Config::default(), None).await;
    assert_eq!(
        ok.headers().get("X-HEADER-ADD").unwrap(),
        "Heres is how we could add EXTRA headers"
    );

    let rejected = get_root(Config::default(), Some("curl/7.68.0")).await;
    assert_eq!(
        rejected.headers().get("X-HEADER-ADD").unwrap(),
        "Heres is how we could add EXTRA headers"
    );
}

#[tokio::test]
async fn cors_wildcard_origin_is_set() {
    let response = get_root(Config::default(), None).await;
    assert_eq!(
        response
            .headers()
            .get("Access-Control-Allow-Origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn constant_method_returns_exact_pi() {
    let config = Config {
        pi_method: PiMethod::Constant,
        ..Config::default()
    };

    let response = get_root(config, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["pi"].as_f64().unwrap(), std::f64::consts::PI);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = create_router(AppState::new(Config::default()));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, json!({ "status": "ok" }));
}
