//! In-process endpoint tests against the fully layered router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use hello_service::config::StaticEnv;
use tower::ServiceExt;
use uuid::Uuid;

mod common;

fn app(env: StaticEnv) -> Router {
    common::server_with_env(env).router()
}

async fn send(app: Router, method: &str, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request"),
    )
    .await
    .expect("Request failed")
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

#[tokio::test]
async fn test_root_greeting() {
    let response = send(app(StaticEnv::new()), "GET", "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        body_string(response).await,
        "Hello World! CI/CD Pipeline is working successfully!"
    );
}

#[tokio::test]
async fn test_health() {
    let response = send(app(StaticEnv::new()), "GET", "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await,
        "Application is healthy and running!"
    );
}

#[tokio::test]
async fn test_version_with_build_number() {
    let env = StaticEnv::new().with("BUILD_NUMBER", "42");
    let response = send(app(env), "GET", "/version").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Version: 1.0.0 - Build: 42");
}

#[tokio::test]
async fn test_version_without_build_number() {
    let response = send(app(StaticEnv::new()), "GET", "/version").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await,
        "Version: 1.0.0 - Build: unknown"
    );
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = send(app(StaticEnv::new()), "GET", "/foo").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let response = send(app(StaticEnv::new()), "POST", "/health").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_head_is_served() {
    let response = send(app(StaticEnv::new()), "HEAD", "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let app = app(StaticEnv::new().with("BUILD_NUMBER", "108"));
    for uri in ["/", "/health", "/version"] {
        let first = body_string(send(app.clone(), "GET", uri).await).await;
        let second = body_string(send(app.clone(), "GET", uri).await).await;
        assert_eq!(first, second, "{uri} changed between requests");
    }
}

#[tokio::test]
async fn test_request_id_generated() {
    let response = send(app(StaticEnv::new()), "GET", "/health").await;
    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(Uuid::parse_str(id).is_ok(), "not a UUID: {id}");
}

#[tokio::test]
async fn test_request_id_propagated() {
    let response = app(StaticEnv::new())
        .oneshot(
            Request::builder()
                .uri("/version")
                .header("x-request-id", "deploy-check-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "deploy-check-1");
}
