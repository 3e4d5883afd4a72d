use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{TestApp, error_messages};

#[tokio::test]
async fn health_is_ok() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn validation_failures_are_422_with_field_messages() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            Method::POST,
            "/api/users",
            None,
            Some(json!({"user": {"username": "jake", "email": "", "password": "jakejake"}})),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_messages(&body),
        ["email: Cannot be blank", "email: '' is invalid email"]
    );
}

#[tokio::test]
async fn malformed_json_is_422() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"user\": "))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_envelope_is_422() {
    let app = TestApp::new();

    let (status, body) = app
        .send(Method::POST, "/api/users", None, Some(json!({"username": "jake"})))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_messages(&body).len(), 1);
}

#[tokio::test]
async fn unknown_article_is_404() {
    let app = TestApp::new();

    let (status, body) = app
        .send(Method::GET, "/api/articles/no_such_article", None, None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_messages(&body), ["article not found"]);
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = TestApp::new();

    let (status, _) = app.send(Method::GET, "/api/user", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.send(Method::GET, "/api/articles/feed", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/articles",
            None,
            Some(json!({"article": {"title": "t", "description": "d", "body": "b"}})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn invalid_token_is_401_even_where_auth_is_optional() {
    let app = TestApp::new();

    let (status, _) = app
        .send(Method::GET, "/api/user", Some("not-a-token"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(Method::GET, "/api/articles", Some("not-a-token"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unsupported_scheme_is_401() {
    let app = TestApp::new();
    let jake = app.register("jake").await;
    let request = Request::builder()
        .uri("/api/user")
        .header(header::AUTHORIZATION, format!("Basic {}", jake.token))
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bearer_scheme_is_accepted() {
    let app = TestApp::new();
    let jake = app.register("jake").await;
    let request = Request::builder()
        .uri("/api/user")
        .header(header::AUTHORIZATION, format!("Bearer {}", jake.token))
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn editing_someone_elses_article_is_403() {
    let app = TestApp::new();
    let jake = app.actor("jake").await;
    let other = app.register("other").await;
    app.publish(&jake, "Hello", &[]).await;

    let (status, _) = app
        .send(
            Method::PUT,
            "/api/articles/hello",
            Some(&other.token),
            Some(json!({"article": {"body": "hijacked"}})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(Method::DELETE, "/api/articles/hello", Some(&other.token), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn exhausted_slug_budget_is_422() {
    let app = TestApp::with_slug_attempts(1);
    let jake = app.register("jake").await;
    let author = app.services.authenticate(&jake.token).await.unwrap();
    app.store.occupy_slug("hello", author.id);

    let (status, body) = app
        .send(
            Method::POST,
            "/api/articles",
            Some(&jake.token),
            Some(json!({"article": {"title": "Hello", "description": "d", "body": "b"}})),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_messages(&body).len(), 1);
}

#[tokio::test]
async fn storage_failure_is_500_without_details() {
    let app = TestApp::new();
    app.store.break_storage();

    let (status, body) = app.send(Method::GET, "/api/tags", None, None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_messages(&body), ["internal server error"]);
}
