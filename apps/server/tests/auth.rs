mod common;

use axum::http::{Method, StatusCode};
use common::build_test_app;
use serde_json::json;

#[tokio::test]
async fn register_login_and_me() {
    let app = build_test_app().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({ "name": "Alice", "email": "  Alice@Example.COM ", "password": "secret1" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["name"], "Alice");
    assert!(body["user"].get("passwordHash").is_none());

    // Login is case-insensitive on the email.
    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "ALICE@example.com", "password": "secret1" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["expiresIn"], 3600);
    let token = body["accessToken"].as_str().unwrap();

    let (status, me) = app.send(Method::GET, "/api/v1/auth/me", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "alice@example.com");
    assert_eq!(me["name"], "Alice");
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let app = build_test_app().await;
    app.register_and_login("bob@example.com").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({ "email": "BOB@example.com", "password": "another-secret" })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 409);
}

#[tokio::test]
async fn registration_validates_input() {
    let app = build_test_app().await;

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({ "email": "carol@example.com", "password": "short" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({ "email": "not-an-email", "password": "long-enough" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(json!({ "password": "long-enough" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = build_test_app().await;
    app.register_and_login("dave@example.com").await;

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "dave@example.com", "password": "wrong-password" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": "nobody@example.com", "password": "whatever" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_require_a_bearer_token() {
    let app = build_test_app().await;

    for uri in ["/api/v1/wallets", "/api/v1/dashboard", "/api/v1/auth/me"] {
        let (status, _) = app.send(Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }

    let (status, _) = app
        .send(Method::GET, "/api/v1/wallets", Some("not-a-jwt"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
