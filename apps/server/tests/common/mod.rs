#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use walletfolio_server::{api::app_router, build_state, config::Config};

pub struct TestApp {
    pub router: Router,
    _tmp: TempDir,
}

pub async fn build_test_app() -> TestApp {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        secret_key: Some(BASE64.encode([42u8; 32])),
        access_token_ttl: Duration::from_secs(3600),
    };
    let state = build_state(&config).await.unwrap();
    TestApp {
        router: app_router(state, &config).unwrap(),
        _tmp: tmp,
    }
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }

    /// Registers a user and returns a bearer token for them.
    pub async fn register_and_login(&self, email: &str) -> String {
        let (status, _) = self
            .send(
                Method::POST,
                "/api/v1/auth/register",
                None,
                Some(serde_json::json!({
                    "name": "Test User",
                    "email": email,
                    "password": "correct-horse",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/auth/login",
                None,
                Some(serde_json::json!({ "email": email, "password": "correct-horse" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["accessToken"].as_str().unwrap().to_string()
    }

    pub async fn create_wallet(&self, token: &str, name: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/wallets",
                Some(token),
                Some(serde_json::json!({ "name": name })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_asset(
        &self,
        token: &str,
        wallet_id: &str,
        symbol: &str,
        quantity: f64,
        purchase_price: f64,
        current_price: f64,
    ) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                &format!("/api/v1/wallets/{wallet_id}/assets"),
                Some(token),
                Some(serde_json::json!({
                    "type": "stock",
                    "symbol": symbol,
                    "name": format!("{symbol} Corp"),
                    "quantity": quantity,
                    "purchasePrice": purchase_price,
                    "currentPrice": current_price,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().to_string()
    }
}
