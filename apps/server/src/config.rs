use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Raw `WLT_SECRET_KEY`; decoded by `auth::decode_secret_key`.
    pub secret_key: Option<String>,
    pub access_token_ttl: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("WLT_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid WLT_LISTEN_ADDR")?;
        let db_path = std::env::var("WLT_DB_PATH").unwrap_or_else(|_| "./db/app.db".into());
        let cors_allow = std::env::var("WLT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("WLT_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let secret_key = std::env::var("WLT_SECRET_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let ttl_minutes: u64 = std::env::var("WLT_ACCESS_TOKEN_TTL_MINUTES")
            .unwrap_or_else(|_| "1440".into())
            .parse()
            .unwrap_or(1440);
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            secret_key,
            access_token_ttl: Duration::from_secs(ttl_minutes * 60),
        })
    }
}
