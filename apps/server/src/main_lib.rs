use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use walletfolio_core::{
    assets::{AssetService, AssetServiceTrait},
    portfolio::dashboard::{DashboardService, DashboardServiceTrait},
    users::{UserService, UserServiceTrait},
    wallets::{WalletRepositoryTrait, WalletService, WalletServiceTrait},
};
use walletfolio_storage_sqlite::{db, AssetRepository, UserRepository, WalletRepository};

use crate::auth::{resolve_secret_key, AuthConfig, AuthManager};
use crate::config::Config;

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub wallet_service: Arc<dyn WalletServiceTrait + Send + Sync>,
    pub asset_service: Arc<dyn AssetServiceTrait + Send + Sync>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait + Send + Sync>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("WLT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let wallet_repo: Arc<dyn WalletRepositoryTrait> =
        Arc::new(WalletRepository::new(pool.clone(), writer.clone()));
    let asset_repo = Arc::new(AssetRepository::new(pool.clone(), writer.clone()));

    let user_service = Arc::new(UserService::new(user_repo));
    let wallet_service = Arc::new(WalletService::new(wallet_repo.clone()));
    let asset_service = Arc::new(AssetService::new(asset_repo, wallet_repo.clone()));
    let dashboard_service = Arc::new(DashboardService::new(wallet_repo));

    let jwt_secret = resolve_secret_key(config.secret_key.as_deref())?;
    let auth = Arc::new(AuthManager::new(&AuthConfig {
        jwt_secret,
        access_token_ttl: config.access_token_ttl,
    }));

    Ok(Arc::new(AppState {
        user_service,
        wallet_service,
        asset_service,
        dashboard_service,
        auth,
    }))
}
