use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    auth::{self, require_jwt},
    config::Config,
    main_lib::AppState,
    models,
};

mod assets;
mod dashboard;
mod wallets;

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        auth::register,
        auth::login,
        auth::me,
        wallets::list_wallets,
        wallets::create_wallet,
        wallets::update_wallet,
        wallets::delete_wallet,
        assets::list_assets,
        assets::create_asset,
        assets::update_asset,
        assets::delete_asset,
        dashboard::get_dashboard,
    ),
    components(schemas(
        models::RegisterRequest,
        models::RegisterResponse,
        models::LoginRequest,
        models::LoginResponse,
        models::UserProfile,
        models::SuccessResponse,
        models::Wallet,
        models::WalletPayload,
        models::WalletSummary,
        models::Asset,
        models::AssetPayload,
        models::AssetStats,
        models::WalletStats,
        models::Dashboard,
    )),
    tags((name = "walletfolio"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin {o}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        CorsLayer::new().allow_origin(origins)
    };
    let cors = cors.allow_methods(Any).allow_headers(Any);

    let openapi = ApiDoc::openapi();

    let protected = Router::new()
        .route("/auth/me", get(auth::me))
        .merge(wallets::router())
        .merge(assets::router())
        .merge(dashboard::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_jwt));

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .merge(protected);

    Ok(Router::new()
        .nest("/api/v1", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http()))
}
