use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, patch},
    Extension, Json, Router,
};
use walletfolio_core::wallets::{NewWallet, WalletUpdate};

use crate::{
    auth::AuthenticatedUser,
    error::ApiResult,
    main_lib::AppState,
    models::{SuccessResponse, Wallet, WalletPayload, WalletSummary},
};

#[utoipa::path(get, path = "/api/v1/wallets", responses((status = 200, body = [WalletSummary])))]
pub async fn list_wallets(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<WalletSummary>>> {
    let wallets = state.wallet_service.list_wallet_summaries(&user.id)?;
    Ok(Json(wallets.into_iter().map(WalletSummary::from).collect()))
}

#[utoipa::path(post, path = "/api/v1/wallets", request_body = WalletPayload, responses((status = 201, body = Wallet)))]
pub async fn create_wallet(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<WalletPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Wallet>)> {
    let Json(payload) = payload?;
    let created = state
        .wallet_service
        .create_wallet(NewWallet {
            id: None,
            user_id: user.id,
            name: payload.name,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(Wallet::from(created))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/wallets/{wallet_id}",
    params(("wallet_id" = String, Path, description = "Wallet id")),
    request_body = WalletPayload,
    responses((status = 200, body = Wallet), (status = 404, description = "Not the caller's wallet"))
)]
pub async fn update_wallet(
    Path(wallet_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<WalletPayload>, JsonRejection>,
) -> ApiResult<Json<Wallet>> {
    let Json(payload) = payload?;
    let updated = state
        .wallet_service
        .update_wallet(WalletUpdate {
            id: Some(wallet_id),
            user_id: user.id,
            name: payload.name,
        })
        .await?;
    Ok(Json(Wallet::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/wallets/{wallet_id}",
    params(("wallet_id" = String, Path, description = "Wallet id")),
    responses((status = 200, body = SuccessResponse), (status = 404, description = "Not the caller's wallet"))
)]
pub async fn delete_wallet(
    Path(wallet_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<SuccessResponse>> {
    state
        .wallet_service
        .delete_wallet(&user.id, &wallet_id)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/wallets", get(list_wallets).post(create_wallet))
        .route(
            "/wallets/{wallet_id}",
            patch(update_wallet).delete(delete_wallet),
        )
}
