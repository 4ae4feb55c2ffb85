use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, patch},
    Extension, Json, Router,
};

use crate::{
    auth::AuthenticatedUser,
    error::ApiResult,
    main_lib::AppState,
    models::{Asset, AssetPayload, SuccessResponse},
};

#[utoipa::path(
    get,
    path = "/api/v1/wallets/{wallet_id}/assets",
    params(("wallet_id" = String, Path, description = "Wallet id")),
    responses((status = 200, body = [Asset]))
)]
pub async fn list_assets(
    Path(wallet_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<Asset>>> {
    let assets = state.asset_service.list_assets(&user.id, &wallet_id)?;
    Ok(Json(assets.into_iter().map(Asset::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/wallets/{wallet_id}/assets",
    params(("wallet_id" = String, Path, description = "Wallet id")),
    request_body = AssetPayload,
    responses((status = 201, body = Asset), (status = 400, description = "Invalid holding"))
)]
pub async fn create_asset(
    Path(wallet_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<AssetPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Asset>)> {
    let Json(payload) = payload?;
    let new_asset = payload.into_new_asset(wallet_id)?;
    let created = state.asset_service.create_asset(&user.id, new_asset).await?;
    Ok((StatusCode::CREATED, Json(Asset::from(created))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/wallets/{wallet_id}/assets/{asset_id}",
    params(
        ("wallet_id" = String, Path, description = "Wallet id"),
        ("asset_id" = String, Path, description = "Asset id"),
    ),
    request_body = AssetPayload,
    responses((status = 200, body = Asset), (status = 404, description = "Unknown wallet or asset"))
)]
pub async fn update_asset(
    Path((wallet_id, asset_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<AssetPayload>, JsonRejection>,
) -> ApiResult<Json<Asset>> {
    let Json(payload) = payload?;
    let update = payload.into_asset_update(wallet_id, asset_id)?;
    let updated = state.asset_service.update_asset(&user.id, update).await?;
    Ok(Json(Asset::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/wallets/{wallet_id}/assets/{asset_id}",
    params(
        ("wallet_id" = String, Path, description = "Wallet id"),
        ("asset_id" = String, Path, description = "Asset id"),
    ),
    responses((status = 200, body = SuccessResponse), (status = 404, description = "Unknown wallet or asset"))
)]
pub async fn delete_asset(
    Path((wallet_id, asset_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<SuccessResponse>> {
    state
        .asset_service
        .delete_asset(&user.id, &wallet_id, &asset_id)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/wallets/{wallet_id}/assets",
            get(list_assets).post(create_asset),
        )
        .route(
            "/wallets/{wallet_id}/assets/{asset_id}",
            patch(update_asset).delete(delete_asset),
        )
}
