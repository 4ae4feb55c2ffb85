use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};

use crate::{
    auth::AuthenticatedUser,
    error::ApiResult,
    main_lib::AppState,
    models::{Dashboard, DashboardParams},
};

#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    params(DashboardParams),
    responses((status = 200, body = Dashboard))
)]
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<DashboardParams>,
) -> ApiResult<Json<Dashboard>> {
    let dashboard = state
        .dashboard_service
        .get_dashboard(&user.id, &params.into())?;
    Ok(Json(Dashboard::from(dashboard)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
