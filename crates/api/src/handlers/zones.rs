use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use tracing::{debug, info};

use crate::{
    dto::{CreateZoneRequest, ZoneResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/zones", get(list_zones))
        .route("/zones", post(create_zone))
        .route("/zones/{name}", get(get_zone))
        .route("/zones/{name}", delete(delete_zone))
}

async fn list_zones(State(state): State<AppState>) -> Result<Json<Vec<ZoneResponse>>, ApiError> {
    let zones = state.list_zones.execute().await?;
    debug!(count = zones.len(), "Zones retrieved");
    Ok(Json(
        zones.into_iter().map(ZoneResponse::from_zone).collect(),
    ))
}

async fn create_zone(
    State(state): State<AppState>,
    Json(req): Json<CreateZoneRequest>,
) -> Result<(StatusCode, Json<ZoneResponse>), ApiError> {
    let zone = state.create_zone.execute(req.name).await?;
    info!(zone = %zone.name, "Zone created");
    Ok((StatusCode::CREATED, Json(ZoneResponse::from_zone(zone))))
}

async fn get_zone(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ZoneResponse>, ApiError> {
    let zone = state.get_zone.execute(&name).await?;
    Ok(Json(ZoneResponse::from_zone(zone)))
}

async fn delete_zone(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.delete_zone.execute(&name).await?;
    info!(zone = %name, "Zone deleted");
    Ok(StatusCode::NO_CONTENT)
}
