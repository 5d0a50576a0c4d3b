use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use quartz_dns_domain::{DomainError, RecordType};
use tracing::{debug, info};

use crate::{
    dto::{CreateRecordRequest, RecordResponse, UpdateRecordRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/zones/{zone}/records", get(list_records))
        .route("/zones/{zone}/records", post(create_record))
        .route("/zones/{zone}/records/{id}", get(get_record))
        .route("/zones/{zone}/records/{id}", put(update_record))
        .route("/zones/{zone}/records/{id}", delete(delete_record))
}

async fn list_records(
    State(state): State<AppState>,
    Path(zone): Path<String>,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    let records = state.list_records.execute(&zone).await?;
    debug!(zone = %zone, count = records.len(), "Records retrieved");
    Ok(Json(
        records
            .into_iter()
            .map(RecordResponse::from_record)
            .collect(),
    ))
}

async fn create_record(
    State(state): State<AppState>,
    Path(zone): Path<String>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let record_type = req
        .record_type
        .parse::<RecordType>()
        .map_err(|_| ApiError(DomainError::UnsupportedRecordType(req.record_type.clone())))?;

    let record = state
        .create_record
        .execute(
            &zone,
            req.name,
            record_type,
            req.content,
            req.ttl,
            req.priority.unwrap_or(0),
        )
        .await?;

    info!(
        zone = %zone,
        name = %record.name,
        record_type = %record.record_type,
        "Record created"
    );

    Ok((
        StatusCode::CREATED,
        Json(RecordResponse::from_record(record)),
    ))
}

async fn get_record(
    State(state): State<AppState>,
    Path((zone, id)): Path<(String, i64)>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = state.get_record.execute(&zone, id).await?;
    Ok(Json(RecordResponse::from_record(record)))
}

async fn update_record(
    State(state): State<AppState>,
    Path((zone, id)): Path<(String, i64)>,
    Json(req): Json<UpdateRecordRequest>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = state
        .update_record
        .execute(&zone, id, req.content, req.ttl, req.priority)
        .await?;

    info!(zone = %zone, id, "Record updated");

    Ok(Json(RecordResponse::from_record(record)))
}

async fn delete_record(
    State(state): State<AppState>,
    Path((zone, id)): Path<(String, i64)>,
) -> Result<StatusCode, ApiError> {
    state.delete_record.execute(&zone, id).await?;
    info!(zone = %zone, id, "Record deleted");
    Ok(StatusCode::NO_CONTENT)
}
