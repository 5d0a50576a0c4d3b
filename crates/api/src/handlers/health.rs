use axum::Json;
use serde_json::{json, Value};
use tracing::{info, instrument};

#[instrument(skip_all)]
pub async fn health_check() -> Json<Value> {
    info!("Health check requested");
    Json(json!({ "status": "ok" }))
}
