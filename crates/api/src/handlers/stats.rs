use axum::{extract::State, Json};
use tracing::{debug, instrument};

use crate::{dto::StatsResponse, state::AppState};

#[instrument(skip(state), name = "api_get_stats")]
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let snapshot = state.stats.snapshot();
    debug!(
        queries = snapshot.queries,
        cache_hits = snapshot.cache_hits,
        cache_misses = snapshot.cache_misses,
        "Statistics retrieved"
    );
    Json(StatsResponse::from_snapshot(snapshot))
}
