use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::engine::compare_match;
use crate::models::{ComparisonResult, MatchId, MatchRecord, RankTier};

#[derive(Debug, Deserialize)]
pub struct RadarParams {
    pub puuid: String,
    pub rank: Option<String>,
}

impl RadarParams {
    fn tier(&self, default: RankTier) -> Result<RankTier, ApiError> {
        match self.rank.as_deref() {
            None | Some("") => Ok(default),
            Some(rank) => rank.parse().map_err(ApiError::BadRequest),
        }
    }
}

fn compare(
    state: &AppState,
    record: &MatchRecord,
    params: &RadarParams,
) -> Result<Json<ComparisonResult>, ApiError> {
    let tier = params.tier(state.radar.rank)?;
    let result = compare_match(record, &params.puuid, tier, &state.benchmarks)?;
    Ok(Json(result))
}

/// Radar comparison for a match in the store.
pub async fn stored_radar(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Query(params): Query<RadarParams>,
) -> Result<Json<ComparisonResult>, ApiError> {
    let record = state.store.load(&MatchId::from(match_id))?;
    compare(&state, &record, &params)
}

/// Radar comparison for a match record supplied in the request body.
pub async fn inline_radar(
    State(state): State<AppState>,
    Query(params): Query<RadarParams>,
    body: Result<Json<MatchRecord>, JsonRejection>,
) -> Result<Json<ComparisonResult>, ApiError> {
    let Json(record) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    compare(&state, &record, &params)
}
