use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::engine::analyze_match;
use crate::models::{MatchAnalysis, MatchDetails, MatchId, MatchSummary};

const DEFAULT_MATCH_COUNT: usize = 20;
const MAX_MATCH_COUNT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct PlayerParams {
    pub puuid: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchListParams {
    pub puuid: String,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<MatchSummary>,
    pub total: usize,
}

/// Recent stored matches for a player, newest first.
pub async fn list_matches(
    State(state): State<AppState>,
    Query(params): Query<MatchListParams>,
) -> Result<Json<MatchListResponse>, ApiError> {
    let count = params
        .count
        .unwrap_or(DEFAULT_MATCH_COUNT)
        .clamp(1, MAX_MATCH_COUNT);

    let mut matches: Vec<MatchSummary> = state
        .store
        .load_all()?
        .iter()
        .filter_map(|record| MatchSummary::from_record(record, &params.puuid))
        .collect();

    matches.sort_by(|a, b| {
        b.game_creation
            .cmp(&a.game_creation)
            .then_with(|| a.match_id.as_str().cmp(b.match_id.as_str()))
    });
    let total = matches.len();
    matches.truncate(count);

    tracing::debug!("Found {} matches for {}", total, params.puuid);
    Ok(Json(MatchListResponse { matches, total }))
}

/// Scoreboard for a stored match.
pub async fn match_details(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Query(params): Query<PlayerParams>,
) -> Result<Json<MatchDetails>, ApiError> {
    let record = state.store.load(&MatchId::from(match_id))?;
    Ok(Json(MatchDetails::from_record(
        &record,
        &params.puuid,
        &state.radar.avatar_base_url,
    )))
}

/// Highlights and headline stats for one player in a stored match.
pub async fn match_analysis(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Query(params): Query<PlayerParams>,
) -> Result<Json<MatchAnalysis>, ApiError> {
    let record = state.store.load(&MatchId::from(match_id))?;
    Ok(Json(analyze_match(&record, &params.puuid)?))
}
