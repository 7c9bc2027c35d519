//! Match comparison engine.
//!
//! Pure functions over an already-loaded [`MatchRecord`]:
//! - **position**: effective role from redundant position fields
//! - **team**: team membership from slot order
//! - **opponent**: lane opponent selection
//! - **highlights**: notable events from end-of-game counters
//!
//! [`compare_match`] wires them together with the rate and normalization
//! functions in [`crate::calculate`].

pub mod highlights;
pub mod opponent;
pub mod position;
pub mod team;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::calculate::{duration_minutes, normalize, to_rates};
use crate::models::{
    BenchmarkTable, ComparisonResult, MatchAnalysis, MatchRecord, ParticipantRecord, RadarProfile,
    RankTier, Role,
};

pub use highlights::extract_highlights;
pub use opponent::select_opponent;
pub use position::{resolve_position, resolve_role};
pub use team::team_of;

/// Structural failures. Everything else degrades to a fallback value.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Participant {puuid} not found in match")]
    ParticipantNotFound { puuid: String },

    #[error("No opposing participant found for {puuid}")]
    NoOpponentFound { puuid: String },
}

fn profile_for(
    participant: &ParticipantRecord,
    minutes: f64,
    tier: RankTier,
    table: &BenchmarkTable,
) -> RadarProfile {
    let role: Role = resolve_role(participant);
    let rates = to_rates(participant, minutes);
    let scores = normalize(&rates, role, tier, table);
    RadarProfile::new(participant, role, rates, scores)
}

/// Build the radar comparison for `puuid` against their lane opponent.
///
/// Each side is normalized against the benchmark for its own resolved role.
pub fn compare_match(
    record: &MatchRecord,
    puuid: &str,
    tier: RankTier,
    table: &BenchmarkTable,
) -> Result<ComparisonResult, EngineError> {
    tracing::info!(match_id = %record.match_id(), puuid, %tier, "Building radar comparison");

    let context = record.context();
    let subject = context
        .find(puuid)
        .ok_or_else(|| EngineError::ParticipantNotFound {
            puuid: puuid.to_string(),
        })?;
    let opponent = select_opponent(&context, puuid)?;

    let minutes = duration_minutes(context.duration_seconds());
    if minutes <= 0.0 {
        tracing::warn!(match_id = %record.match_id(), "Non-positive game duration, rates zeroed");
    }

    let result = ComparisonResult {
        match_id: record.match_id().clone(),
        player_stats: profile_for(subject, minutes, tier, table),
        opponent_stats: profile_for(opponent, minutes, tier, table),
    };

    tracing::info!(
        match_id = %result.match_id,
        opponent = %result.opponent_stats.puuid,
        "Radar comparison ready"
    );
    Ok(result)
}

/// Summarize one player's game with highlights and headline stats.
pub fn analyze_match(record: &MatchRecord, puuid: &str) -> Result<MatchAnalysis, EngineError> {
    tracing::info!(match_id = %record.match_id(), puuid, "Analyzing match");

    let player = record
        .participant(puuid)
        .ok_or_else(|| EngineError::ParticipantNotFound {
            puuid: puuid.to_string(),
        })?;

    let mut stats = BTreeMap::new();
    stats.insert("goldEarned".to_string(), u64::from(player.gold_earned));
    stats.insert("visionScore".to_string(), u64::from(player.vision_score));
    stats.insert("totalMinionsKilled".to_string(), player.total_cs());

    Ok(MatchAnalysis {
        match_id: record.match_id().clone(),
        player_puuid: player.puuid.clone(),
        player_name: player.display_name(),
        champion: player.champion_name.clone(),
        role: player
            .lane
            .clone()
            .unwrap_or_else(|| "UNKNOWN".to_string()),
        victory: player.win,
        kills: player.kills,
        deaths: player.deaths,
        assists: player.assists,
        game_duration: record.info.game_duration,
        highlights: extract_highlights(player),
        stats,
    })
}
