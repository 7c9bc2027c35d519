//! Radar chart comparison models.

use serde::{Deserialize, Serialize};

use super::{MatchId, ParticipantRecord, Puuid, Role};

/// Per-minute rates and KDA for one participant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRates {
    /// Damage to champions per minute
    pub damage_per_min: f64,
    pub damage_taken_per_min: f64,
    /// Lane minions plus neutral monsters per minute
    pub farm_per_min: f64,
    pub gold_per_min: f64,
    /// Wards placed per minute
    pub vision_per_min: f64,
    pub kda: f64,
}

/// Six radar axis scores. 100 means exactly at benchmark; there is no
/// upper bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedScores {
    pub damage: f64,
    pub damage_taken: f64,
    pub farm: f64,
    pub gold: f64,
    pub vision: f64,
    pub kda: f64,
}

/// Cumulative counters carried alongside the scores for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTotals {
    pub total_damage_dealt_to_champions: u32,
    pub total_damage_taken: u32,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    pub gold_earned: u32,
    pub vision_score: u32,
    pub wards_placed: u32,
    pub wards_killed: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
}

impl From<&ParticipantRecord> for RawTotals {
    fn from(p: &ParticipantRecord) -> Self {
        Self {
            total_damage_dealt_to_champions: p.total_damage_dealt_to_champions,
            total_damage_taken: p.total_damage_taken,
            total_minions_killed: p.total_minions_killed,
            neutral_minions_killed: p.neutral_minions_killed,
            gold_earned: p.gold_earned,
            vision_score: p.vision_score,
            wards_placed: p.wards_placed,
            wards_killed: p.wards_killed,
            kills: p.kills,
            deaths: p.deaths,
            assists: p.assists,
        }
    }
}

/// One side of a radar comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarProfile {
    pub puuid: Puuid,
    pub summoner_name: String,
    pub champion_name: String,
    /// Resolved position
    pub lane: Role,
    pub win: bool,

    /// Axis scores
    #[serde(flatten)]
    pub scores: NormalizedScores,

    /// Per-minute values the scores were derived from
    pub rates: RawRates,

    #[serde(flatten)]
    pub totals: RawTotals,
}

impl RadarProfile {
    pub fn new(
        participant: &ParticipantRecord,
        role: Role,
        rates: RawRates,
        scores: NormalizedScores,
    ) -> Self {
        Self {
            puuid: participant.puuid.clone(),
            summoner_name: participant.display_name(),
            champion_name: participant.champion_name.clone(),
            lane: role,
            win: participant.win,
            scores,
            rates,
            totals: RawTotals::from(participant),
        }
    }
}

/// Subject and opponent profiles for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub match_id: MatchId,
    pub player_stats: RadarProfile,
    pub opponent_stats: RadarProfile,
}
