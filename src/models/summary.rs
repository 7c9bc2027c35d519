//! Match detail and recent-match summary views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MatchId, MatchRecord, ParticipantRecord, Puuid};

/// Scoreboard row for one participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub puuid: Puuid,
    pub summoner_name: Option<String>,
    pub riot_id_game_name: Option<String>,
    pub riot_id_tagline: Option<String>,
    pub champion_name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub win: bool,
    pub gold_earned: u32,
    pub vision_score: u32,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    pub double_kills: u32,
    pub triple_kills: u32,
    pub quadra_kills: u32,
    pub penta_kills: u32,
    pub lane: Option<String>,
    pub summoner1_id: u32,
    pub summoner2_id: u32,
    pub champion_avatar_url: String,
}

impl PlayerStats {
    /// Build a row, resolving the champion portrait under `avatar_base`.
    pub fn from_participant(p: &ParticipantRecord, avatar_base: &str) -> Self {
        Self {
            puuid: p.puuid.clone(),
            summoner_name: p.summoner_name.clone(),
            riot_id_game_name: p.riot_id_game_name.clone(),
            riot_id_tagline: p.riot_id_tagline.clone(),
            champion_name: p.champion_name.clone(),
            kills: p.kills,
            deaths: p.deaths,
            assists: p.assists,
            win: p.win,
            gold_earned: p.gold_earned,
            vision_score: p.vision_score,
            total_minions_killed: p.total_minions_killed,
            neutral_minions_killed: p.neutral_minions_killed,
            double_kills: p.double_kills,
            triple_kills: p.triple_kills,
            quadra_kills: p.quadra_kills,
            penta_kills: p.penta_kills,
            lane: p.lane.clone(),
            summoner1_id: p.summoner1_id,
            summoner2_id: p.summoner2_id,
            champion_avatar_url: champion_avatar_url(avatar_base, &p.champion_name),
        }
    }
}

/// `{base}/{champion}.png`, tolerating a trailing slash on the base.
pub fn champion_avatar_url(base: &str, champion: &str) -> String {
    format!("{}/{}.png", base.trim_end_matches('/'), champion)
}

/// Full scoreboard for a match plus the requested player's row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    pub match_id: MatchId,
    pub game_duration: i64,
    pub game_creation: i64,
    /// None when the requested player is not in the match
    pub player_stats: Option<PlayerStats>,
    pub all_players: Vec<PlayerStats>,
}

impl MatchDetails {
    pub fn from_record(record: &MatchRecord, puuid: &str, avatar_base: &str) -> Self {
        let all_players: Vec<PlayerStats> = record
            .info
            .participants
            .iter()
            .map(|p| PlayerStats::from_participant(p, avatar_base))
            .collect();

        let player_stats = all_players.iter().find(|p| p.puuid == *puuid).cloned();

        Self {
            match_id: record.match_id().clone(),
            game_duration: record.info.game_duration,
            game_creation: record.info.game_creation,
            player_stats,
            all_players,
        }
    }
}

/// One line of a player's recent-match list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: MatchId,
    pub champion_name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub win: bool,
    pub game_duration: i64,
    pub game_creation: Option<DateTime<Utc>>,
}

impl MatchSummary {
    /// Summarize the match from one player's perspective. None if the
    /// player is not a participant.
    pub fn from_record(record: &MatchRecord, puuid: &str) -> Option<Self> {
        let p = record.participant(puuid)?;
        Some(Self {
            match_id: record.match_id().clone(),
            champion_name: p.champion_name.clone(),
            kills: p.kills,
            deaths: p.deaths,
            assists: p.assists,
            win: p.win,
            game_duration: record.info.game_duration,
            game_creation: DateTime::from_timestamp_millis(record.info.game_creation),
        })
    }
}
