//! Per-player match analysis with notable events.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{MatchId, Puuid};

/// Kind of notable event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightKind {
    Kills,
    Deaths,
    Assists,
    MultiKill,
}

impl std::fmt::Display for HighlightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HighlightKind::Kills => write!(f, "kills"),
            HighlightKind::Deaths => write!(f, "deaths"),
            HighlightKind::Assists => write!(f, "assists"),
            HighlightKind::MultiKill => write!(f, "multi_kill"),
        }
    }
}

/// A notable event derived from a player's end-of-game counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub kind: HighlightKind,
    pub count: u32,
    pub description: String,
    pub participant_name: String,
}

/// Summary of one player's game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    pub match_id: MatchId,
    pub player_puuid: Puuid,
    pub player_name: String,
    pub champion: String,
    /// Raw legacy lane, or "UNKNOWN"
    pub role: String,
    pub victory: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    /// Seconds
    pub game_duration: i64,
    pub highlights: Vec<Highlight>,
    pub stats: BTreeMap<String, u64>,
}
