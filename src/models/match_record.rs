//! Match record model, mirroring the provider's match JSON.

use serde::{Deserialize, Serialize};

use super::{MatchId, Puuid};

/// Number of participants in a standard match.
pub const PARTICIPANTS_PER_MATCH: usize = 10;

/// One player's block in a match record.
///
/// Counters are cumulative over the whole game. Any of the three position
/// fields may be missing or hold a placeholder such as `"Invalid"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRecord {
    pub puuid: Puuid,

    pub riot_id_game_name: Option<String>,
    pub riot_id_tagline: Option<String>,
    /// Legacy display name
    pub summoner_name: Option<String>,

    #[serde(default)]
    pub champion_name: String,

    pub team_position: Option<String>,
    pub individual_position: Option<String>,
    /// Deprecated lane field
    pub lane: Option<String>,

    #[serde(default)]
    pub win: bool,

    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,

    #[serde(default)]
    pub gold_earned: u32,
    #[serde(default)]
    pub vision_score: u32,
    #[serde(default)]
    pub wards_placed: u32,
    #[serde(default)]
    pub wards_killed: u32,

    /// Lane minions
    #[serde(default)]
    pub total_minions_killed: u32,
    /// Jungle monsters
    #[serde(default)]
    pub neutral_minions_killed: u32,

    #[serde(default)]
    pub total_damage_dealt_to_champions: u32,
    #[serde(default)]
    pub total_damage_taken: u32,

    #[serde(default)]
    pub double_kills: u32,
    #[serde(default)]
    pub triple_kills: u32,
    #[serde(default)]
    pub quadra_kills: u32,
    #[serde(default)]
    pub penta_kills: u32,

    #[serde(default)]
    pub summoner1_id: u32,
    #[serde(default)]
    pub summoner2_id: u32,
}

impl ParticipantRecord {
    /// Create a record with only an identifier set.
    pub fn new(puuid: impl Into<Puuid>) -> Self {
        Self {
            puuid: puuid.into(),
            ..Default::default()
        }
    }

    /// `gameName#tagLine` when a Riot ID is present, otherwise the legacy
    /// summoner name, otherwise empty.
    pub fn display_name(&self) -> String {
        match (&self.riot_id_game_name, &self.riot_id_tagline) {
            (Some(name), Some(tag)) if !name.is_empty() && !tag.is_empty() => {
                format!("{}#{}", name, tag)
            }
            (Some(name), _) if !name.is_empty() => name.clone(),
            _ => self.summoner_name.clone().unwrap_or_default(),
        }
    }

    /// Lane minions plus neutral monsters.
    pub fn total_cs(&self) -> u64 {
        u64::from(self.total_minions_killed) + u64::from(self.neutral_minions_killed)
    }
}

/// Match metadata block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: MatchId,
}

/// Match info block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Game length in seconds
    #[serde(default)]
    pub game_duration: i64,

    /// Game creation time, epoch milliseconds
    #[serde(default)]
    pub game_creation: i64,

    /// Participants in slot order; slots 0-4 form one team, 5-9 the other
    #[serde(default)]
    pub participants: Vec<ParticipantRecord>,
}

/// A complete match record as delivered by the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

impl MatchRecord {
    pub fn match_id(&self) -> &MatchId {
        &self.metadata.match_id
    }

    /// Borrowed view used by the comparison engine.
    pub fn context(&self) -> MatchContext<'_> {
        MatchContext::new(&self.info.participants, self.info.game_duration)
    }

    /// Find a participant by identifier.
    pub fn participant(&self, puuid: &str) -> Option<&ParticipantRecord> {
        self.info.participants.iter().find(|p| p.puuid == *puuid)
    }
}

/// Immutable view over a match's ordered participants and duration.
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a> {
    participants: &'a [ParticipantRecord],
    duration_seconds: i64,
}

impl<'a> MatchContext<'a> {
    pub fn new(participants: &'a [ParticipantRecord], duration_seconds: i64) -> Self {
        Self {
            participants,
            duration_seconds,
        }
    }

    pub fn participants(&self) -> &'a [ParticipantRecord] {
        self.participants
    }

    pub fn duration_seconds(&self) -> i64 {
        self.duration_seconds
    }

    /// Slot index of a participant, if present.
    pub fn slot_of(&self, puuid: &str) -> Option<usize> {
        self.participants.iter().position(|p| p.puuid == *puuid)
    }

    pub fn find(&self, puuid: &str) -> Option<&'a ParticipantRecord> {
        self.participants.iter().find(|p| p.puuid == *puuid)
    }
}
