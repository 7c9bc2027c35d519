//! Roles, teams and rank tiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lane/position assignment of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    /// Role used whenever no position signal can be mapped.
    pub const DEFAULT: Role = Role::Mid;

    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    /// Map a provider position string to a role, case-insensitively.
    /// Returns None for values with no mapping.
    pub fn from_position(position: &str) -> Option<Self> {
        match position.trim().to_ascii_uppercase().as_str() {
            "TOP" => Some(Role::Top),
            "JUNGLE" => Some(Role::Jungle),
            "MIDDLE" | "MID" => Some(Role::Mid),
            // Bottom lane is assumed to be the carry
            "BOTTOM" | "BOT" => Some(Role::Adc),
            "UTILITY" | "SUPPORT" => Some(Role::Support),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Mid => "MID",
            Role::Adc => "ADC",
            Role::Support => "SUPPORT",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Slots 0-4, provider team id 100
    A,
    /// Slots 5-9, provider team id 200
    B,
}

impl Team {
    /// Team for a participant slot index.
    pub fn from_slot(index: usize) -> Self {
        if index < 5 {
            Team::A
        } else {
            Team::B
        }
    }

    /// Provider numeric team id.
    pub fn id(&self) -> u32 {
        match self {
            Team::A => 100,
            Team::B => 200,
        }
    }

    pub fn opposing(&self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

/// Ranked ladder tier used to pick benchmark data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RankTier {
    Iron,
    Bronze,
    Silver,
    #[default]
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl RankTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankTier::Iron => "iron",
            RankTier::Bronze => "bronze",
            RankTier::Silver => "silver",
            RankTier::Gold => "gold",
            RankTier::Platinum => "platinum",
            RankTier::Diamond => "diamond",
            RankTier::Master => "master",
            RankTier::Grandmaster => "grandmaster",
            RankTier::Challenger => "challenger",
        }
    }
}

impl std::fmt::Display for RankTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RankTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iron" => Ok(RankTier::Iron),
            "bronze" => Ok(RankTier::Bronze),
            "silver" => Ok(RankTier::Silver),
            "gold" => Ok(RankTier::Gold),
            "platinum" => Ok(RankTier::Platinum),
            "diamond" => Ok(RankTier::Diamond),
            "master" => Ok(RankTier::Master),
            "grandmaster" => Ok(RankTier::Grandmaster),
            "challenger" => Ok(RankTier::Challenger),
            other => Err(format!("Unknown rank tier: {}", other)),
        }
    }
}
