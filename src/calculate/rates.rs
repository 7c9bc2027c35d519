//! Per-minute rate computation.

use crate::models::{ParticipantRecord, RawRates};

use super::{calculate_kda, per_minute};

/// Convert a participant's cumulative counters into per-minute rates.
///
/// A non-positive duration zeroes every per-minute rate. KDA does not
/// depend on duration and is always computed.
pub fn to_rates(record: &ParticipantRecord, duration_minutes: f64) -> RawRates {
    RawRates {
        damage_per_min: per_minute(
            record.total_damage_dealt_to_champions.into(),
            duration_minutes,
        ),
        damage_taken_per_min: per_minute(record.total_damage_taken.into(), duration_minutes),
        farm_per_min: per_minute(record.total_cs(), duration_minutes),
        gold_per_min: per_minute(record.gold_earned.into(), duration_minutes),
        // Vision axis tracks wards placed, not the provider's vision score
        vision_per_min: per_minute(record.wards_placed.into(), duration_minutes),
        kda: calculate_kda(record.kills, record.deaths, record.assists),
    }
}
