//! Effective role resolution from the redundant position fields.

use crate::models::{ParticipantRecord, Role};

/// Placeholder values the provider writes when a position is unknown.
const SENTINELS: [&str; 3] = ["", "Invalid", "NONE"];

type PositionField = fn(&ParticipantRecord) -> Option<&str>;

fn team_position(p: &ParticipantRecord) -> Option<&str> {
    p.team_position.as_deref()
}

fn individual_position(p: &ParticipantRecord) -> Option<&str> {
    p.individual_position.as_deref()
}

fn legacy_lane(p: &ParticipantRecord) -> Option<&str> {
    p.lane.as_deref()
}

/// Position fields in priority order.
const POSITION_FIELDS: [PositionField; 3] = [team_position, individual_position, legacy_lane];

fn is_signal(value: &str) -> bool {
    let value = value.trim();
    !SENTINELS.iter().any(|s| s.eq_ignore_ascii_case(value))
}

/// The first position value that carries a signal, or None if every field
/// is missing or a placeholder.
pub fn resolve_position(record: &ParticipantRecord) -> Option<&str> {
    POSITION_FIELDS
        .iter()
        .filter_map(|field| field(record))
        .find(|value| is_signal(value))
}

/// Resolve a participant's role. Unmapped or missing positions resolve to
/// [`Role::DEFAULT`].
pub fn resolve_role(record: &ParticipantRecord) -> Role {
    resolve_position(record)
        .and_then(Role::from_position)
        .unwrap_or(Role::DEFAULT)
}
