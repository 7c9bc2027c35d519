//! Lane opponent selection.

use crate::models::{MatchContext, ParticipantRecord, Team};

use super::position::resolve_role;
use super::EngineError;

/// Pick the comparison participant for `puuid`.
///
/// Prefers the lowest-slot enemy whose resolved role mirrors the subject's.
/// Without a mirror, the lowest-slot enemy is used. Fails only if the
/// subject is absent or the opposing team is empty.
pub fn select_opponent<'a>(
    context: &MatchContext<'a>,
    puuid: &str,
) -> Result<&'a ParticipantRecord, EngineError> {
    let subject_slot = context
        .slot_of(puuid)
        .ok_or_else(|| EngineError::ParticipantNotFound {
            puuid: puuid.to_string(),
        })?;
    let participants = context.participants();
    let subject_role = resolve_role(&participants[subject_slot]);
    let subject_team = Team::from_slot(subject_slot);

    tracing::debug!(
        puuid,
        role = %subject_role,
        team = subject_team.id(),
        "Resolved subject position"
    );

    let enemies: Vec<&'a ParticipantRecord> = participants
        .iter()
        .enumerate()
        .filter(|(slot, _)| *slot != subject_slot && Team::from_slot(*slot) != subject_team)
        .map(|(_, p)| p)
        .collect();

    if let Some(mirror) = enemies.iter().find(|p| resolve_role(p) == subject_role) {
        return Ok(*mirror);
    }

    match enemies.first() {
        Some(first) => {
            tracing::warn!(
                role = %subject_role,
                "No direct lane opponent found, using first enemy"
            );
            Ok(*first)
        }
        None => Err(EngineError::NoOpponentFound {
            puuid: puuid.to_string(),
        }),
    }
}
