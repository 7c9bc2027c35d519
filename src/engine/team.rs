//! Team membership from participant slot order.

use crate::models::{MatchContext, Team};

use super::EngineError;

/// Team of the participant with `puuid`. Slots 0-4 are team A, the rest
/// team B.
pub fn team_of(context: &MatchContext<'_>, puuid: &str) -> Result<Team, EngineError> {
    context
        .slot_of(puuid)
        .map(Team::from_slot)
        .ok_or_else(|| EngineError::ParticipantNotFound {
            puuid: puuid.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParticipantRecord;

    fn participants() -> Vec<ParticipantRecord> {
        (0..10)
            .map(|i| ParticipantRecord::new(format!("p{}", i)))
            .collect()
    }

    #[test]
    fn test_team_of_by_slot() {
        let players = participants();
        let ctx = MatchContext::new(&players, 1800);

        assert_eq!(team_of(&ctx, "p0").unwrap(), Team::A);
        assert_eq!(team_of(&ctx, "p4").unwrap(), Team::A);
        assert_eq!(team_of(&ctx, "p5").unwrap(), Team::B);
        assert_eq!(team_of(&ctx, "p9").unwrap(), Team::B);
    }

    #[test]
    fn test_team_of_missing_participant() {
        let players = participants();
        let ctx = MatchContext::new(&players, 1800);

        let err = team_of(&ctx, "ghost").unwrap_err();
        assert!(matches!(err, EngineError::ParticipantNotFound { ref puuid } if puuid == "ghost"));
    }
}
