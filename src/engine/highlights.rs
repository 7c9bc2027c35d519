//! Notable events derived from end-of-game counters.

use crate::models::{Highlight, HighlightKind, ParticipantRecord};

fn push_if_any(
    highlights: &mut Vec<Highlight>,
    kind: HighlightKind,
    count: u32,
    label: &str,
    name: &str,
) {
    if count > 0 {
        highlights.push(Highlight {
            kind,
            count,
            description: format!("{} {}", count, label),
            participant_name: name.to_string(),
        });
    }
}

/// Kill, death and assist totals followed by multi-kills, skipping any
/// counter that is zero.
pub fn extract_highlights(record: &ParticipantRecord) -> Vec<Highlight> {
    let name = record
        .riot_id_game_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .or(record.summoner_name.as_deref())
        .unwrap_or_default();

    let mut highlights = Vec::new();
    push_if_any(&mut highlights, HighlightKind::Kills, record.kills, "total kills", name);
    push_if_any(&mut highlights, HighlightKind::Deaths, record.deaths, "total deaths", name);
    push_if_any(&mut highlights, HighlightKind::Assists, record.assists, "total assists", name);

    let multi_kills = [
        (record.double_kills, "double kills"),
        (record.triple_kills, "triple kills"),
        (record.quadra_kills, "quadra kills"),
        (record.penta_kills, "penta kills"),
    ];
    for (count, label) in multi_kills {
        push_if_any(&mut highlights, HighlightKind::MultiKill, count, label, name);
    }

    tracing::debug!(count = highlights.len(), "Extracted highlights");
    highlights
}
