//! Per-player aggregation in two passes. The offense pass reads the subject's own log by
//! `player_id`; the goalkeeping pass reads the goalkeeper source by `active_goalkeeper_id`. Both
//! passes write into one map, so a player who shoots and keeps goal ends up with a single record.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::efficiency::field_efficiency;
use crate::event::{Distance, EventCategory, MatchEvent, ShotOutcome};
use crate::label::LabelResolver;
use crate::stats::{Comparison, PlayerMap, PlayerStatistics};

/// Builds shooter, turnover and sanction figures for every player acting in `events`.
pub fn offense(
    events: &[MatchEvent],
    baselines: &FxHashMap<String, f64>,
    labels: Option<&dyn LabelResolver>,
) -> PlayerMap {
    let mut players = PlayerMap::default();
    for event in events {
        let Some(player_id) = event.player_id.as_deref() else {
            continue;
        };
        let player = entry(&mut players, player_id, labels);
        match event.category {
            EventCategory::Shot => record_shot(player, event),
            EventCategory::Turnover => player.turnovers += 1,
            EventCategory::Sanction => {
                if let Some(kind) = event.sanction_kind() {
                    player.sanctions.record(kind);
                }
            }
        }
    }

    for player in players.values_mut() {
        player.efficiency = field_efficiency(player.goals, player.shots);
        if !player.has_shot() {
            continue;
        }
        if let Some(&baseline_efficiency) = baselines.get(&player.player_id) {
            player.comparison = Some(Comparison {
                baseline_efficiency,
                delta: player.efficiency - baseline_efficiency,
            });
        }
    }
    players
}

/// Credits each shot in `events` that names an active goalkeeper to that goalkeeper, creating
/// their record if the offense pass did not. Every goalkeeper faced gets a record; only goals and
/// saves move their counters.
pub fn goalkeeping(
    players: &mut PlayerMap,
    events: &[MatchEvent],
    labels: Option<&dyn LabelResolver>,
) {
    for event in events {
        if event.category != EventCategory::Shot {
            continue;
        }
        let Some(goalkeeper_id) = event.active_goalkeeper_id.as_deref() else {
            continue;
        };
        let goalkeeper = entry(players, goalkeeper_id, labels);
        match event.shot_outcome() {
            Some(ShotOutcome::Save) => goalkeeper.credit_save(),
            Some(ShotOutcome::Goal) => goalkeeper.credit_goal_conceded(),
            _ => {}
        }
    }
}

fn entry<'a>(
    players: &'a mut PlayerMap,
    player_id: &str,
    labels: Option<&dyn LabelResolver>,
) -> &'a mut PlayerStatistics {
    players.entry(player_id.to_string()).or_insert_with(|| {
        trace!("new player record {player_id}");
        PlayerStatistics {
            label: labels.and_then(|labels| labels.resolve(player_id)),
            ..PlayerStatistics::new(player_id)
        }
    })
}

fn record_shot(player: &mut PlayerStatistics, shot: &MatchEvent) {
    player.shots += 1;
    let outcome = shot.shot_outcome();
    match outcome {
        Some(ShotOutcome::Goal) => player.goals += 1,
        Some(ShotOutcome::Save) => player.shots_saved += 1,
        Some(ShotOutcome::Miss) => player.misses += 1,
        Some(ShotOutcome::Post) => player.posts += 1,
        Some(ShotOutcome::Block) => player.blocks += 1,
        None => {}
    }
    let goal = outcome == Some(ShotOutcome::Goal);

    if let Some(zone) = shot.zone {
        let split = match zone.distance() {
            Distance::SixMetre => &mut player.six_metre,
            Distance::NineMetre => &mut player.nine_metre,
            Distance::SevenMetre => &mut player.seven_metre,
        };
        split.record(goal);
    }

    let context = shot.shot_context();
    match context.has_opposition {
        Some(true) => player.with_opposition.record(goal),
        Some(false) => player.without_opposition.record(goal),
        None => {}
    }
    match context.is_collective {
        Some(true) => player.collective.record(goal),
        Some(false) => player.individual.record(goal),
        None => {}
    }
    match context.is_counter_attack {
        Some(true) => player.counter_attack.record(goal),
        Some(false) => player.static_attack.record(goal),
        None => {}
    }
}

#[cfg(test)]
mod tests;
