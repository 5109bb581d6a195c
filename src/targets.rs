//! The goal-target map: shots, goals and saves for each cell of the goal mouth.

use std::collections::BTreeMap;

use crate::efficiency::Role;
use crate::event::{GoalTarget, ShotOutcome};
use crate::partition::{count, EventPartition};
use crate::stats::GoalTargetStatistics;

/// Goals, saves and shots for each of the nine goal-mouth cells, with efficiency computed
/// according to `role` within the cell.
pub fn goal_targets(own: &EventPartition, role: Role) -> BTreeMap<GoalTarget, GoalTargetStatistics> {
    GoalTarget::all()
        .map(|target| {
            let on_target = || own.shots.iter().filter(move |shot| shot.goal_target == Some(target));
            let shots = count(on_target());
            let goals = count(on_target().filter(|shot| shot.is_outcome(ShotOutcome::Goal)));
            let saves = count(on_target().filter(|shot| shot.is_outcome(ShotOutcome::Save)));
            let stats = GoalTargetStatistics {
                goals,
                saves,
                shots,
                efficiency_percent: role.efficiency(goals, saves, shots),
            };
            (target, stats)
        })
        .collect()
}
