//! Zone-indexed maps. Each map is seeded with every zone before accumulation; events without a
//! zone contribute nothing here, though they still count towards the overall totals.

use strum::IntoEnumIterator;

use crate::efficiency::Role;
use crate::event::{ShotOutcome, Zone};
use crate::partition::{count, EventPartition};
use crate::stats::{
    Danger, FoulsCommitted, FoulsReceived, ShotDistribution, Turnovers, ZoneMap, ZoneMetric,
    ZoneStatistics,
};

/// Shots and goals per zone, with efficiency computed according to `role`.
pub fn shot_distribution(own: &EventPartition, role: Role) -> ZoneMap<ShotDistribution> {
    let mut map = ZoneMap::seeded();
    for zone in Zone::iter() {
        let shots = count(own.shots_in(zone));
        let goals = count(own.shots_in(zone).filter(|shot| shot.is_outcome(ShotOutcome::Goal)));
        let saves = match role {
            Role::FieldPlayer => 0,
            Role::Goalkeeper => {
                count(own.shots_in(zone).filter(|shot| shot.is_outcome(ShotOutcome::Save)))
            }
        };
        map.insert(
            zone,
            ZoneStatistics {
                plays: shots,
                numerator: goals,
                efficiency_percent: role.efficiency(goals, saves, shots),
            },
        );
    }
    map
}

/// Fraction of the acting side's plays in each zone that were sanctions, read from the foul
/// source. Pass the opponent's log to see the fouls the opponent committed.
pub fn fouls_committed(foul_source: &EventPartition) -> ZoneMap<FoulsCommitted> {
    sanction_rate(foul_source)
}

/// Fraction of the subject's own plays in each zone that ended with the subject being fouled.
pub fn fouls_received(own: &EventPartition) -> ZoneMap<FoulsReceived> {
    sanction_rate(own)
}

fn sanction_rate<K: ZoneMetric>(partition: &EventPartition) -> ZoneMap<K> {
    let mut map = ZoneMap::seeded();
    for zone in Zone::iter() {
        let sanctions = count(partition.sanctions_in(zone));
        let plays = count(partition.shots_in(zone)) + sanctions;
        map.insert(zone, ZoneStatistics::ratio(sanctions, plays));
    }
    map
}

pub fn turnovers(own: &EventPartition) -> ZoneMap<Turnovers> {
    let mut map = ZoneMap::seeded();
    for zone in Zone::iter() {
        let turnovers = count(own.turnovers_in(zone));
        let plays = count(own.shots_in(zone)) + turnovers;
        map.insert(zone, ZoneStatistics::ratio(turnovers, plays));
    }
    map
}

/// How often a play in each zone ends in a goal, whatever the other plays' outcomes.
pub fn danger(own: &EventPartition) -> ZoneMap<Danger> {
    let mut map = ZoneMap::seeded();
    for zone in Zone::iter() {
        let goals = count(own.shots_in(zone).filter(|shot| shot.is_outcome(ShotOutcome::Goal)));
        let plays = count(own.shots_in(zone))
            + count(own.sanctions_in(zone))
            + count(own.turnovers_in(zone));
        map.insert(zone, ZoneStatistics::ratio(goals, plays));
    }
    map
}
