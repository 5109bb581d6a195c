//! The shapes produced by a calculation. Everything here is built fresh per calculation and
//! returned by value.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::ops::Index;

use rustc_hash::FxHashMap;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::efficiency::{field_efficiency, goalkeeper_efficiency, percent};
use crate::event::{GoalTarget, SanctionKind, Zone};
use crate::label::PlayerLabel;

/// A count of plays in a zone and the count of those plays that satisfied the map's criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStatistics {
    pub plays: u32,
    pub numerator: u32,
    pub efficiency_percent: f64,
}

impl ZoneStatistics {
    pub fn ratio(numerator: u32, plays: u32) -> Self {
        Self {
            plays,
            numerator,
            efficiency_percent: percent(numerator, plays),
        }
    }
}

/// Names the criterion a [ZoneMap] measures. The marker types carry no data; they keep the five
/// zone maps of a [CalculatedStats] from being mixed up.
pub trait ZoneMetric {
    const NAME: &'static str;
}

/// Shots per zone; the numerator counts goals. Efficiency follows the subject's role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShotDistribution;

/// Shots and sanctions per zone from the foul source; the numerator counts sanctions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoulsCommitted;

/// Shots and sanctions per zone from the subject's own log; the numerator counts sanctions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoulsReceived;

/// Shots and turnovers per zone; the numerator counts turnovers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Turnovers;

/// Every play per zone; the numerator counts goals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Danger;

impl ZoneMetric for ShotDistribution {
    const NAME: &'static str = "shot distribution";
}
impl ZoneMetric for FoulsCommitted {
    const NAME: &'static str = "fouls committed";
}
impl ZoneMetric for FoulsReceived {
    const NAME: &'static str = "fouls received";
}
impl ZoneMetric for Turnovers {
    const NAME: &'static str = "turnovers";
}
impl ZoneMetric for Danger {
    const NAME: &'static str = "danger";
}

/// Statistics for every [Zone]. A zone without events is present with zeroed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent, bound = "")]
pub struct ZoneMap<K: ZoneMetric> {
    zones: BTreeMap<Zone, ZoneStatistics>,
    #[serde(skip)]
    metric: PhantomData<K>,
}

impl<K: ZoneMetric> ZoneMap<K> {
    pub fn seeded() -> Self {
        Self {
            zones: Zone::iter()
                .map(|zone| (zone, ZoneStatistics::default()))
                .collect(),
            metric: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        K::NAME
    }

    pub fn get(&self, zone: Zone) -> &ZoneStatistics {
        &self.zones[&zone]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Zone, &ZoneStatistics)> {
        self.zones.iter()
    }

    pub fn total_plays(&self) -> u32 {
        self.zones.values().map(|stats| stats.plays).sum()
    }

    pub(crate) fn insert(&mut self, zone: Zone, stats: ZoneStatistics) {
        self.zones.insert(zone, stats);
    }
}

impl<K: ZoneMetric> Default for ZoneMap<K> {
    fn default() -> Self {
        Self::seeded()
    }
}

impl<K: ZoneMetric> Index<Zone> for ZoneMap<K> {
    type Output = ZoneStatistics;

    fn index(&self, zone: Zone) -> &Self::Output {
        self.get(zone)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTargetStatistics {
    pub goals: u32,
    pub saves: u32,
    pub shots: u32,
    pub efficiency_percent: f64,
}

/// Shots and goals within one slice of a player's shooting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SplitStatistics {
    pub shots: u32,
    pub goals: u32,
}

impl SplitStatistics {
    pub(crate) fn record(&mut self, goal: bool) {
        self.shots += 1;
        if goal {
            self.goals += 1;
        }
    }

    pub fn efficiency(&self) -> f64 {
        field_efficiency(self.goals, self.shots)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanctionCounts {
    /// Common fouls, including any sanction whose action was not recognised.
    pub common_fouls: u32,
    pub yellow: u32,
    pub two_minutes: u32,
    pub red: u32,
    pub blue: u32,
}

impl SanctionCounts {
    pub(crate) fn record(&mut self, kind: SanctionKind) {
        let counter = match kind {
            SanctionKind::Foul => &mut self.common_fouls,
            SanctionKind::Yellow => &mut self.yellow,
            SanctionKind::TwoMinutes => &mut self.two_minutes,
            SanctionKind::Red => &mut self.red,
            SanctionKind::Blue => &mut self.blue,
        };
        *counter += 1;
    }

    pub fn total(&self) -> u32 {
        self.common_fouls + self.yellow + self.two_minutes + self.red + self.blue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub baseline_efficiency: f64,
    pub delta: f64,
}

/// Everything known about one player. Shooter fields come from the player's own shots; `saves`,
/// `goals_conceded` and `goalkeeper_efficiency` come only from shots the player faced in goal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    pub player_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<PlayerLabel>,

    pub shots: u32,
    pub goals: u32,
    /// Own shots stopped by the opposing goalkeeper.
    pub shots_saved: u32,
    pub misses: u32,
    pub posts: u32,
    pub blocks: u32,
    pub efficiency: f64,

    pub six_metre: SplitStatistics,
    pub nine_metre: SplitStatistics,
    pub seven_metre: SplitStatistics,

    pub with_opposition: SplitStatistics,
    pub without_opposition: SplitStatistics,
    pub collective: SplitStatistics,
    pub individual: SplitStatistics,
    pub counter_attack: SplitStatistics,
    pub static_attack: SplitStatistics,

    pub turnovers: u32,
    pub sanctions: SanctionCounts,

    pub saves: u32,
    pub goals_conceded: u32,
    pub goalkeeper_efficiency: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

impl PlayerStatistics {
    pub fn new(player_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            ..Self::default()
        }
    }

    pub(crate) fn credit_save(&mut self) {
        self.saves += 1;
        self.goalkeeper_efficiency = goalkeeper_efficiency(self.saves, self.goals_conceded);
    }

    pub(crate) fn credit_goal_conceded(&mut self) {
        self.goals_conceded += 1;
        self.goalkeeper_efficiency = goalkeeper_efficiency(self.saves, self.goals_conceded);
    }

    pub fn has_shot(&self) -> bool {
        self.shots > 0
    }

    pub fn has_kept_goal(&self) -> bool {
        self.saves + self.goals_conceded > 0
    }
}

pub type PlayerMap = FxHashMap<String, PlayerStatistics>;

/// The complete result of a calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedStats {
    pub total_shots: u32,
    pub total_goals: u32,
    pub total_saves: u32,
    pub total_misses: u32,
    pub total_posts: u32,
    pub total_blocks: u32,
    pub total_fouls: u32,
    pub total_turnovers: u32,
    pub total_plays: u32,
    pub total_goals_conceded: u32,

    pub efficiency: f64,
    pub goals_vs_plays: f64,
    pub misses_vs_plays: f64,
    pub turnovers_vs_plays: f64,
    pub fouls_vs_plays: f64,

    pub shot_zones: ZoneMap<ShotDistribution>,
    pub fouls_committed_zones: ZoneMap<FoulsCommitted>,
    pub fouls_received_zones: ZoneMap<FoulsReceived>,
    pub turnover_zones: ZoneMap<Turnovers>,
    pub danger_zones: ZoneMap<Danger>,

    pub goal_targets: BTreeMap<GoalTarget, GoalTargetStatistics>,

    pub players: PlayerMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_map_seeded_with_every_zone() {
        let map = ZoneMap::<Danger>::seeded();
        assert_eq!(9, map.iter().count());
        for (_, stats) in map.iter() {
            assert_eq!(ZoneStatistics::default(), *stats);
        }
        assert_eq!(0, map.total_plays());
        assert_eq!("danger", map.name());
    }

    #[test]
    fn zone_map_serializes_as_plain_map() {
        let mut map = ZoneMap::<Turnovers>::seeded();
        map.insert(Zone::Penalty, ZoneStatistics::ratio(1, 4));
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(9, json.as_object().unwrap().len());
        assert_eq!(4, json["7m"]["plays"]);
        assert_eq!(1, json["7m"]["numerator"]);
        assert_eq!(25.0, json["7m"]["efficiencyPercent"]);
    }

    #[test]
    fn zone_ratio() {
        assert_eq!(
            ZoneStatistics {
                plays: 2,
                numerator: 1,
                efficiency_percent: 50.0
            },
            ZoneStatistics::ratio(1, 2)
        );
        assert_eq!(0.0, ZoneStatistics::ratio(0, 0).efficiency_percent);
    }

    #[test]
    fn sanction_counts() {
        let mut counts = SanctionCounts::default();
        counts.record(SanctionKind::Yellow);
        counts.record(SanctionKind::TwoMinutes);
        counts.record(SanctionKind::TwoMinutes);
        counts.record(SanctionKind::Foul);
        assert_eq!(1, counts.yellow);
        assert_eq!(2, counts.two_minutes);
        assert_eq!(1, counts.common_fouls);
        assert_eq!(4, counts.total());
    }

    #[test]
    fn goalkeeper_credits_recompute_efficiency() {
        let mut player = PlayerStatistics::new("gk");
        assert!(!player.has_kept_goal());
        player.credit_save();
        assert_eq!(100.0, player.goalkeeper_efficiency);
        player.credit_goal_conceded();
        assert_eq!(50.0, player.goalkeeper_efficiency);
        player.credit_goal_conceded();
        player.credit_save();
        assert_eq!(50.0, player.goalkeeper_efficiency);
        assert_eq!(2, player.saves);
        assert_eq!(2, player.goals_conceded);
        assert!(!player.has_shot());
    }

    #[test]
    fn split_statistics() {
        let mut split = SplitStatistics::default();
        split.record(true);
        split.record(false);
        split.record(false);
        split.record(true);
        assert_eq!(SplitStatistics { shots: 4, goals: 2 }, split);
        assert_eq!(50.0, split.efficiency());
    }
}
