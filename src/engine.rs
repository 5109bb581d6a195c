//! The aggregation engine. An engine is built once per report from the subject's own event log
//! and a [Config]; each call to [StatsEngine::calculate] may name alternate logs for fouls and
//! goalkeeping. The last result is memoised against the effective sources of the call.

use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex, PoisonError};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::efficiency::Role;
use crate::event::MatchEvent;
use crate::label::LabelResolver;
use crate::partition::EventPartition;
use crate::stats::CalculatedStats;
use crate::totals::{self, Totals};
use crate::{players, targets, zones};

pub mod cache_stats;

use cache_stats::CacheStats;

const VALID_BASELINE: RangeInclusive<f64> = 0.0..=100.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("baseline efficiency for {player_id} must be in the range 0..=100, got {value}")]
    InvalidBaseline { player_id: String, value: f64 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Selects the efficiency formula applied to the subject of the report.
    #[serde(default)]
    pub role: Role,

    /// Baseline efficiency percentage by player id, used to annotate deltas.
    #[serde(default)]
    pub baselines: FxHashMap<String, f64>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (player_id, &value) in &self.baselines {
            if !VALID_BASELINE.contains(&value) {
                return Err(ConfigError::InvalidBaseline {
                    player_id: player_id.clone(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Optional alternate event logs supplied per calculation. An absent source falls back to the
/// engine's own log.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sources<'a> {
    fouls: Option<&'a [MatchEvent]>,
    goalkeeping: Option<&'a [MatchEvent]>,
}

impl<'a> Sources<'a> {
    /// Log from which the fouls-committed map is built; typically the opponent's.
    pub fn with_fouls(mut self, events: &'a [MatchEvent]) -> Self {
        self.fouls = Some(events);
        self
    }

    /// Log whose shots are credited to their `active_goalkeeper_id`.
    pub fn with_goalkeeping(mut self, events: &'a [MatchEvent]) -> Self {
        self.goalkeeping = Some(events);
        self
    }
}

struct MemoEntry {
    fouls: Option<Vec<MatchEvent>>,
    goalkeeping: Option<Vec<MatchEvent>>,
    result: Arc<CalculatedStats>,
}

impl MemoEntry {
    fn matches(&self, fouls: Option<&[MatchEvent]>, goalkeeping: Option<&[MatchEvent]>) -> bool {
        self.fouls.as_deref() == fouls && self.goalkeeping.as_deref() == goalkeeping
    }
}

#[derive(Default)]
struct Memo {
    entry: Option<MemoEntry>,
    stats: CacheStats,
}

pub struct StatsEngine {
    events: Vec<MatchEvent>,
    config: Config,
    labels: Option<Box<dyn LabelResolver + Send + Sync>>,
    memo: Mutex<Memo>,
}

impl StatsEngine {
    pub fn try_new(events: Vec<MatchEvent>, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            events,
            config,
            labels: None,
            memo: Mutex::default(),
        })
    }

    pub fn with_labels(mut self, labels: impl LabelResolver + Send + Sync + 'static) -> Self {
        self.labels = Some(Box::new(labels));
        self
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.memo.lock().unwrap_or_else(PoisonError::into_inner).stats
    }

    /// Computes the full statistics, or returns the memoised result if the effective sources
    /// match those of the previous call.
    pub fn calculate(&self, sources: Sources) -> Arc<CalculatedStats> {
        let fouls = self.distinct(sources.fouls);
        let goalkeeping = self.distinct(sources.goalkeeping);

        let mut guard = self.memo.lock().unwrap_or_else(PoisonError::into_inner);
        let memo = &mut *guard;
        if let Some(entry) = &memo.entry {
            if entry.matches(fouls, goalkeeping) {
                memo.stats += true;
                trace!("memo hit: {:?}", memo.stats);
                return entry.result.clone();
            }
        }
        memo.stats += false;

        let result = Arc::new(self.compute(
            fouls.unwrap_or(&self.events),
            goalkeeping.unwrap_or(&self.events),
        ));
        memo.entry = Some(MemoEntry {
            fouls: fouls.map(<[MatchEvent]>::to_vec),
            goalkeeping: goalkeeping.map(<[MatchEvent]>::to_vec),
            result: result.clone(),
        });
        result
    }

    /// A supplied source identical to the engine's own log is treated as absent.
    fn distinct<'a>(&self, source: Option<&'a [MatchEvent]>) -> Option<&'a [MatchEvent]> {
        source.filter(|events| *events != self.events.as_slice())
    }

    fn compute(&self, foul_events: &[MatchEvent], goalkeeper_events: &[MatchEvent]) -> CalculatedStats {
        let role = self.config.role;
        let own = EventPartition::from(self.events.as_slice());
        let foul_source = EventPartition::from(foul_events);
        let labels = self
            .labels
            .as_deref()
            .map(|labels| labels as &dyn LabelResolver);

        let totals = Totals::count(&own);
        let efficiency = totals.efficiency(role);

        let shot_zones = zones::shot_distribution(&own, role);
        let fouls_committed_zones = zones::fouls_committed(&foul_source);
        let fouls_received_zones = zones::fouls_received(&own);
        let turnover_zones = zones::turnovers(&own);
        let danger_zones = zones::danger(&own);
        let goal_targets = targets::goal_targets(&own, role);

        let mut players = players::offense(&self.events, &self.config.baselines, labels);
        players::goalkeeping(&mut players, goalkeeper_events, labels);

        trace!(
            "zone plays: {}: {}, {}: {}, {}: {}, {}: {}, {}: {}",
            shot_zones.name(),
            shot_zones.total_plays(),
            fouls_committed_zones.name(),
            fouls_committed_zones.total_plays(),
            fouls_received_zones.name(),
            fouls_received_zones.total_plays(),
            turnover_zones.name(),
            turnover_zones.total_plays(),
            danger_zones.name(),
            danger_zones.total_plays()
        );

        let rates = totals.play_rates();
        let stats = CalculatedStats {
            total_shots: totals.shots,
            total_goals: totals.goals,
            total_saves: totals.saves,
            total_misses: totals.misses,
            total_posts: totals.posts,
            total_blocks: totals.blocks,
            total_fouls: totals.fouls,
            total_turnovers: totals.turnovers,
            total_plays: totals.plays(),
            total_goals_conceded: totals::goals_conceded(&players),
            efficiency,
            goals_vs_plays: rates.goals,
            misses_vs_plays: rates.misses,
            turnovers_vs_plays: rates.turnovers,
            fouls_vs_plays: rates.fouls,
            shot_zones,
            fouls_committed_zones,
            fouls_received_zones,
            turnover_zones,
            danger_zones,
            goal_targets,
            players,
        };
        debug!(
            "calculated {:?} stats over {} events: {} shots, {} goals, {} plays, efficiency: {:.1}%, {} players ({} in goal)",
            role,
            self.events.len(),
            stats.total_shots,
            stats.total_goals,
            stats.total_plays,
            stats.efficiency,
            stats.players.len(),
            stats.players.values().filter(|player| player.has_kept_goal()).count()
        );
        stats
    }
}
