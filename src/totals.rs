//! Scalar totals and vs-plays rates over the subject's own log.

use crate::efficiency::{percent, Role};
use crate::event::ShotOutcome;
use crate::partition::EventPartition;
use crate::stats::PlayerMap;

/// Scalar counts over the subject's own log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Totals {
    pub shots: u32,
    pub goals: u32,
    pub saves: u32,
    pub misses: u32,
    pub posts: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub fouls: u32,
}

impl Totals {
    pub fn count(own: &EventPartition) -> Self {
        Self {
            shots: own.shots.len() as u32,
            goals: own.count_outcome(ShotOutcome::Goal),
            saves: own.count_outcome(ShotOutcome::Save),
            misses: own.count_outcome(ShotOutcome::Miss),
            posts: own.count_outcome(ShotOutcome::Post),
            blocks: own.count_outcome(ShotOutcome::Block),
            turnovers: own.turnovers.len() as u32,
            fouls: own.sanctions.len() as u32,
        }
    }

    pub fn efficiency(&self, role: Role) -> f64 {
        role.efficiency(self.goals, self.saves, self.shots)
    }

    /// Shots, turnovers and fouls suffered.
    pub fn plays(&self) -> u32 {
        self.shots + self.turnovers + self.fouls
    }

    pub fn play_rates(&self) -> PlayRates {
        let plays = self.plays();
        PlayRates {
            goals: percent(self.goals, plays),
            misses: percent(self.misses, plays),
            turnovers: percent(self.turnovers, plays),
            fouls: percent(self.fouls, plays),
        }
    }
}

/// Percentages of all plays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayRates {
    pub goals: f64,
    pub misses: f64,
    pub turnovers: f64,
    pub fouls: f64,
}

pub fn goals_conceded(players: &PlayerMap) -> u32 {
    players.values().map(|player| player.goals_conceded).sum()
}
