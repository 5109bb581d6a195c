//! Efficiency formulas. A field player is measured by goals over all shots taken; a goalkeeper by
//! saves over the shots that actually required a save-or-goal decision. Misses, posts and blocks
//! never reach the goalkeeper and so are excluded from the goalkeeper's denominator.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    FieldPlayer,
    Goalkeeper,
}

impl Role {
    #[inline]
    pub fn efficiency(&self, goals: u32, saves: u32, shots: u32) -> f64 {
        match self {
            Role::FieldPlayer => field_efficiency(goals, shots),
            Role::Goalkeeper => goalkeeper_efficiency(saves, goals),
        }
    }
}

/// `numerator / denominator * 100`, or 0 if the denominator is 0.
#[inline]
pub fn percent(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}

#[inline]
pub fn field_efficiency(goals: u32, shots: u32) -> f64 {
    percent(goals, shots)
}

#[inline]
pub fn goalkeeper_efficiency(saves: u32, goals_conceded: u32) -> f64 {
    percent(saves, saves + goals_conceded)
}
