//! Period filtering by elapsed match time, for building a separate engine per half.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::event::MatchEvent;

/// Regulation half length in seconds.
pub const HALF_LENGTH_SECS: f64 = 30.0 * 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum Period {
    FirstHalf,
    SecondHalf,
    Overtime,
    FullMatch,
}

impl Period {
    /// The half-open range of elapsed seconds covered by this period.
    pub fn span(&self, half_length_secs: f64) -> Range<f64> {
        match self {
            Period::FirstHalf => 0.0..half_length_secs,
            Period::SecondHalf => half_length_secs..2.0 * half_length_secs,
            Period::Overtime => 2.0 * half_length_secs..f64::INFINITY,
            Period::FullMatch => 0.0..f64::INFINITY,
        }
    }

    #[inline]
    pub fn contains(&self, timestamp: f64, half_length_secs: f64) -> bool {
        self.span(half_length_secs).contains(&timestamp)
    }
}

pub fn filter_period(events: &[MatchEvent], period: Period, half_length_secs: f64) -> Vec<MatchEvent> {
    events
        .iter()
        .filter(|event| period.contains(event.timestamp, half_length_secs))
        .cloned()
        .collect()
}
