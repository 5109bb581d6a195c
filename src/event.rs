//! Match events as recorded by the capture layer. Events arrive with their timestamp, zone and
//! goal target already resolved; nothing here validates them beyond what the types enforce.
//!
//! A `zone` outside the nine court zones or a `goalTarget` outside 1..=9 is malformed input and
//! fails deserialisation of the whole log. Unrecognised `action` strings are accepted and degrade
//! per event instead: see [MatchEvent::shot_outcome] and [MatchEvent::sanction_kind].

use std::fmt::Formatter;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;
use tracing::warn;

/// Court position from which a play was made.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
pub enum Zone {
    #[serde(rename = "6m-LW")]
    #[strum(serialize = "6m-LW")]
    SixLeftWing,

    #[serde(rename = "6m-LB")]
    #[strum(serialize = "6m-LB")]
    SixLeftBack,

    #[serde(rename = "6m-CB")]
    #[strum(serialize = "6m-CB")]
    SixCentreBack,

    #[serde(rename = "6m-RB")]
    #[strum(serialize = "6m-RB")]
    SixRightBack,

    #[serde(rename = "6m-RW")]
    #[strum(serialize = "6m-RW")]
    SixRightWing,

    #[serde(rename = "9m-LB")]
    #[strum(serialize = "9m-LB")]
    NineLeftBack,

    #[serde(rename = "9m-CB")]
    #[strum(serialize = "9m-CB")]
    NineCentreBack,

    #[serde(rename = "9m-RB")]
    #[strum(serialize = "9m-RB")]
    NineRightBack,

    #[serde(rename = "7m")]
    #[strum(serialize = "7m")]
    Penalty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    SixMetre,
    NineMetre,
    SevenMetre,
}

impl Zone {
    pub fn distance(&self) -> Distance {
        match self {
            Zone::SixLeftWing
            | Zone::SixLeftBack
            | Zone::SixCentreBack
            | Zone::SixRightBack
            | Zone::SixRightWing => Distance::SixMetre,
            Zone::NineLeftBack | Zone::NineCentreBack | Zone::NineRightBack => Distance::NineMetre,
            Zone::Penalty => Distance::SevenMetre,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("goal target must be in the range 1..=9, got {0}")]
pub struct InvalidGoalTarget(pub u8);

/// A cell of the 3×3 grid over the goal mouth, numbered 1 to 9.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GoalTarget(u8);

impl GoalTarget {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    pub fn number(number: u8) -> Self {
        Self::try_from(number).unwrap()
    }

    pub fn as_number(&self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = GoalTarget> {
        (Self::MIN..=Self::MAX).map(GoalTarget)
    }
}

impl TryFrom<u8> for GoalTarget {
    type Error = InvalidGoalTarget;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        if !(Self::MIN..=Self::MAX).contains(&number) {
            return Err(InvalidGoalTarget(number));
        }
        Ok(Self(number))
    }
}

impl From<GoalTarget> for u8 {
    fn from(target: GoalTarget) -> Self {
        target.0
    }
}

impl std::fmt::Display for GoalTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum EventCategory {
    Shot,
    Turnover,
    #[serde(alias = "Foul")]
    Sanction,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ShotOutcome {
    Goal,
    Save,
    Miss,
    Post,
    Block,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum SanctionKind {
    Foul,
    Yellow,
    #[strum(serialize = "2min")]
    TwoMinutes,
    Red,
    Blue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayContext {
    #[serde(default)]
    pub has_opposition: Option<bool>,
    #[serde(default)]
    pub is_collective: Option<bool>,
    #[serde(default)]
    pub is_counter_attack: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEvent {
    pub id: String,

    /// Elapsed match time in seconds.
    pub timestamp: f64,

    pub category: EventCategory,

    /// Outcome label; its vocabulary depends on `category`.
    pub action: String,

    #[serde(default)]
    pub zone: Option<Zone>,

    #[serde(default)]
    pub goal_target: Option<GoalTarget>,

    #[serde(default)]
    pub team_id: Option<String>,

    #[serde(default)]
    pub player_id: Option<String>,

    /// The opposing goalkeeper who faced the shot.
    #[serde(default)]
    pub active_goalkeeper_id: Option<String>,

    #[serde(default)]
    pub context: Option<PlayContext>,
}

impl MatchEvent {
    pub fn new(id: impl Into<String>, category: EventCategory, action: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timestamp: 0.0,
            category,
            action: action.into(),
            zone: None,
            goal_target: None,
            team_id: None,
            player_id: None,
            active_goalkeeper_id: None,
            context: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }

    pub fn with_goal_target(mut self, goal_target: GoalTarget) -> Self {
        self.goal_target = Some(goal_target);
        self
    }

    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    pub fn with_player(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = Some(player_id.into());
        self
    }

    pub fn with_goalkeeper(mut self, goalkeeper_id: impl Into<String>) -> Self {
        self.active_goalkeeper_id = Some(goalkeeper_id.into());
        self
    }

    pub fn with_context(mut self, context: PlayContext) -> Self {
        self.context = Some(context);
        self
    }

    /// The shot outcome, if this is a shot with a recognised action.
    pub fn shot_outcome(&self) -> Option<ShotOutcome> {
        match self.category {
            EventCategory::Shot => ShotOutcome::from_str(&self.action).ok(),
            _ => None,
        }
    }

    #[inline]
    pub fn is_outcome(&self, outcome: ShotOutcome) -> bool {
        self.shot_outcome() == Some(outcome)
    }

    /// The sanction severity. Unrecognised actions fall into the common-foul bucket.
    pub fn sanction_kind(&self) -> Option<SanctionKind> {
        match self.category {
            EventCategory::Sanction => Some(SanctionKind::from_str(&self.action).unwrap_or_else(|_| {
                warn!(
                    "unrecognised sanction action '{}' on event {}, counting as a common foul",
                    self.action, self.id
                );
                SanctionKind::Foul
            })),
            _ => None,
        }
    }

    /// Context flags, only meaningful for shots.
    pub fn shot_context(&self) -> PlayContext {
        match self.category {
            EventCategory::Shot => self.context.unwrap_or_default(),
            _ => PlayContext::default(),
        }
    }
}
