//! Player identity lookup. Labels decorate player records and never affect a computed number.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLabel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u8>,
}

impl PlayerLabel {
    pub fn new(name: impl Into<String>, number: Option<u8>) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }
}

pub trait LabelResolver {
    fn resolve(&self, player_id: &str) -> Option<PlayerLabel>;
}

impl<F> LabelResolver for F
where
    F: Fn(&str) -> Option<PlayerLabel>,
{
    fn resolve(&self, player_id: &str) -> Option<PlayerLabel> {
        self(player_id)
    }
}

/// A roster loaded up front, keyed by player id.
pub type Roster = FxHashMap<String, PlayerLabel>;

impl LabelResolver for Roster {
    fn resolve(&self, player_id: &str) -> Option<PlayerLabel> {
        self.get(player_id).cloned()
    }
}
