//! Tactical statistics for handball matches, aggregated from an event-by-event log of shots,
//! turnovers and sanctions. Produces shooting and saving efficiency, court-zone and goal-target
//! maps, and per-player breakdowns.

pub mod efficiency;
pub mod engine;
pub mod event;
pub mod file;
pub mod label;
pub mod partition;
pub mod players;
pub mod stats;
pub mod targets;
pub mod totals;
pub mod window;
pub mod zones;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
