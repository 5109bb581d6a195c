//! Splits an event slice by category without copying the events.

use crate::event::{EventCategory, MatchEvent, ShotOutcome, Zone};

#[derive(Debug, Default)]
pub struct EventPartition<'a> {
    pub shots: Vec<&'a MatchEvent>,
    pub turnovers: Vec<&'a MatchEvent>,
    pub sanctions: Vec<&'a MatchEvent>,
}

impl<'a> EventPartition<'a> {
    pub fn count_outcome(&self, outcome: ShotOutcome) -> u32 {
        count(self.shots.iter().filter(|shot| shot.is_outcome(outcome)))
    }

    pub fn shots_in(&self, zone: Zone) -> impl Iterator<Item = &&'a MatchEvent> {
        in_zone(&self.shots, zone)
    }

    pub fn turnovers_in(&self, zone: Zone) -> impl Iterator<Item = &&'a MatchEvent> {
        in_zone(&self.turnovers, zone)
    }

    pub fn sanctions_in(&self, zone: Zone) -> impl Iterator<Item = &&'a MatchEvent> {
        in_zone(&self.sanctions, zone)
    }
}

impl<'a> From<&'a [MatchEvent]> for EventPartition<'a> {
    fn from(events: &'a [MatchEvent]) -> Self {
        let mut partition = EventPartition::default();
        for event in events {
            match event.category {
                EventCategory::Shot => partition.shots.push(event),
                EventCategory::Turnover => partition.turnovers.push(event),
                EventCategory::Sanction => partition.sanctions.push(event),
            }
        }
        partition
    }
}

fn in_zone<'s, 'a>(
    events: &'s [&'a MatchEvent],
    zone: Zone,
) -> impl Iterator<Item = &'s &'a MatchEvent> {
    events.iter().filter(move |event| event.zone == Some(zone))
}

#[inline]
pub(crate) fn count<I: Iterator>(iter: I) -> u32 {
    iter.count() as u32
}
