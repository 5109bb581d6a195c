//! Testing helpers.

use assert_float_eq::*;

use crate::event::{EventCategory, MatchEvent};

pub fn shot(id: &str, action: &str) -> MatchEvent {
    MatchEvent::new(id, EventCategory::Shot, action)
}

pub fn turnover(id: &str, action: &str) -> MatchEvent {
    MatchEvent::new(id, EventCategory::Turnover, action)
}

pub fn sanction(id: &str, action: &str) -> MatchEvent {
    MatchEvent::new(id, EventCategory::Sanction, action)
}

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}
