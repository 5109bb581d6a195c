use super::*;
use crate::event::{PlayContext, Zone};
use crate::label::PlayerLabel;
use crate::testing::{sanction, shot, turnover};

fn no_baselines() -> FxHashMap<String, f64> {
    FxHashMap::default()
}

#[test]
fn shooter_totals_and_splits() {
    let events = vec![
        shot("1", "Goal").with_player("p1").with_zone(Zone::SixLeftWing),
        shot("2", "Save").with_player("p1").with_zone(Zone::NineCentreBack),
        shot("3", "Goal").with_player("p1").with_zone(Zone::Penalty),
        shot("4", "Miss").with_player("p1"),
        shot("5", "Post").with_player("p1").with_zone(Zone::NineCentreBack),
        shot("6", "Block").with_player("p1").with_zone(Zone::NineLeftBack),
    ];
    let players = offense(&events, &no_baselines(), None);
    let p1 = &players["p1"];
    assert_eq!(6, p1.shots);
    assert_eq!(2, p1.goals);
    assert_eq!(1, p1.shots_saved);
    assert_eq!(1, p1.misses);
    assert_eq!(1, p1.posts);
    assert_eq!(1, p1.blocks);
    assert_eq!(0, p1.saves);
    assert_float_eq::assert_float_absolute_eq!(33.333_333, p1.efficiency, 1e-6);

    assert_eq!(1, p1.six_metre.shots);
    assert_eq!(1, p1.six_metre.goals);
    assert_eq!(3, p1.nine_metre.shots);
    assert_eq!(0, p1.nine_metre.goals);
    assert_eq!(1, p1.seven_metre.shots);
    assert_eq!(1, p1.seven_metre.goals);
}

#[test]
fn context_splits() {
    let counter_collective = PlayContext {
        has_opposition: Some(false),
        is_collective: Some(true),
        is_counter_attack: Some(true),
    };
    let static_individual = PlayContext {
        has_opposition: Some(true),
        is_collective: Some(false),
        is_counter_attack: Some(false),
    };
    let events = vec![
        shot("1", "Goal").with_player("p1").with_context(counter_collective),
        shot("2", "Miss").with_player("p1").with_context(static_individual),
        shot("3", "Goal").with_player("p1").with_context(static_individual),
        shot("4", "Goal").with_player("p1").with_context(PlayContext::default()),
    ];
    let players = offense(&events, &no_baselines(), None);
    let p1 = &players["p1"];
    assert_eq!((1, 1), (p1.without_opposition.shots, p1.without_opposition.goals));
    assert_eq!((2, 1), (p1.with_opposition.shots, p1.with_opposition.goals));
    assert_eq!((1, 1), (p1.collective.shots, p1.collective.goals));
    assert_eq!((2, 1), (p1.individual.shots, p1.individual.goals));
    assert_eq!((1, 1), (p1.counter_attack.shots, p1.counter_attack.goals));
    assert_eq!((2, 1), (p1.static_attack.shots, p1.static_attack.goals));
    assert_eq!(4, p1.shots);
}

#[test]
fn turnovers_and_sanctions() {
    let events = vec![
        turnover("1", "Steps").with_player("p2"),
        turnover("2", "Pass").with_player("p2"),
        sanction("3", "Yellow").with_player("p2"),
        sanction("4", "2min").with_player("p2"),
        sanction("5", "Red").with_player("p2"),
        sanction("6", "Blue").with_player("p2"),
        sanction("7", "Foul").with_player("p2"),
        sanction("8", "Elbow").with_player("p2"),
        turnover("9", "Pass"),
    ];
    let players = offense(&events, &no_baselines(), None);
    assert_eq!(1, players.len());
    let p2 = &players["p2"];
    assert_eq!(2, p2.turnovers);
    assert_eq!(1, p2.sanctions.yellow);
    assert_eq!(1, p2.sanctions.two_minutes);
    assert_eq!(1, p2.sanctions.red);
    assert_eq!(1, p2.sanctions.blue);
    assert_eq!(2, p2.sanctions.common_fouls);
    assert_eq!(0, p2.shots);
    assert_eq!(0.0, p2.efficiency);
}

#[test]
fn comparison_attached_only_to_shooters_with_baseline() {
    let events = vec![
        shot("1", "Goal").with_player("p1"),
        shot("2", "Miss").with_player("p1"),
        shot("3", "Goal").with_player("p3"),
        turnover("4", "Pass").with_player("p2"),
    ];
    let baselines = FxHashMap::from_iter([("p1".to_string(), 40.0), ("p2".to_string(), 60.0)]);
    let players = offense(&events, &baselines, None);
    assert_eq!(
        Some(Comparison {
            baseline_efficiency: 40.0,
            delta: 10.0
        }),
        players["p1"].comparison
    );
    assert_eq!(None, players["p2"].comparison);
    assert_eq!(None, players["p3"].comparison);
}

#[test]
fn goalkeeper_credited_via_active_goalkeeper() {
    let opponent_shots = vec![
        shot("1", "Save").with_player("o1").with_goalkeeper("gk"),
        shot("2", "Save").with_player("o1").with_goalkeeper("gk"),
        shot("3", "Goal").with_player("o2").with_goalkeeper("gk"),
        shot("4", "Miss").with_player("o2").with_goalkeeper("gk"),
        shot("5", "Post").with_player("o2").with_goalkeeper("gk"),
        shot("6", "Goal").with_player("o2"),
        sanction("7", "Foul").with_goalkeeper("gk"),
    ];
    let mut players = PlayerMap::default();
    goalkeeping(&mut players, &opponent_shots, None);
    assert_eq!(1, players.len());
    let gk = &players["gk"];
    assert_eq!(2, gk.saves);
    assert_eq!(1, gk.goals_conceded);
    assert_float_eq::assert_float_absolute_eq!(66.666_667, gk.goalkeeper_efficiency, 1e-6);
    assert_eq!(0, gk.shots);
}

#[test]
fn dual_role_player_merged() {
    let own = vec![shot("1", "Goal").with_player("x").with_goalkeeper("their_gk")];
    let opponent = vec![shot("2", "Save").with_player("o1").with_goalkeeper("x")];
    let mut players = offense(&own, &no_baselines(), None);
    goalkeeping(&mut players, &opponent, None);

    let x = &players["x"];
    assert_eq!(1, x.goals);
    assert_eq!(1, x.shots);
    assert_eq!(1, x.saves);
    assert_eq!(0, x.goals_conceded);
    assert_eq!(100.0, x.efficiency);
    assert_eq!(100.0, x.goalkeeper_efficiency);
    assert!(!players.contains_key("o1"));
    assert!(!players.contains_key("their_gk"));
}

#[test]
fn labels_decorate_records() {
    let events = vec![shot("1", "Goal").with_player("p1")];
    let opponent = vec![shot("2", "Goal").with_goalkeeper("gk")];
    let resolver = |player_id: &str| match player_id {
        "p1" => Some(PlayerLabel::new("Gidsel", Some(4))),
        _ => None,
    };
    let mut players = offense(&events, &no_baselines(), Some(&resolver));
    goalkeeping(&mut players, &opponent, Some(&resolver));
    assert_eq!(Some(PlayerLabel::new("Gidsel", Some(4))), players["p1"].label);
    assert_eq!(None, players["gk"].label);
    assert_eq!(1, players["gk"].goals_conceded);
}

#[test]
fn goalkeeper_without_saves_or_goals_still_recorded() {
    let opponent_shots = vec![
        shot("1", "Miss").with_player("o1").with_goalkeeper("gk_a"),
        shot("2", "Post").with_player("o1").with_goalkeeper("gk_b"),
        shot("3", "Block").with_player("o2").with_goalkeeper("gk_b"),
    ];
    let mut players = PlayerMap::default();
    goalkeeping(&mut players, &opponent_shots, None);
    assert_eq!(2, players.len());
    for goalkeeper_id in ["gk_a", "gk_b"] {
        let goalkeeper = &players[goalkeeper_id];
        assert_eq!((0, 0), (goalkeeper.saves, goalkeeper.goals_conceded));
        assert_eq!(0.0, goalkeeper.goalkeeper_efficiency);
        assert!(!goalkeeper.has_kept_goal());
    }
}
