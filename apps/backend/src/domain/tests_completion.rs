use crate::domain::completion::{
    first_innings_complete, should_complete_match, Margin, MatchResult,
};
use crate::domain::fixtures::{innings_totals, live_match};
use crate::domain::types::{PlayStatus, Team};

#[test]
fn target_reached_completes_chase() {
    let m = live_match(20);
    let first = innings_totals(1, Team::A, 10, 3, 20.0);
    let second = innings_totals(2, Team::B, 11, 2, 4.1);

    let check = should_complete_match(&first, &second, &m);
    assert!(check.complete);
    assert!(check.reason.contains("target reached: 11/11"));
}

#[test]
fn one_short_of_target_continues() {
    let m = live_match(20);
    let first = innings_totals(1, Team::A, 10, 3, 20.0);
    let second = innings_totals(2, Team::B, 10, 2, 4.1);

    let check = should_complete_match(&first, &second, &m);
    assert!(!check.complete);
    assert_eq!(check.reason, "match continues");
}

#[test]
fn wickets_use_team_a_squad_size() {
    let mut m = live_match(20);
    m.team_a_player_count = 6;
    m.team_b_player_count = 11;
    let first = innings_totals(1, Team::A, 50, 3, 20.0);
    let second = innings_totals(2, Team::B, 20, 5, 3.0);

    let check = should_complete_match(&first, &second, &m);
    assert!(check.complete);
    assert_eq!(check.reason, "all wickets lost: 5/5");
}

#[test]
fn overs_exhausted_completes_chase() {
    let m = live_match(2);
    let first = innings_totals(1, Team::A, 30, 1, 2.0);
    let second = innings_totals(2, Team::B, 12, 1, 2.0);

    let check = should_complete_match(&first, &second, &m);
    assert!(check.complete);
    assert_eq!(check.reason, "all overs completed: 2.0/2");
}

#[test]
fn target_takes_precedence_over_wickets() {
    let m = live_match(2);
    let first = innings_totals(1, Team::A, 5, 0, 2.0);
    let second = innings_totals(2, Team::B, 6, 10, 2.0);

    let check = should_complete_match(&first, &second, &m);
    assert!(check.reason.starts_with("target reached"));
}

#[test]
fn first_innings_thresholds() {
    let m = live_match(2);
    assert!(!first_innings_complete(
        &innings_totals(1, Team::A, 10, 9, 1.5),
        &m
    ));
    assert!(first_innings_complete(
        &innings_totals(1, Team::A, 10, 10, 0.4),
        &m
    ));
    assert!(first_innings_complete(
        &innings_totals(1, Team::A, 10, 0, 2.0),
        &m
    ));

    let mut closed = innings_totals(1, Team::A, 0, 0, 0.0);
    closed.status = PlayStatus::Completed;
    assert!(first_innings_complete(&closed, &m));
}

#[test]
fn results() {
    let m = live_match(20);
    let first = innings_totals(1, Team::A, 120, 6, 20.0);

    let chased = innings_totals(2, Team::B, 121, 4, 18.2);
    let result = MatchResult::decide(&first, &chased, &m);
    assert_eq!(
        result,
        MatchResult::Won {
            winner: Team::B,
            margin: Margin::Wickets(6)
        }
    );
    assert_eq!(result.to_string(), "team B won by 6 wickets");

    let defended = innings_totals(2, Team::B, 99, 10, 19.1);
    let result = MatchResult::decide(&first, &defended, &m);
    assert_eq!(result.to_string(), "team A won by 21 runs");

    let tied = innings_totals(2, Team::B, 120, 7, 20.0);
    assert_eq!(MatchResult::decide(&first, &tied, &m), MatchResult::Tie);

    let last_wicket = innings_totals(2, Team::B, 121, 9, 19.5);
    assert_eq!(
        MatchResult::decide(&first, &last_wicket, &m).to_string(),
        "team B won by 1 wicket"
    );
}
