use crate::domain::completion::MatchResult;
use crate::domain::fixtures::{good, innings_from, live_match, no_ball, over_from, wicket, wide};
use crate::domain::scorecard::{build_scorecard, InningsWithOvers, OverWithBalls};
use crate::domain::types::{MatchStatus, PlayStatus, Team};

fn entry(over_number: u32, balls: Vec<crate::domain::models::Ball>) -> OverWithBalls {
    OverWithBalls {
        over: over_from(over_number, &balls),
        balls,
    }
}

#[test]
fn empty_match_has_no_current_innings() {
    let m = live_match(20);
    let card = build_scorecard(&m, &[]);
    assert_eq!(card.current_innings, None);
    assert_eq!(card.current_over, None);
    assert_eq!(card.target, None);
    assert_eq!(card.version, 1);
    assert_eq!(card.team_a.name, "Lions");
}

#[test]
fn extras_are_counted_per_innings() {
    let m = live_match(20);
    let over = entry(
        1,
        vec![
            good(1, 1),
            wide(2, 2),
            no_ball(3),
            wicket(4),
            good(5, 0),
        ],
    );
    let overs = vec![over.over.clone()];
    let innings = InningsWithOvers {
        innings: innings_from(1, Team::A, &overs),
        overs: vec![over],
    };

    let card = build_scorecard(&m, &[innings]);
    let first = card.innings_card(1).unwrap();
    assert_eq!(first.extras.byes, 2);
    assert_eq!(first.extras.wides, 1);
    assert_eq!(first.extras.no_balls, 1);
    assert_eq!(first.extras.total, 4);
    assert_eq!(first.total_runs, 5);
    assert_eq!(first.total_balls, 3);
    assert_eq!(first.total_wickets, 1);
    assert_eq!(card.current_innings, Some(1));
    assert_eq!(card.current_over, Some(1));
    assert_eq!(card.target, Some(6));

    let balls: Vec<u32> = first.overs[0].balls.iter().map(|b| b.ball_number).collect();
    assert_eq!(balls, vec![1, 2, 3, 4, 5]);
}

#[test]
fn completed_over_leaves_no_current_over() {
    let m = live_match(20);
    let over = entry(1, (1..=6).map(|n| good(n, 1)).collect());
    assert_eq!(over.over.status, PlayStatus::Completed);
    let overs = vec![over.over.clone()];
    let innings = InningsWithOvers {
        innings: innings_from(1, Team::A, &overs),
        overs: vec![over],
    };

    let card = build_scorecard(&m, &[innings]);
    assert_eq!(card.current_innings, Some(1));
    assert_eq!(card.current_over, None);
    assert!(card.current_over_card().is_none());
    assert_eq!(card.innings_card(1).unwrap().total_overs, 1.0);
}

#[test]
fn current_innings_prefers_highest_in_progress() {
    let m = live_match(1);
    let first_over = entry(1, (1..=6).map(|n| good(n, 2)).collect());
    let mut first = innings_from(1, Team::A, &[first_over.over.clone()]);
    first.status = PlayStatus::Completed;

    let second_over = entry(1, vec![good(1, 4)]);
    let second = innings_from(2, Team::B, &[second_over.over.clone()]);

    let card = build_scorecard(
        &m,
        &[
            InningsWithOvers {
                innings: second,
                overs: vec![second_over],
            },
            InningsWithOvers {
                innings: first,
                overs: vec![first_over],
            },
        ],
    );
    assert_eq!(card.innings[0].innings_number, 1);
    assert_eq!(card.current_innings, Some(2));
    assert_eq!(card.current_over_card().unwrap().total_runs, 4);
    assert_eq!(card.target, Some(13));
    assert!(card.result.is_none());
}

#[test]
fn completed_match_carries_result() {
    let mut m = live_match(1);
    m.status = MatchStatus::Completed;

    let first_over = entry(1, (1..=6).map(|n| good(n, 1)).collect());
    let mut first = innings_from(1, Team::A, &[first_over.over.clone()]);
    first.status = PlayStatus::Completed;
    let second_over = entry(1, vec![good(1, 6), good(2, 1)]);
    let mut second = innings_from(2, Team::B, &[second_over.over.clone()]);
    second.status = PlayStatus::Completed;

    let card = build_scorecard(
        &m,
        &[
            InningsWithOvers {
                innings: first,
                overs: vec![first_over],
            },
            InningsWithOvers {
                innings: second,
                overs: vec![second_over],
            },
        ],
    );
    // Both innings completed: the last one created is current.
    assert_eq!(card.current_innings, Some(2));
    assert!(matches!(card.result, Some(MatchResult::Won { winner: Team::B, .. })));
    assert_eq!(
        card.result_summary().as_deref(),
        Some("team B won by 10 wickets")
    );
}

#[test]
fn scorecard_serializes_wire_tags() {
    let m = live_match(20);
    let over = entry(1, vec![wide(1, 0), wicket(2)]);
    let overs = vec![over.over.clone()];
    let card = build_scorecard(
        &m,
        &[InningsWithOvers {
            innings: innings_from(1, Team::A, &overs),
            overs: vec![over],
        }],
    );
    let json = serde_json::to_value(&card).unwrap();
    let balls = &json["innings"][0]["overs"][0]["balls"];
    assert_eq!(balls[0]["ball_type"], "wide");
    assert_eq!(balls[0]["run_type"], "WD");
    assert_eq!(balls[1]["run_type"], "WC");
    assert_eq!(balls[1]["wicket_type"], "bowled");
    assert_eq!(json["status"], "live");
    assert_eq!(json["toss_winner"], "A");
}
