//! Nested scorecard read model and its pure builder.
//!
//! The scorecard is rebuilt from stored rows on every query; it is never
//! persisted.

use serde::{Deserialize, Serialize};

use crate::domain::completion::MatchResult;
use crate::domain::models::{Ball, Innings, Match, Over};
use crate::domain::rules;
use crate::domain::types::{
    BallType, MatchStatus, PlayStatus, RunType, Team, TossDecision, WicketType,
};

/// An over with its balls, as loaded for the builder.
#[derive(Debug, Clone)]
pub struct OverWithBalls {
    pub over: Over,
    pub balls: Vec<Ball>,
}

/// An innings with its overs, as loaded for the builder.
#[derive(Debug, Clone)]
pub struct InningsWithOvers {
    pub innings: Innings,
    pub overs: Vec<OverWithBalls>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamCard {
    pub side: Team,
    pub name: String,
    pub player_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extras {
    pub byes: u32,
    pub wides: u32,
    pub no_balls: u32,
    pub total: u32,
}

impl Extras {
    fn from_balls<'a, I>(balls: I) -> Self
    where
        I: IntoIterator<Item = &'a Ball>,
    {
        let mut extras = Extras::default();
        for ball in balls {
            extras.byes += ball.byes;
            match ball.ball_type {
                BallType::Wide => extras.wides += 1,
                BallType::NoBall => extras.no_balls += 1,
                BallType::Good => {}
            }
        }
        extras.total = extras.byes + extras.wides + extras.no_balls;
        extras
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallCard {
    pub ball_number: u32,
    pub ball_type: BallType,
    pub run_type: RunType,
    pub runs: u32,
    pub byes: u32,
    pub is_wicket: bool,
    pub wicket_type: Option<WicketType>,
}

impl From<&Ball> for BallCard {
    fn from(ball: &Ball) -> Self {
        Self {
            ball_number: ball.ball_number,
            ball_type: ball.ball_type,
            run_type: ball.run_type,
            runs: ball.runs,
            byes: ball.byes,
            is_wicket: ball.is_wicket,
            wicket_type: ball.wicket_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverCard {
    pub over_number: u32,
    pub total_runs: u32,
    pub total_balls: u32,
    pub total_wickets: u32,
    pub status: PlayStatus,
    pub balls: Vec<BallCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InningsCard {
    pub innings_number: u8,
    pub batting_team: Team,
    pub total_runs: u32,
    pub total_wickets: u32,
    pub total_overs: f64,
    pub total_balls: u32,
    pub status: PlayStatus,
    pub extras: Extras,
    pub overs: Vec<OverCard>,
}

impl InningsCard {
    /// The in-progress over, if any.
    pub fn open_over(&self) -> Option<&OverCard> {
        self.overs
            .iter()
            .rev()
            .find(|o| o.status == PlayStatus::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub match_id: i64,
    /// Match `lock_version` the card was built from.
    pub version: i32,
    pub status: MatchStatus,
    pub team_a: TeamCard,
    pub team_b: TeamCard,
    pub toss_winner: Team,
    pub toss_decision: TossDecision,
    pub batting_team: Option<Team>,
    pub total_overs: u32,
    pub target: Option<u32>,
    pub innings: Vec<InningsCard>,
    pub current_innings: Option<u8>,
    pub current_over: Option<u32>,
    pub result: Option<MatchResult>,
}

impl Scorecard {
    pub fn innings_card(&self, innings_number: u8) -> Option<&InningsCard> {
        self.innings
            .iter()
            .find(|i| i.innings_number == innings_number)
    }

    pub fn current_innings_card(&self) -> Option<&InningsCard> {
        self.current_innings.and_then(|n| self.innings_card(n))
    }

    pub fn current_over_card(&self) -> Option<&OverCard> {
        let number = self.current_over?;
        self.current_innings_card()?
            .overs
            .iter()
            .find(|o| o.over_number == number)
    }

    pub fn result_summary(&self) -> Option<String> {
        self.result.map(|r| r.to_string())
    }
}

/// Highest-numbered innings still in progress, else the last one created.
fn pick_current_innings(innings: &[InningsCard]) -> Option<u8> {
    innings
        .iter()
        .filter(|i| i.status == PlayStatus::InProgress)
        .map(|i| i.innings_number)
        .max()
        .or_else(|| innings.iter().map(|i| i.innings_number).max())
}

fn over_card(entry: &OverWithBalls) -> OverCard {
    let mut balls: Vec<BallCard> = entry.balls.iter().map(BallCard::from).collect();
    balls.sort_by_key(|b| b.ball_number);
    OverCard {
        over_number: entry.over.over_number,
        total_runs: entry.over.total_runs,
        total_balls: entry.over.total_balls,
        total_wickets: entry.over.total_wickets,
        status: entry.over.status,
        balls,
    }
}

fn innings_card(entry: &InningsWithOvers) -> InningsCard {
    let mut overs: Vec<OverCard> = entry.overs.iter().map(over_card).collect();
    overs.sort_by_key(|o| o.over_number);
    let innings = &entry.innings;
    InningsCard {
        innings_number: innings.innings_number,
        batting_team: innings.batting_team,
        total_runs: innings.total_runs,
        total_wickets: innings.total_wickets,
        total_overs: innings.total_overs,
        total_balls: innings.total_balls,
        status: innings.status,
        extras: Extras::from_balls(entry.overs.iter().flat_map(|o| o.balls.iter())),
        overs,
    }
}

pub fn build_scorecard(m: &Match, innings: &[InningsWithOvers]) -> Scorecard {
    let mut cards: Vec<InningsCard> = innings.iter().map(innings_card).collect();
    cards.sort_by_key(|i| i.innings_number);

    let current_innings = pick_current_innings(&cards);
    let current_over = current_innings
        .and_then(|n| cards.iter().find(|c| c.innings_number == n))
        .and_then(InningsCard::open_over)
        .map(|o| o.over_number);

    let first = innings.iter().find(|i| i.innings.innings_number == 1);
    let second = innings.iter().find(|i| i.innings.innings_number == 2);
    let target = first.map(|f| rules::target(f.innings.total_runs));
    let result = match (m.status, first, second) {
        (MatchStatus::Completed, Some(f), Some(s)) => {
            Some(MatchResult::decide(&f.innings, &s.innings, m))
        }
        _ => None,
    };

    Scorecard {
        match_id: m.id,
        version: m.lock_version,
        status: m.status,
        team_a: TeamCard {
            side: Team::A,
            name: m.team_a_name.clone(),
            player_count: m.team_a_player_count,
        },
        team_b: TeamCard {
            side: Team::B,
            name: m.team_b_name.clone(),
            player_count: m.team_b_player_count,
        },
        toss_winner: m.toss_winner,
        toss_decision: m.toss_decision,
        batting_team: m.batting_team,
        total_overs: m.total_overs,
        target,
        innings: cards,
        current_innings,
        current_over,
        result,
    }
}
