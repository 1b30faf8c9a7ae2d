//! Line-oriented scoring console.
//!
//! Reads one JSON command per line on stdin and writes one JSON reply per
//! line on stdout. Realtime events for matches started in this session are
//! echoed on stderr.

use scoring_backend::domain::types::{MatchStatus, Team, TossDecision};
use scoring_backend::domain::BallEvent;
use scoring_backend::infra::state::build_state;
use scoring_backend::realtime::hub::Subscription;
use scoring_backend::repos::matches::{create_match, NewMatch};
use scoring_backend::{AppError, AppState, LiveScoring};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, BufReader};

mod telemetry;

#[derive(Debug, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum Command {
    CreateMatch {
        team_a_name: String,
        team_b_name: String,
        #[serde(default = "default_players")]
        team_a_player_count: u32,
        #[serde(default = "default_players")]
        team_b_player_count: u32,
        total_overs: u32,
        toss_winner: Team,
        toss_decision: TossDecision,
    },
    Start {
        match_id: i64,
    },
    Ball(BallEvent),
    Undo {
        match_id: i64,
        innings_number: u8,
    },
    Scorecard {
        match_id: i64,
    },
    CurrentOver {
        match_id: i64,
    },
}

fn default_players() -> u32 {
    11
}

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    // Connection settings come from the environment (SCORING_DB_KIND etc.).
    let state = match build_state().build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    let scoring = state.realtime_scoring();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Failed to read stdin: {e}");
                std::process::exit(1);
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<Command>(&line) {
            Ok(command) => match run(&state, &scoring, command).await {
                Ok(value) => json!({ "ok": value }),
                Err(e) => json!({ "error": e.code().as_str(), "detail": e.detail() }),
            },
            Err(e) => json!({ "error": "BAD_COMMAND", "detail": e.to_string() }),
        };
        println!("{reply}");
    }
}

async fn run(
    state: &AppState,
    scoring: &impl LiveScoring,
    command: Command,
) -> Result<Value, AppError> {
    let value = match command {
        Command::CreateMatch {
            team_a_name,
            team_b_name,
            team_a_player_count,
            team_b_player_count,
            total_overs,
            toss_winner,
            toss_decision,
        } => {
            let created = create_match(
                state.db(),
                NewMatch {
                    team_a_name,
                    team_b_name,
                    team_a_player_count,
                    team_b_player_count,
                    total_overs,
                    toss_winner,
                    toss_decision,
                    status: MatchStatus::Live,
                },
            )
            .await?;
            to_value(&created)?
        }
        Command::Start { match_id } => {
            echo_events(state.hub.subscribe(match_id));
            to_value(&scoring.start_scoring(match_id).await?)?
        }
        Command::Ball(event) => to_value(&scoring.add_ball(event).await?)?,
        Command::Undo {
            match_id,
            innings_number,
        } => to_value(&scoring.undo_ball(match_id, innings_number).await?)?,
        Command::Scorecard { match_id } => to_value(&scoring.scorecard(match_id).await?)?,
        Command::CurrentOver { match_id } => to_value(&scoring.current_over(match_id).await?)?,
    };
    Ok(value)
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::internal(format!("serialize reply: {e}")))
}

fn echo_events(mut subscription: Subscription) {
    tokio::spawn(async move {
        while let Some(message) = subscription.receiver.recv().await {
            match serde_json::to_string(&message) {
                Ok(text) => eprintln!("{text}"),
                Err(e) => eprintln!("Failed to encode event: {e}"),
            }
        }
    });
}
