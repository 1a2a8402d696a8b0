//! Analyze command - heuristic and minimax breakdown of a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{Board, Player, Strategist, cli::output, strategist::EXHAUSTIVE_DEPTH};

#[derive(Parser, Debug)]
#[command(about = "Analyze a position: heuristic scores, move values, best move")]
pub struct AnalyzeArgs {
    /// Board as 9 cell characters ('.', 'X', 'O'), optional "_X"/"_O"
    /// suffix to set the player to move
    #[arg(default_value = ".........")]
    pub state: String,

    /// Search depth in plies (9 = exhaustive)
    #[arg(long, default_value_t = EXHAUSTIVE_DEPTH)]
    pub depth: usize,

    /// Emit the analysis as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct AnalysisReport {
    state: String,
    to_move: u8,
    depth: usize,
    score_player_one: i32,
    score_player_two: i32,
    move_values: Vec<MoveValue>,
    best_move: Option<usize>,
}

#[derive(Serialize)]
struct MoveValue {
    position: usize,
    value: i32,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let mut board = Board::from_string(&args.state)?;
    let strategist = Strategist::new(args.depth);
    let to_move = board.active_player();

    let move_values: Vec<MoveValue> = strategist
        .evaluate_moves(&mut board, to_move)
        .into_iter()
        .map(|(mv, value)| MoveValue {
            position: mv.index(),
            value,
        })
        .collect();
    let best_move = strategist.best_move(&mut board, to_move).map(|m| m.index());

    let report = AnalysisReport {
        state: board.encode(),
        to_move: to_move.id(),
        depth: args.depth,
        score_player_one: board.score(Player::One),
        score_player_two: board.score(Player::Two),
        move_values,
        best_move,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_section("Position analysis");
    println!("{board}");
    output::print_kv("state", &report.state);
    output::print_kv("to move", &format!("player {}", report.to_move + 1));
    output::print_kv("depth", &report.depth.to_string());
    output::print_kv("score (player 1)", &report.score_player_one.to_string());
    output::print_kv("score (player 2)", &report.score_player_two.to_string());

    if report.move_values.is_empty() {
        println!("\n  (position is terminal)");
        return Ok(());
    }

    println!("\n  move values for the player to move:");
    for mv in &report.move_values {
        let (row, col) = (mv.position / 3, mv.position % 3);
        println!(
            "    position {} (row {}, col {}): {}",
            mv.position, row, col, mv.value
        );
    }
    if let Some(best) = report.best_move {
        output::print_kv("best move", &best.to_string());
    }

    Ok(())
}
