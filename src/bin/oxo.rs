//! oxo CLI - tic-tac-toe against a minimax strategist
//!
//! This CLI provides a unified interface for:
//! - Playing interactive games against the strategist
//! - Analyzing positions (heuristic scores and minimax move values)
//! - Evaluating the strategist against a random baseline

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe with a minimax strategist", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the strategist
    Play(oxo::cli::commands::play::PlayArgs),

    /// Analyze a position
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Evaluate the strategist against a random baseline
    Eval(oxo::cli::commands::eval::EvalArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Eval(args) => oxo::cli::commands::eval::execute(args),
    }
}
