//! Eval command - strategist versus a uniform-random baseline

use anyhow::Result;
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    Board, Outcome, Player, Strategist,
    cli::output,
    strategist::EXHAUSTIVE_DEPTH,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate the strategist against a random baseline")]
pub struct EvalArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 200)]
    pub games: usize,

    /// Search depth in plies (9 = exhaustive)
    #[arg(long, default_value_t = EXHAUSTIVE_DEPTH)]
    pub depth: usize,

    /// Random seed for the baseline opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Give the random baseline the first seat
    #[arg(long)]
    pub machine_second: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EvalStats {
    pub machine_wins: usize,
    pub baseline_wins: usize,
    pub draws: usize,
}

pub fn execute(args: EvalArgs) -> Result<()> {
    let machine = if args.machine_second {
        Player::Two
    } else {
        Player::One
    };
    let strategist = Strategist::new(args.depth);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let pb = output::create_eval_progress(args.games as u64);
    let mut stats = EvalStats::default();

    for _ in 0..args.games {
        match play_one(&strategist, machine, &mut rng) {
            Outcome::Win(winner) if winner == machine => stats.machine_wins += 1,
            Outcome::Win(_) => stats.baseline_wins += 1,
            Outcome::Draw => stats.draws += 1,
            Outcome::Ongoing => unreachable!("games are played to completion"),
        }
        pb.set_message(format!(
            "W{} D{} L{}",
            stats.machine_wins, stats.draws, stats.baseline_wins
        ));
        pb.inc(1);
    }
    pb.finish();

    output::print_section("Evaluation");
    output::print_kv("games", &args.games.to_string());
    output::print_kv("depth", &args.depth.to_string());
    output::print_kv(
        "machine seat",
        if machine == Player::One { "first" } else { "second" },
    );
    output::print_kv("machine wins", &stats.machine_wins.to_string());
    output::print_kv("draws", &stats.draws.to_string());
    output::print_kv("baseline wins", &stats.baseline_wins.to_string());

    Ok(())
}

/// Play a single game: the machine seat moves by search, the other seat
/// uniformly at random.
fn play_one(strategist: &Strategist, machine: Player, rng: &mut StdRng) -> Outcome {
    let mut board = Board::new();

    loop {
        let outcome = board.outcome();
        if !outcome.is_ongoing() {
            return outcome;
        }

        let mover = board.active_player();
        let mv = if mover == machine {
            match strategist.best_move(&mut board, mover) {
                Some(mv) => mv,
                None => return board.outcome(),
            }
        } else {
            let moves = board.legal_moves();
            if moves.is_empty() {
                return board.outcome();
            }
            moves[rng.random_range(0..moves.len())]
        };

        board
            .apply(mv)
            .expect("selected moves are always legal");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustive_machine_never_loses_to_random() {
        let strategist = Strategist::exhaustive();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let outcome = play_one(&strategist, Player::One, &mut rng);
            assert_ne!(outcome, Outcome::Win(Player::Two));
        }
    }

    #[test]
    fn second_seat_machine_never_loses_either() {
        let strategist = Strategist::exhaustive();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..10 {
            let outcome = play_one(&strategist, Player::Two, &mut rng);
            assert_ne!(outcome, Outcome::Win(Player::One));
        }
    }
}
