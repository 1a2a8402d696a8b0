//! Play command - interactive game against the strategist

use std::io::{self, BufRead, Write as _};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::{
    Cell, Outcome, Phase, Player, Position, Presenter, Session, Strategist, Tally,
    cli::output,
    strategist::EXHAUSTIVE_DEPTH,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the strategist")]
pub struct PlayArgs {
    /// Search depth in plies (9 = exhaustive)
    #[arg(long, default_value_t = EXHAUSTIVE_DEPTH)]
    pub depth: usize,

    /// Let the machine take the first seat (it then opens every match)
    #[arg(long)]
    pub machine_first: bool,

    /// Pause before showing the machine's reply, for pacing
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,
}

/// Presenter that draws to stdout.
struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn board_reset(&mut self) {
        println!("\nNew game. Cells are numbered 0-8, left to right, top to bottom.");
    }

    fn mark_placed(&mut self, position: Position, mark: Cell, _by: Player) {
        println!("{} -> {}", mark.to_char(), position);
    }

    fn match_ended(&mut self, outcome: Outcome, tally: &Tally) {
        match outcome {
            Outcome::Win(player) => println!("\nPlayer {} wins!", player.id() + 1),
            Outcome::Draw => println!("\nIt's a draw."),
            Outcome::Ongoing => {}
        }
        println!(
            "Score: you {} - {} machine ({} drawn)",
            tally.wins[0], tally.wins[1], tally.draws
        );
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run(&args, &mut input)
}

fn run(args: &PlayArgs, input: &mut dyn BufRead) -> Result<()> {
    let machine = if args.machine_first {
        Player::One
    } else {
        Player::Two
    };
    let mut session = Session::new(Strategist::new(args.depth), machine);
    let mut presenter = ConsolePresenter;
    session.start(&mut presenter);

    loop {
        if session.machine_to_move() {
            if args.delay_ms > 0 {
                // pacing only, never part of the search
                std::thread::sleep(Duration::from_millis(args.delay_ms));
            }
            session.machine_move(&mut presenter)?;
            continue;
        }

        if session.phase() == Phase::GameOver {
            if !prompt_yes_no(input, "Play again? [y/N] ")? {
                return Ok(());
            }
            session.start(&mut presenter);
            continue;
        }

        println!("\n{}", output::board_with_hints(session.board()));
        print!("Your move (0-8, q to quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        let Ok(position) = trimmed.parse::<usize>() else {
            println!("Enter a cell number between 0 and 8.");
            continue;
        };

        // invalid input is a rejected tap, not a crash
        if let Err(err) = session.human_move(position, &mut presenter) {
            println!("{err}");
        }
    }
}

fn prompt_yes_no(input: &mut dyn BufRead, prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().eq_ignore_ascii_case("y"))
}
