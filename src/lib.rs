//! Tic-tac-toe game model with a minimax strategist
//!
//! This crate provides:
//! - A 3x3 board model with in-place move application and undo
//! - Terminal-state classification and a static positional heuristic
//! - A depth-bounded minimax strategist over the apply/undo interface
//! - A turn-flow session that sequences human and machine moves behind
//!   an abstract presentation trait

pub mod board;
pub mod cli;
pub mod error;
pub mod lines;
pub mod session;
pub mod strategist;

pub use board::{Board, Cell, Move, Outcome, Player, Position};
pub use error::{Error, Result};
pub use lines::WINNING_LINES;
pub use session::{Phase, Presenter, Session, SilentPresenter, Tally};
pub use strategist::Strategist;
