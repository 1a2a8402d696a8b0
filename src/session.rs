//! Turn-flow orchestration around the board and strategist
//!
//! The session sequences setup, play, and game-over, applies the human
//! player's moves, asks the strategist for the machine's replies, and
//! reports render-worthy events through the [`Presenter`] trait. It holds
//! no display state of its own.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    board::{Board, Cell, Move, Outcome, Player, Position},
    strategist::Strategist,
};

/// Phase of a match. Transitions: Setup -> Playing -> GameOver -> Playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Playing,
    GameOver,
}

/// Running score across matches in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: [u32; 2],
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(player) => self.wins[player.id() as usize] += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    pub fn wins_for(&self, player: Player) -> u32 {
        self.wins[player.id() as usize]
    }
}

/// Render commands the session issues outward.
///
/// Implementations draw marks, clear the board, and announce results in
/// whatever medium they own; the session never references display
/// elements.
pub trait Presenter {
    /// The board was cleared for a new match.
    fn board_reset(&mut self);

    /// A mark was placed.
    fn mark_placed(&mut self, position: Position, mark: Cell, by: Player);

    /// The match ended.
    fn match_ended(&mut self, outcome: Outcome, tally: &Tally);
}

/// A presenter that renders nothing. Useful for headless drivers and
/// tests that only care about session state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPresenter;

impl Presenter for SilentPresenter {
    fn board_reset(&mut self) {}
    fn mark_placed(&mut self, _position: Position, _mark: Cell, _by: Player) {}
    fn match_ended(&mut self, _outcome: Outcome, _tally: &Tally) {}
}

/// One human-versus-machine session: a board, a strategist, and the
/// turn-flow state around them.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    strategist: Strategist,
    machine: Player,
    phase: Phase,
    tally: Tally,
}

impl Session {
    /// Create a session in the `Setup` phase. `machine` is the seat the
    /// strategist plays.
    pub fn new(strategist: Strategist, machine: Player) -> Self {
        Session {
            board: Board::new(),
            strategist,
            machine,
            phase: Phase::Setup,
            tally: Tally::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn machine_player(&self) -> Player {
        self.machine
    }

    /// True when it is the strategist's seat to move in an active match.
    pub fn machine_to_move(&self) -> bool {
        self.phase == Phase::Playing && self.board.active_player() == self.machine
    }

    /// Reset the board and enter `Playing`. Valid from any phase; the
    /// tally carries across matches.
    pub fn start(&mut self, presenter: &mut dyn Presenter) {
        self.board = Board::new();
        self.phase = Phase::Playing;
        presenter.board_reset();
    }

    /// Apply the human player's move at a raw position index.
    ///
    /// Invalid input leaves the board unchanged and surfaces as an error
    /// the caller can treat as a rejected tap: [`Error::GameOver`] outside
    /// the `Playing` phase, otherwise [`Error::PositionOutOfRange`] or
    /// [`Error::CellOccupied`].
    pub fn human_move(&mut self, position: usize, presenter: &mut dyn Presenter) -> Result<Phase> {
        if self.phase != Phase::Playing {
            return Err(Error::GameOver);
        }

        let mover = self.board.active_player();
        let mv = self.board.apply_at(position)?;
        presenter.mark_placed(mv.position, mover.mark(), mover);
        Ok(self.settle(presenter))
    }

    /// Ask the strategist for the machine's move and apply it.
    ///
    /// Returns the move played, or `None` when no legal move exists (the
    /// match settles as a draw, reconciled with the board's own
    /// classification).
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] outside the `Playing` phase.
    pub fn machine_move(&mut self, presenter: &mut dyn Presenter) -> Result<Option<Move>> {
        if self.phase != Phase::Playing {
            return Err(Error::GameOver);
        }

        let machine = self.machine;
        match self.strategist.best_move(&mut self.board, machine) {
            Some(mv) => {
                self.board
                    .apply(mv)
                    .expect("strategist selected an illegal move");
                presenter.mark_placed(mv.position, machine.mark(), machine);
                self.settle(presenter);
                Ok(Some(mv))
            }
            None => {
                self.settle(presenter);
                Ok(None)
            }
        }
    }

    fn settle(&mut self, presenter: &mut dyn Presenter) -> Phase {
        let outcome = self.board.outcome();
        if !outcome.is_ongoing() {
            self.tally.record(outcome);
            self.phase = Phase::GameOver;
            presenter.match_ended(outcome, &self.tally);
        }
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every presenter call for assertions.
    #[derive(Debug, Default)]
    struct RecordingPresenter {
        resets: usize,
        marks: Vec<(usize, Cell, Player)>,
        endings: Vec<(Outcome, Tally)>,
    }

    impl Presenter for RecordingPresenter {
        fn board_reset(&mut self) {
            self.resets += 1;
        }

        fn mark_placed(&mut self, position: Position, mark: Cell, by: Player) {
            self.marks.push((position.index(), mark, by));
        }

        fn match_ended(&mut self, outcome: Outcome, tally: &Tally) {
            self.endings.push((outcome, *tally));
        }
    }

    fn playing_session() -> (Session, RecordingPresenter) {
        let mut session = Session::new(Strategist::exhaustive(), Player::Two);
        let mut presenter = RecordingPresenter::default();
        session.start(&mut presenter);
        (session, presenter)
    }

    #[test]
    fn starts_in_setup_and_start_enters_playing() {
        let session = Session::new(Strategist::exhaustive(), Player::Two);
        assert_eq!(session.phase(), Phase::Setup);

        let (session, presenter) = playing_session();
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(presenter.resets, 1);
    }

    #[test]
    fn rejected_input_is_a_no_op() {
        let (mut session, mut presenter) = playing_session();
        session.human_move(4, &mut presenter).unwrap();

        let board_before = *session.board();
        assert!(matches!(
            session.human_move(4, &mut presenter),
            Err(Error::CellOccupied { position: 4 })
        ));
        assert!(matches!(
            session.human_move(42, &mut presenter),
            Err(Error::PositionOutOfRange { position: 42 })
        ));
        assert_eq!(*session.board(), board_before);
        assert_eq!(presenter.marks.len(), 1);
    }

    #[test]
    fn moves_before_start_are_rejected() {
        let mut session = Session::new(Strategist::exhaustive(), Player::Two);
        let mut presenter = SilentPresenter;
        assert!(matches!(
            session.human_move(0, &mut presenter),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn machine_answers_after_human() {
        let (mut session, mut presenter) = playing_session();
        session.human_move(4, &mut presenter).unwrap();
        assert!(session.machine_to_move());

        let reply = session.machine_move(&mut presenter).unwrap();
        assert!(reply.is_some());
        assert_eq!(presenter.marks.len(), 2);
        assert_eq!(presenter.marks[1].2, Player::Two);
        assert!(!session.machine_to_move());
    }

    #[test]
    fn finished_match_updates_tally_and_phase() {
        let (mut session, mut presenter) = playing_session();
        // drive the human seat to a quick win against no resistance by
        // playing both seats through the board directly
        for pos in [0, 3, 1, 4, 2] {
            let phase = session.human_move(pos, &mut presenter).unwrap();
            if phase == Phase::GameOver {
                break;
            }
        }

        assert_eq!(session.phase(), Phase::GameOver);
        assert_eq!(session.tally().wins_for(Player::One), 1);
        assert_eq!(presenter.endings.len(), 1);
        assert_eq!(presenter.endings[0].0, Outcome::Win(Player::One));

        // replay: tally carries, board resets
        session.start(&mut presenter);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.board().occupied_count(), 0);
        assert_eq!(session.tally().wins_for(Player::One), 1);
    }

    #[test]
    fn moves_after_game_over_are_rejected() {
        let (mut session, mut presenter) = playing_session();
        for pos in [0, 3, 1, 4, 2] {
            if session.human_move(pos, &mut presenter).unwrap() == Phase::GameOver {
                break;
            }
        }
        assert!(matches!(
            session.human_move(5, &mut presenter),
            Err(Error::GameOver)
        ));
        assert!(matches!(
            session.machine_move(&mut presenter),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn full_machine_vs_machine_game_is_a_draw() {
        // two exhaustive strategists from the empty board must draw
        let strategist = Strategist::exhaustive();
        let mut board = Board::new();

        while board.outcome().is_ongoing() {
            let player = board.active_player();
            match strategist.best_move(&mut board, player) {
                Some(mv) => board.apply(mv).unwrap(),
                None => break,
            }
        }

        assert_eq!(board.outcome(), Outcome::Draw);
    }
}
