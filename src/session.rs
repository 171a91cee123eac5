//! A single game in progress: committed board, side to move, capture tallies.
//!
//! Only [`GameSession::place`], [`GameSession::pass`] and
//! [`GameSession::reset`] change a session. Each either applies completely
//! or leaves the session exactly as it was.

use tracing::{debug, info};

use crate::board::{Board, Color, Point, StructuralError};
use crate::constants::DEFAULT_SIZE;
use crate::rules::{resolve_placement, IllegalMove, Resolution};

/// Opponent stones captured by each player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Captures {
    pub black: usize,
    pub white: usize,
}

impl Captures {
    pub fn get(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    fn add(&mut self, color: Color, n: usize) {
        match color {
            Color::Black => self.black += n,
            Color::White => self.white += n,
        }
    }
}

/// Read-only copy of a session for renderers and protocol hosts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub current_player: Color,
    pub captures: Captures,
    pub last_move: Option<Point>,
}

/// Result of [`GameSession::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Played { captured: usize },
    /// Nothing changed
    Rejected(IllegalMove),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_player: Color,
    captures: Captures,
    last_move: Option<Point>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_board(Board::empty(DEFAULT_SIZE))
    }
}

impl GameSession {
    /// Start a game on an empty `size`×`size` board with Black to move.
    pub fn new(size: usize) -> Result<Self, StructuralError> {
        Ok(Self::with_board(Board::new(size)?))
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            current_player: Color::Black,
            captures: Captures::default(),
            last_move: None,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn captures(&self) -> Captures {
        self.captures
    }

    pub fn last_move(&self) -> Option<Point> {
        self.last_move
    }

    /// Play a stone for the side to move.
    ///
    /// Occupied points and suicide come back as
    /// [`MoveOutcome::Rejected`] with the session untouched. Only an
    /// off-board coordinate is an error.
    pub fn place(&mut self, x: usize, y: usize) -> Result<MoveOutcome, StructuralError> {
        if self.board.get(x, y)?.is_some() {
            debug!(x, y, "placement on occupied point ignored");
            return Ok(MoveOutcome::Rejected(IllegalMove::Occupied));
        }

        let mover = self.current_player;
        match resolve_placement(&self.board, x, y, mover)? {
            Resolution::Rejected(why) => Ok(MoveOutcome::Rejected(why)),
            Resolution::Accepted { board, captured } => {
                self.board = board;
                self.captures.add(mover, captured);
                self.last_move = Some((x, y));
                self.current_player = mover.opponent();
                Ok(MoveOutcome::Played { captured })
            }
        }
    }

    /// Hand the turn to the opponent. Consecutive passes are not tracked.
    pub fn pass(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Return to an empty board of the same size with Black to move.
    pub fn reset(&mut self) {
        info!(size = self.size(), "session reset");
        *self = Self::with_board(Board::empty(self.size()));
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            captures: self.captures,
            last_move: self.last_move,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let session = GameSession::default();
        assert_eq!(session.size(), DEFAULT_SIZE);
        assert!(session.board().is_clear());
        assert_eq!(session.current_player(), Color::Black);
        assert_eq!(session.captures(), Captures::default());
        assert_eq!(session.last_move(), None);
    }

    #[test]
    fn test_invalid_size() {
        assert_eq!(
            GameSession::new(0),
            Err(StructuralError::InvalidSize(0))
        );
    }

    #[test]
    fn test_place_alternates_turns() {
        let mut session = GameSession::new(9).unwrap();
        assert_eq!(session.place(2, 2), Ok(MoveOutcome::Played { captured: 0 }));
        assert_eq!(session.current_player(), Color::White);
        assert_eq!(session.last_move(), Some((2, 2)));

        session.place(6, 6).unwrap();
        assert_eq!(session.current_player(), Color::Black);
        assert_eq!(session.board().get(6, 6), Ok(Some(Color::White)));
    }

    #[test]
    fn test_occupied_is_noop() {
        let mut session = GameSession::new(9).unwrap();
        session.place(4, 4).unwrap();
        let before = session.clone();

        let outcome = session.place(4, 4).unwrap();
        assert_eq!(outcome, MoveOutcome::Rejected(IllegalMove::Occupied));
        assert_eq!(session, before);
    }

    #[test]
    fn test_out_of_range_leaves_session_unchanged() {
        let mut session = GameSession::new(9).unwrap();
        let before = session.clone();
        assert!(matches!(
            session.place(9, 0),
            Err(StructuralError::OutOfBounds { .. })
        ));
        assert_eq!(session, before);
    }

    #[test]
    fn test_pass_only_flips_turn() {
        let mut session = GameSession::new(9).unwrap();
        session.place(3, 3).unwrap();
        let before = session.snapshot();

        session.pass();
        let after = session.snapshot();
        assert_eq!(after.current_player, Color::Black);
        assert_eq!(after.board, before.board);
        assert_eq!(after.captures, before.captures);
        assert_eq!(after.last_move, before.last_move);

        session.pass();
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_reset_keeps_size() {
        let mut session = GameSession::new(5).unwrap();
        session.place(0, 0).unwrap();
        session.pass();
        session.reset();
        assert_eq!(session, GameSession::new(5).unwrap());
    }

    #[test]
    fn test_captures_credited_to_mover() {
        let mut session = GameSession::new(9).unwrap();
        session.place(0, 0).unwrap(); // B
        session.place(1, 0).unwrap(); // W
        session.pass(); // B
        let outcome = session.place(0, 1).unwrap(); // W captures (0,0)
        assert_eq!(outcome, MoveOutcome::Played { captured: 1 });
        assert_eq!(session.captures().get(Color::White), 1);
        assert_eq!(session.captures().get(Color::Black), 0);
    }
}
