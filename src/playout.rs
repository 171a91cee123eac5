//! Random self-play.
//!
//! Drives a [`GameSession`] with uniformly random legal placements. The
//! demo binary uses it to show the engine at work, and the tests use it to
//! push sessions through long, varied move sequences. The same seed always
//! produces the same game.

use fastrand::Rng;
use tracing::debug;

use crate::board::StructuralError;
use crate::session::{GameSession, MoveOutcome};

/// Counts collected over one playout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayoutSummary {
    pub placements: usize,
    pub passes: usize,
    /// Candidate points refused as illegal before a legal one was found
    pub rejections: usize,
    pub captured: usize,
}

/// Play up to `max_moves` actions on `session`.
///
/// Each action tries the empty points in random order and plays the first
/// legal one. If none is legal the side to move passes.
pub fn random_playout(
    session: &mut GameSession,
    rng: &mut Rng,
    max_moves: usize,
) -> Result<PlayoutSummary, StructuralError> {
    let mut summary = PlayoutSummary::default();

    for _ in 0..max_moves {
        let mut candidates = session.board().empty_points();
        rng.shuffle(&mut candidates);

        let mut played = false;
        for (x, y) in candidates {
            match session.place(x, y)? {
                MoveOutcome::Played { captured } => {
                    summary.placements += 1;
                    summary.captured += captured;
                    played = true;
                    break;
                }
                MoveOutcome::Rejected(_) => summary.rejections += 1,
            }
        }

        if !played {
            session.pass();
            summary.passes += 1;
        }
    }

    debug!(?summary, "playout finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameSession::new(7).unwrap();
        let mut b = GameSession::new(7).unwrap();
        let sa = random_playout(&mut a, &mut Rng::with_seed(42), 80).unwrap();
        let sb = random_playout(&mut b, &mut Rng::with_seed(42), 80).unwrap();
        assert_eq!(sa, sb);
        assert_eq!(a, b);
    }

    #[test]
    fn test_actions_add_up() {
        let mut session = GameSession::new(5).unwrap();
        let summary = random_playout(&mut session, &mut Rng::with_seed(7), 60).unwrap();
        assert_eq!(summary.placements + summary.passes, 60);

        let captures = session.captures();
        assert_eq!(summary.captured, captures.black + captures.white);

        // Every stone placed is either still on the board or was captured
        let on_board =
            session.board().stone_count(Color::Black) + session.board().stone_count(Color::White);
        assert_eq!(on_board + summary.captured, summary.placements);
    }

    #[test]
    fn test_single_cell_board_only_passes() {
        let mut session = GameSession::new(1).unwrap();
        let summary = random_playout(&mut session, &mut Rng::with_seed(1), 3).unwrap();
        assert_eq!(summary.placements, 0);
        assert_eq!(summary.passes, 3);
        assert_eq!(summary.rejections, 3);
        assert_eq!(session.current_player(), Color::White);
    }
}
