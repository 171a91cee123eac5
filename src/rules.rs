//! Move legality and capture resolution.
//!
//! [`resolve_placement`] is a pure function of a board and a candidate
//! stone. Opponent captures are applied to the candidate board before the
//! mover's own liberties are counted: a placement that fills its own last
//! liberty is still legal when it takes the last liberty of an adjacent
//! opponent group.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::board::{Board, Color, Point, StructuralError};
use crate::group::flood;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// Point is not empty
    Occupied,
    /// Own group would have no liberties and nothing was captured
    Suicide,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::Occupied => write!(f, "point not empty"),
            IllegalMove::Suicide => write!(f, "suicide"),
        }
    }
}

impl std::error::Error for IllegalMove {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Rejected(IllegalMove),
    /// The position after the placement and any captures
    Accepted { board: Board, captured: usize },
}

impl Resolution {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Resolution::Accepted { .. })
    }
}

/// Decide whether `color` may play at `(x, y)` on `board`.
///
/// The input board is never modified. Steps:
/// 1. place the stone on a candidate copy,
/// 2. remove every adjacent opponent group left without liberties, each
///    distinct group once,
/// 3. count the liberties of the placed stone's group on the result,
/// 4. reject as suicide if that count is zero and nothing was captured.
pub fn resolve_placement(
    board: &Board,
    x: usize,
    y: usize,
    color: Color,
) -> Result<Resolution, StructuralError> {
    board.check((x, y))?;
    if board.at((x, y)).is_some() {
        return Ok(Resolution::Rejected(IllegalMove::Occupied));
    }

    let mut candidate = board.with_stone(x, y, color)?;
    let opp = color.opponent();
    let mut captured = 0;
    let mut processed: BTreeSet<Point> = BTreeSet::new();

    for n in board.neighbors((x, y)) {
        if candidate.at(n) != Some(opp) || processed.contains(&n) {
            continue;
        }
        let group = flood(&candidate, n);
        processed.extend(group.stones.iter().copied());
        if group.liberties == 0 {
            captured += group.len();
            candidate = candidate.without_stones(group.stones)?;
        }
    }

    let own = flood(&candidate, (x, y));
    if own.liberties == 0 && captured == 0 {
        debug!(x, y, %color, "placement rejected as suicide");
        return Ok(Resolution::Rejected(IllegalMove::Suicide));
    }

    if captured > 0 {
        debug!(x, y, %color, captured, "placement captures stones");
    }
    Ok(Resolution::Accepted {
        board: candidate,
        captured,
    })
}
