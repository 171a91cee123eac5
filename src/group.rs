//! Group and liberty analysis.
//!
//! Groups are never stored. They are recomputed from a board value each
//! time a move needs them.

use std::collections::BTreeSet;

use crate::board::{Board, Point, StructuralError};

/// A maximal orthogonally connected set of same-coloured stones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Group {
    pub stones: BTreeSet<Point>,
    /// Number of distinct empty points touching the group
    pub liberties: usize,
}

impl Group {
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn is_captured(&self) -> bool {
        !self.is_empty() && self.liberties == 0
    }
}

/// Find the group containing `(x, y)` and count its liberties.
///
/// An empty starting point yields an empty group with zero liberties.
pub fn analyze(board: &Board, x: usize, y: usize) -> Result<Group, StructuralError> {
    board.check((x, y))?;
    Ok(flood(board, (x, y)))
}

/// Work-list flood fill from an on-board point. Visits each cell at most once.
pub(crate) fn flood(board: &Board, start: Point) -> Group {
    let Some(color) = board.at(start) else {
        return Group::default();
    };

    let mut stones = BTreeSet::new();
    let mut counted_liberties = BTreeSet::new();
    let mut stack = vec![start];

    while let Some(pt) = stack.pop() {
        if !stones.insert(pt) {
            continue;
        }
        for n in board.neighbors(pt) {
            match board.at(n) {
                None => {
                    counted_liberties.insert(n);
                }
                Some(c) if c == color && !stones.contains(&n) => stack.push(n),
                _ => {}
            }
        }
    }

    Group {
        stones,
        liberties: counted_liberties.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn board_with(size: usize, black: &[Point], white: &[Point]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(x, y) in black {
            board = board.with_stone(x, y, Color::Black).unwrap();
        }
        for &(x, y) in white {
            board = board.with_stone(x, y, Color::White).unwrap();
        }
        board
    }

    #[test]
    fn test_single_stone_liberties() {
        let board = board_with(9, &[(4, 4), (0, 0), (4, 0)], &[]);
        assert_eq!(analyze(&board, 4, 4).unwrap().liberties, 4);
        assert_eq!(analyze(&board, 0, 0).unwrap().liberties, 2);
        assert_eq!(analyze(&board, 4, 0).unwrap().liberties, 3);
    }

    #[test]
    fn test_empty_point_is_degenerate_group() {
        let board = Board::new(9).unwrap();
        let group = analyze(&board, 3, 3).unwrap();
        assert!(group.is_empty());
        assert_eq!(group.liberties, 0);
        assert!(!group.is_captured());
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        // L-shape: (1,1) is adjacent to both (1,0) and (0,1)
        let board = board_with(9, &[(0, 0), (1, 0), (0, 1)], &[]);
        let group = analyze(&board, 0, 0).unwrap();
        assert_eq!(group.len(), 3);
        // (2,0), (1,1), (0,2)
        assert_eq!(group.liberties, 3);
    }

    #[test]
    fn test_group_stops_at_other_color() {
        let board = board_with(9, &[(2, 2), (3, 2)], &[(4, 2), (2, 3)]);
        let group = analyze(&board, 3, 2).unwrap();
        assert_eq!(group.stones, BTreeSet::from([(2, 2), (3, 2)]));
        // (2,1), (3,1), (1,2), (3,3)
        assert_eq!(group.liberties, 4);

        let white = analyze(&board, 4, 2).unwrap();
        assert_eq!(white.len(), 1);
    }

    #[test]
    fn test_surrounded_group_has_no_liberties() {
        let board = board_with(9, &[(0, 0)], &[(1, 0), (0, 1)]);
        let group = analyze(&board, 0, 0).unwrap();
        assert_eq!(group.liberties, 0);
        assert!(group.is_captured());
    }

    #[test]
    fn test_filled_board_is_one_group() {
        let size = 25;
        let all: Vec<Point> = Board::new(size).unwrap().points().collect();
        let board = board_with(size, &all, &[]);
        let group = analyze(&board, 12, 12).unwrap();
        assert_eq!(group.len(), size * size);
        assert_eq!(group.liberties, 0);
    }

    #[test]
    fn test_out_of_range() {
        let board = Board::new(9).unwrap();
        assert!(matches!(
            analyze(&board, 0, 9),
            Err(StructuralError::OutOfBounds { .. })
        ));
    }
}
