//! Board values: an N×N grid of cells, each empty or holding one stone.
//!
//! A [`Board`] is never edited in place from outside this module. The
//! placement and removal operations return a new board and leave the
//! receiver untouched, so a caller can keep the committed position and a
//! candidate position side by side and compare them.

use std::fmt;

use crate::constants::{MAX_SIZE, MIN_SIZE};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// An `(x, y)` coordinate. `x` is the column, `y` the row from the top edge.
pub type Point = (usize, usize);

/// A caller handed the engine a coordinate or size it can never accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// Coordinate outside `[0, size)` on either axis
    OutOfBounds { point: Point, size: usize },
    /// Board size outside `MIN_SIZE..=MAX_SIZE`
    InvalidSize(usize),
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::OutOfBounds { point: (x, y), size } => {
                write!(f, "coordinate ({x}, {y}) is outside the {size}x{size} board")
            }
            StructuralError::InvalidSize(size) => write!(
                f,
                "board size {size} is not supported (expected {MIN_SIZE}..={MAX_SIZE})"
            ),
        }
    }
}

impl std::error::Error for StructuralError {}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Create an all-empty `size`×`size` board.
    pub fn new(size: usize) -> Result<Self, StructuralError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(StructuralError::InvalidSize(size));
        }
        Ok(Self::empty(size))
    }

    /// Size must already be validated.
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, (x, y): Point) -> bool {
        x < self.size && y < self.size
    }

    /// Fail with [`StructuralError::OutOfBounds`] unless `pt` is on the board.
    pub fn check(&self, pt: Point) -> Result<(), StructuralError> {
        if self.contains(pt) {
            Ok(())
        } else {
            Err(StructuralError::OutOfBounds {
                point: pt,
                size: self.size,
            })
        }
    }

    fn idx(&self, (x, y): Point) -> usize {
        y * self.size + x
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Option<Color>, StructuralError> {
        self.check((x, y))?;
        Ok(self.at((x, y)))
    }

    /// Unchecked lookup for points already known to be on the board.
    pub(crate) fn at(&self, pt: Point) -> Option<Color> {
        self.cells[self.idx(pt)]
    }

    /// A copy of this board with `(x, y)` set to `color`.
    pub fn with_stone(&self, x: usize, y: usize, color: Color) -> Result<Board, StructuralError> {
        self.check((x, y))?;
        let mut next = self.clone();
        let i = next.idx((x, y));
        next.cells[i] = Some(color);
        Ok(next)
    }

    /// A copy of this board with every listed point set to empty.
    ///
    /// All points are validated before anything is copied.
    pub fn without_stones<I>(&self, points: I) -> Result<Board, StructuralError>
    where
        I: IntoIterator<Item = Point>,
    {
        let points: Vec<Point> = points.into_iter().collect();
        for &pt in &points {
            self.check(pt)?;
        }
        let mut next = self.clone();
        for pt in points {
            let i = next.idx(pt);
            next.cells[i] = None;
        }
        Ok(next)
    }

    /// Orthogonal neighbours of an on-board point.
    pub(crate) fn neighbors(&self, (x, y): Point) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        // wrapping_sub sends 0 to usize::MAX, which the filter drops
        [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ]
        .into_iter()
        .filter(move |&(nx, ny)| nx < s && ny < s)
    }

    /// Every point in row-major order, top row first.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        (0..s).flat_map(move |y| (0..s).map(move |x| (x, y)))
    }

    pub fn empty_points(&self) -> Vec<Point> {
        self.points().filter(|&pt| self.at(pt).is_none()).collect()
    }

    pub fn stone_count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// True when no cell holds a stone.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.at((x, y)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
