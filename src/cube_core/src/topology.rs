//! Static adjacency data of the 3x3 cube.
//!
//! Every quarter turn is the product of five disjoint 4-cycles of facelets:
//! the corners and edges of the turned face plus three rings through the
//! layer next to it, one for each position along the edges it shares with
//! its four neighbors. All of them are listed here; nothing is computed at
//! runtime.

use std::fmt::Display;

use thiserror::Error;

use crate::moves::{Face, MoveError};

pub const FACE_COUNT: usize = 6;
pub const SIDE: usize = 3;
pub const FACELETS_PER_FACE: usize = SIDE * SIDE;
pub const FACELET_COUNT: usize = FACE_COUNT * FACELETS_PER_FACE;

/// The address of a single square on the cube
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Facelet {
    face: Face,
    row: u8,
    col: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceletError {
    #[error(transparent)]
    InvalidFace(#[from] MoveError),
    #[error("Facelet position out of range, expected row and column below 3 but got ({row}, {col})")]
    OutOfRange { row: usize, col: usize },
}

impl Facelet {
    /// # Errors
    ///
    /// If `row` or `col` is not in `0..3`
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(face: Face, row: usize, col: usize) -> Result<Facelet, FaceletError> {
        if row >= SIDE || col >= SIDE {
            return Err(FaceletError::OutOfRange { row, col });
        }

        Ok(Facelet {
            face,
            row: row as u8,
            col: col as u8,
        })
    }

    /// Build a facelet from raw indices as handed over by input code.
    ///
    /// # Errors
    ///
    /// If any index is out of range
    pub fn from_indices(face: usize, row: usize, col: usize) -> Result<Facelet, FaceletError> {
        Facelet::new(Face::try_from(face)?, row, col)
    }

    const fn at(face: usize, row: u8, col: u8) -> Facelet {
        assert!(row < SIDE as u8 && col < SIDE as u8);

        Facelet {
            face: Face::ALL[face],
            row,
            col,
        }
    }

    #[must_use]
    pub const fn face(self) -> Face {
        self.face
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Position of this facelet in the flat state buffer
    #[must_use]
    pub const fn index(self) -> usize {
        self.face.index() * FACELETS_PER_FACE + self.row() * SIDE + self.col()
    }

    #[must_use]
    pub const fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }

    #[must_use]
    pub const fn is_corner(self) -> bool {
        self.row != 1 && self.col != 1
    }

    /// All 54 facelets in buffer order
    pub fn all() -> impl Iterator<Item = Facelet> {
        Face::ALL.into_iter().flat_map(Facelet::on_face)
    }

    /// The 9 facelets of `face` in row-major order
    pub fn on_face(face: Face) -> impl Iterator<Item = Facelet> {
        (0..SIDE as u8).flat_map(move |row| {
            (0..SIDE as u8).map(move |col| Facelet { face, row, col })
        })
    }
}

impl Display for Facelet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.face.index(), self.row, self.col)
    }
}

/// A cycle of facelets moved together by one quarter turn
pub type Cycle = [Facelet; 4];

const fn f(face: usize, row: u8, col: u8) -> Facelet {
    Facelet::at(face, row, col)
}

/// For each face, the rings of bordering facelets carried along by a turn of
/// that face. All three lie in the layer touching the face, one facelet per
/// neighbor; they differ by position along the shared edge.
pub static RINGS: [[Cycle; SIDE]; FACE_COUNT] = [
    [
        [f(1, 0, 0), f(2, 0, 0), f(3, 0, 0), f(4, 0, 0)],
        [f(1, 0, 1), f(2, 0, 1), f(3, 0, 1), f(4, 0, 1)],
        [f(1, 0, 2), f(2, 0, 2), f(3, 0, 2), f(4, 0, 2)],
    ],
    [
        [f(0, 0, 0), f(4, 2, 2), f(5, 0, 0), f(2, 0, 0)],
        [f(0, 1, 0), f(4, 1, 2), f(5, 1, 0), f(2, 1, 0)],
        [f(0, 2, 0), f(4, 0, 2), f(5, 2, 0), f(2, 2, 0)],
    ],
    [
        [f(0, 2, 0), f(1, 2, 2), f(5, 0, 2), f(3, 0, 0)],
        [f(0, 2, 1), f(1, 1, 2), f(5, 0, 1), f(3, 1, 0)],
        [f(0, 2, 2), f(1, 0, 2), f(5, 0, 0), f(3, 2, 0)],
    ],
    [
        [f(0, 0, 2), f(2, 0, 2), f(5, 0, 2), f(4, 2, 0)],
        [f(0, 1, 2), f(2, 1, 2), f(5, 1, 2), f(4, 1, 0)],
        [f(0, 2, 2), f(2, 2, 2), f(5, 2, 2), f(4, 0, 0)],
    ],
    [
        [f(3, 0, 2), f(5, 2, 2), f(1, 2, 0), f(0, 0, 0)],
        [f(3, 1, 2), f(5, 2, 1), f(1, 1, 0), f(0, 0, 1)],
        [f(3, 2, 2), f(5, 2, 0), f(1, 0, 0), f(0, 0, 2)],
    ],
    [
        [f(1, 2, 0), f(4, 2, 0), f(3, 2, 0), f(2, 2, 0)],
        [f(1, 2, 1), f(4, 2, 1), f(3, 2, 1), f(2, 2, 1)],
        [f(1, 2, 2), f(4, 2, 2), f(3, 2, 2), f(2, 2, 2)],
    ],
];

#[must_use]
pub const fn corners(face: Face) -> Cycle {
    let face = face.index();
    [f(face, 0, 0), f(face, 2, 0), f(face, 2, 2), f(face, 0, 2)]
}

#[must_use]
pub const fn edges(face: Face) -> Cycle {
    let face = face.index();
    [f(face, 1, 0), f(face, 2, 1), f(face, 1, 2), f(face, 0, 1)]
}

#[must_use]
pub fn rings(face: Face) -> &'static [Cycle; SIDE] {
    &RINGS[face.index()]
}

/// Every cycle permuted by a turn of `face`: corners, edges, then the rings
pub fn cycles(face: Face) -> impl Iterator<Item = Cycle> {
    [corners(face), edges(face)]
        .into_iter()
        .chain(rings(face).iter().copied())
}

/// Every facelet that a turn of `face` may change
pub fn affected(face: Face) -> impl Iterator<Item = Facelet> {
    cycles(face).flatten()
}
