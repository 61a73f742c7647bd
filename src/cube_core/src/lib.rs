#![warn(clippy::pedantic)]

//! Facelet model of a 3x3 cube.
//!
//! The state is a flat buffer of 54 facelet values. A quarter turn permutes
//! five 4-cycles of it, all taken from the constant tables in [`topology`].

pub mod color;
pub mod cube;
pub mod moves;
pub mod placement;
pub mod topology;

pub use color::Color;
pub use cube::Cube;
pub use moves::{
    Direction, Face, Move, MoveError, ParseMoveError, format_moves, invert_moves, parse_moves,
};
pub use placement::{MAX_COORDINATE, Placement, PlacementError, Position, RawPlacement};
pub use topology::{Facelet, FaceletError};
