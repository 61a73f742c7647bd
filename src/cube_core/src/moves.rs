use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A side of the cube. The discriminant is the face index used by the
/// topology tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Face {
    Front = 0,
    Left = 1,
    Down = 2,
    Right = 3,
    Up = 4,
    Back = 5,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Front, Left, Down, Right, Up, Back];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Down => Face::Up,
            Face::Up => Face::Down,
        }
    }

    /// The single letter used for this face in move notation
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Left => 'L',
            Face::Down => 'D',
            Face::Right => 'R',
            Face::Up => 'U',
            Face::Back => 'B',
        }
    }

    #[must_use]
    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }
}

impl TryFrom<usize> for Face {
    type Error = MoveError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Face::ALL
            .get(value)
            .copied()
            .ok_or(MoveError::InvalidFace(value))
    }
}

impl From<Face> for usize {
    fn from(value: Face) -> Self {
        value.index()
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The rotational direction of a quarter turn.
///
/// With `Clockwise`, every facelet of a cycle takes the value that was on the
/// next facelet of that cycle. `CounterClockwise` undoes it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub const ALL: [Self; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    #[must_use]
    pub const fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    #[must_use]
    pub const fn signum(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = MoveError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::Clockwise),
            -1 => Ok(Direction::CounterClockwise),
            _ => Err(MoveError::InvalidDirection(value)),
        }
    }
}

impl From<Direction> for i32 {
    fn from(value: Direction) -> Self {
        value.signum()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Invalid face index, expected a value between 0 and 5 but got {0}")]
    InvalidFace(usize),
    #[error("Invalid direction, expected 1 or -1 but got {0}")]
    InvalidDirection(i32),
}

/// A quarter turn of a single face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub const fn new(face: Face, direction: Direction) -> Move {
        Move { face, direction }
    }

    /// Every quarter turn on the puzzle, clockwise ones first
    pub fn all() -> impl Iterator<Item = Move> {
        Direction::ALL
            .into_iter()
            .cartesian_product(Face::ALL)
            .map(|(direction, face)| Move::new(face, direction))
    }

    #[must_use]
    pub const fn inverse(self) -> Move {
        Move::new(self.face, self.direction.inverse())
    }
}

impl TryFrom<(usize, i32)> for Move {
    type Error = MoveError;

    fn try_from((face, direction): (usize, i32)) -> Result<Self, Self::Error> {
        Ok(Move::new(
            Face::try_from(face)?,
            Direction::try_from(direction)?,
        ))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("Expected a move but found nothing")]
    Empty,
    #[error("Unknown face `{face}` in move `{token}`, expected one of F L D R U B")]
    UnknownFace { token: String, face: char },
    #[error("Unknown suffix in move `{0}`, expected nothing, `'` or `2`")]
    UnknownSuffix(String),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses a single quarter turn; `2` suffixes are only accepted by
    /// `parse_moves`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_token(s)? {
            (move_, 1) => Ok(move_),
            _ => Err(ParseMoveError::UnknownSuffix(s.to_owned())),
        }
    }
}

fn parse_token(token: &str) -> Result<(Move, usize), ParseMoveError> {
    let mut chars = token.chars();
    let letter = chars.next().ok_or(ParseMoveError::Empty)?;
    let face = Face::from_letter(letter).ok_or_else(|| ParseMoveError::UnknownFace {
        token: token.to_owned(),
        face: letter,
    })?;

    match chars.as_str() {
        "" => Ok((Move::new(face, Direction::Clockwise), 1)),
        "'" => Ok((Move::new(face, Direction::CounterClockwise), 1)),
        "2" => Ok((Move::new(face, Direction::Clockwise), 2)),
        _ => Err(ParseMoveError::UnknownSuffix(token.to_owned())),
    }
}

/// Parse a whitespace separated move sequence such as `"F R' U2"`. Half turns
/// expand into two clockwise quarter turns.
///
/// # Errors
///
/// If any token does not name a face or carries an unknown suffix
pub fn parse_moves(sequence: &str) -> Result<Vec<Move>, ParseMoveError> {
    let mut moves = Vec::new();

    for token in sequence.split_whitespace() {
        let (move_, count) = parse_token(token)?;
        moves.extend(std::iter::repeat_n(move_, count));
    }

    Ok(moves)
}

/// The sequence that undoes `moves`
#[must_use]
pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|move_| move_.inverse()).collect()
}

/// Format a sequence in notation form
#[must_use]
pub fn format_moves(moves: &[Move]) -> String {
    moves.iter().join(" ")
}
