use std::{fmt::Display, ops::Index};

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    color::Color,
    moves::{Direction, Face, Move, MoveError},
    placement::{Placement, PlacementError, RawPlacement},
    topology::{self, FACE_COUNT, FACELET_COUNT, Facelet, FaceletError, SIDE},
};

/// The facelet state of a 3x3 cube.
///
/// Colors can be any comparable value; the cube never creates or drops one,
/// it only moves them around. Two cubes are equal when all 54 facelets hold
/// equal values.
#[derive(Debug, Clone)]
pub struct Cube<C = Color> {
    squares: [C; FACELET_COUNT],
    colors: [C; FACE_COUNT],
    placement: Placement,
}

impl<C: Clone + Eq> Cube<C> {
    /// A solved cube where face `i` is colored `colors[i]`
    pub fn new(colors: [C; FACE_COUNT]) -> Cube<C> {
        Cube::with_placement(colors, Placement::standard())
    }

    pub fn with_placement(colors: [C; FACE_COUNT], placement: Placement) -> Cube<C> {
        debug!("Initializing cube with a {:?} placement", placement.extent());

        Cube {
            squares: solved_squares(&colors),
            colors,
            placement,
        }
    }

    /// A solved cube laid out by `mapping`, or by the standard net if there is
    /// none.
    ///
    /// # Errors
    ///
    /// If `mapping` does not have the shape of a cube or places two facelets
    /// on the same position
    pub fn with_mapping(
        colors: [C; FACE_COUNT],
        mapping: Option<RawPlacement>,
    ) -> Result<Cube<C>, PlacementError> {
        let placement = match mapping {
            Some(raw) => Placement::try_from(raw)?,
            None => Placement::standard(),
        };

        Ok(Cube::with_placement(colors, placement))
    }

    /// Bring every facelet back to its face's color
    pub fn reset(&mut self) {
        self.squares = solved_squares(&self.colors);
    }

    pub fn get(&self, facelet: Facelet) -> &C {
        &self.squares[facelet.index()]
    }

    /// Read a facelet addressed by raw indices.
    ///
    /// # Errors
    ///
    /// If the face, row, or column is out of range
    pub fn try_get(&self, face: usize, row: usize, col: usize) -> Result<&C, FaceletError> {
        Ok(self.get(Facelet::from_indices(face, row, col)?))
    }

    /// The facelets of one face, row by row
    pub fn face(&self, face: Face) -> [[&C; SIDE]; SIDE] {
        let start = face.index() * SIDE * SIDE;

        std::array::from_fn(|row| std::array::from_fn(|col| &self.squares[start + row * SIDE + col]))
    }

    /// Every facelet value in buffer order, see `Facelet::index`
    pub fn squares(&self) -> &[C] {
        &self.squares
    }

    pub fn colors(&self) -> &[C; FACE_COUNT] {
        &self.colors
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Whether every face is a single color. Whole-cube reorientations of the
    /// solved state also count.
    pub fn is_solved(&self) -> bool {
        self.squares
            .chunks_exact(SIDE * SIDE)
            .all(|face| face.iter().all_equal())
    }

    /// Quarter turn `face` in `direction`
    pub fn turn(&mut self, face: Face, direction: Direction) {
        for cycle in topology::cycles(face) {
            self.shift(&cycle, direction);
        }
    }

    pub fn apply(&mut self, move_: Move) {
        trace!("Applying {move_}");

        self.turn(move_.face, move_.direction);
    }

    pub fn apply_all(&mut self, moves: impl IntoIterator<Item = Move>) {
        for move_ in moves {
            self.apply(move_);
        }
    }

    /// Turn using raw indices as they come from input handling. Nothing is
    /// changed unless both values are valid.
    ///
    /// # Errors
    ///
    /// If `face` is not in `0..6` or `direction` is not 1 or -1
    pub fn try_turn(&mut self, face: usize, direction: i32) -> Result<Move, MoveError> {
        let move_ = Move::try_from((face, direction))?;

        self.apply(move_);

        Ok(move_)
    }

    /// Apply `count` uniformly random quarter turns and return them
    pub fn scramble(&mut self, rng: &mut fastrand::Rng, count: usize) -> Vec<Move> {
        let moves = (0..count)
            .map(|_| {
                let face = Face::ALL[rng.usize(..FACE_COUNT)];
                let direction = Direction::ALL[rng.usize(..Direction::ALL.len())];
                Move::new(face, direction)
            })
            .collect_vec();

        debug!("Scrambling with {}", moves.iter().join(" "));

        self.apply_all(moves.iter().copied());

        moves
    }

    /// Rotate the values along `cycle` by one step.
    ///
    /// Clockwise: `[a, b, c, d] -> [b, c, d, a]`
    /// Counter-clockwise: `[a, b, c, d] -> [d, a, b, c]`
    fn shift(&mut self, cycle: &[Facelet], direction: Direction) {
        let (Some(first), Some(last)) = (cycle.first(), cycle.last()) else {
            return;
        };

        match direction {
            Direction::Clockwise => {
                let boundary = self.squares[first.index()].clone();

                for (to, from) in cycle.iter().tuple_windows() {
                    self.squares[to.index()] = self.squares[from.index()].clone();
                }

                self.squares[last.index()] = boundary;
            }
            Direction::CounterClockwise => {
                let boundary = self.squares[last.index()].clone();

                for (to, from) in cycle.iter().rev().tuple_windows() {
                    self.squares[to.index()] = self.squares[from.index()].clone();
                }

                self.squares[first.index()] = boundary;
            }
        }
    }
}

fn solved_squares<C: Clone>(colors: &[C; FACE_COUNT]) -> [C; FACELET_COUNT] {
    std::array::from_fn(|i| colors[i / (SIDE * SIDE)].clone())
}

impl Default for Cube<Color> {
    fn default() -> Self {
        Cube::new(Color::CANONICAL)
    }
}

impl<C: PartialEq> PartialEq for Cube<C> {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
    }
}

impl<C: Eq> Eq for Cube<C> {}

impl<C: Clone + Eq> Index<Facelet> for Cube<C> {
    type Output = C;

    fn index(&self, index: Facelet) -> &Self::Output {
        self.get(index)
    }
}

impl Display for Cube<Color> {
    /// Each face as nine color initials, faces separated by spaces
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces = self
            .squares
            .chunks_exact(SIDE * SIDE)
            .map(|face| face.iter().map(|color| color.initial()).collect::<String>())
            .join(" ");

        write!(f, "{faces}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facelet(face: usize, row: usize, col: usize) -> Facelet {
        Facelet::from_indices(face, row, col).unwrap()
    }

    #[test]
    fn test_solved_cube() {
        let cube = Cube::default();

        assert!(cube.is_solved());
        assert_eq!(
            cube.to_string(),
            "WWWWWWWWW RRRRRRRRR BBBBBBBBB OOOOOOOOO GGGGGGGGG YYYYYYYYY"
        );
        assert_eq!(cube.try_get(3, 1, 1), Ok(&Color::Orange));
        assert_eq!(
            cube.try_get(3, 1, 3),
            Err(FaceletError::OutOfRange { row: 1, col: 3 })
        );
    }

    #[test]
    fn test_shift_directions() {
        let mut cube = Cube::new([0, 1, 2, 3, 4, 5]);
        let cycle = [
            facelet(1, 0, 0),
            facelet(2, 0, 0),
            facelet(3, 0, 0),
            facelet(4, 0, 0),
        ];

        cube.shift(&cycle, Direction::Clockwise);
        assert_eq!(cycle.map(|f| cube[f]), [2, 3, 4, 1]);

        cube.shift(&cycle, Direction::CounterClockwise);
        cube.shift(&cycle, Direction::CounterClockwise);
        assert_eq!(cycle.map(|f| cube[f]), [4, 1, 2, 3]);

        cube.shift(&[], Direction::Clockwise);
        cube.shift(&cycle[..1], Direction::Clockwise);
        assert_eq!(cycle.map(|f| cube[f]), [4, 1, 2, 3]);
    }

    #[test]
    fn test_face_self_rotation() {
        let mut cube = Cube::new(['a', 'b', 'c', 'd', 'e', 'f']);

        // Label face 0 so that its own rotation is visible
        for (i, facelet) in Facelet::on_face(Face::Front).enumerate() {
            cube.squares[facelet.index()] = char::from(b'0' + u8::try_from(i).unwrap());
        }

        cube.turn(Face::Front, Direction::Clockwise);

        assert_eq!(
            cube.face(Face::Front),
            [[&'6', &'3', &'0'], [&'7', &'4', &'1'], [&'8', &'5', &'2']]
        );
    }

    fn labelled() -> Cube<usize> {
        let mut cube = Cube::new([0; FACE_COUNT]);
        cube.squares = std::array::from_fn(|i| i);
        cube
    }

    #[test]
    fn test_turns_move_exactly_their_cycles() {
        for move_ in Move::all() {
            let mut cube = labelled();
            cube.apply(move_);

            let affected = topology::affected(move_.face).collect_vec();

            for facelet in Facelet::all() {
                let moved = cube[facelet] != facelet.index();
                assert_eq!(moved, affected.contains(&facelet), "{move_} {facelet}");
            }

            let values = cube.squares().iter().copied().sorted().collect_vec();
            assert!(values.into_iter().eq(0..FACELET_COUNT));
        }
    }

    #[test]
    fn test_labelled_inverse_and_order() {
        for move_ in Move::all() {
            let mut cube = labelled();

            cube.apply(move_);
            cube.apply(move_.inverse());
            assert_eq!(cube, labelled());

            cube.apply_all([move_; 4]);
            assert_eq!(cube, labelled());
        }
    }

    #[test]
    fn test_invalid_turns_leave_cube_untouched() {
        let mut cube = Cube::default();
        cube.turn(Face::Left, Direction::Clockwise);
        let before = cube.clone();

        assert_eq!(cube.try_turn(6, 1), Err(MoveError::InvalidFace(6)));
        assert_eq!(cube.try_turn(0, 0), Err(MoveError::InvalidDirection(0)));
        assert_eq!(cube.try_turn(0, 2), Err(MoveError::InvalidDirection(2)));
        assert_eq!(cube, before);

        assert_eq!(
            cube.try_turn(1, -1),
            Ok(Move::new(Face::Left, Direction::CounterClockwise))
        );
        assert!(cube.is_solved());
    }

    #[test]
    fn test_reset() {
        let mut cube = Cube::default();
        cube.scramble(&mut fastrand::Rng::with_seed(7), 25);
        cube.reset();

        assert_eq!(cube, Cube::default());
    }

    #[test]
    fn test_with_mapping() {
        let cube = Cube::with_mapping(Color::CANONICAL, None).unwrap();
        assert_eq!(cube.placement(), &Placement::standard());

        let mut raw = RawPlacement::from(Placement::standard());
        raw[0].pop();
        assert_eq!(
            Cube::with_mapping(Color::CANONICAL, Some(raw)).unwrap_err(),
            PlacementError::RowCount { face: 0, actual: 2 }
        );
    }
}
