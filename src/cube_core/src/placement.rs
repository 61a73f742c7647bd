use std::{collections::HashMap, fmt::Display};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::topology::{FACE_COUNT, Facelet, SIDE};

/// A cell in a two dimensional layout grid; `x` grows to the right and `y`
/// grows downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(pub u16, pub u16);

impl Position {
    #[must_use]
    pub const fn x(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn y(self) -> u16 {
        self.1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}

/// Largest coordinate a placement may use on either axis
pub const MAX_COORDINATE: u16 = 255;

/// An unvalidated layout as found in configuration files: faces, then rows,
/// then columns.
pub type RawPlacement = Vec<Vec<Vec<Position>>>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("Invalid face count, expected 6 faces but got {0}")]
    FaceCount(usize),
    #[error("Invalid row count on face {face}, expected 3 rows but got {actual}")]
    RowCount { face: usize, actual: usize },
    #[error("Invalid column count on face {face} row {row}, expected 3 columns but got {actual}")]
    ColumnCount {
        face: usize,
        row: usize,
        actual: usize,
    },
    #[error("Facelets {first} and {second} are both placed at {position}")]
    DuplicatePosition {
        position: Position,
        first: Facelet,
        second: Facelet,
    },
    #[error("Facelet {facelet} is placed at {position}, beyond the largest coordinate 255")]
    OutOfBounds { facelet: Facelet, position: Position },
}

/// Where each facelet is drawn. The cube logic never looks at this; it only
/// travels with the cube so that renderers can be swapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPlacement", into = "RawPlacement")]
pub struct Placement {
    positions: [[[Position; SIDE]; SIDE]; FACE_COUNT],
}

impl Placement {
    /// The unfolded net:
    ///
    /// ```text
    ///    0  1  2  3  4  5  6  7  8  9  10 11
    /// 0           0  0  0
    /// 1           0  0  0
    /// 2           0  0  0
    /// 3  1  1  1  2  2  2  3  3  3  4  4  4
    /// 4  1  1  1  2  2  2  3  3  3  4  4  4
    /// 5  1  1  1  2  2  2  3  3  3  4  4  4
    /// 6           5  5  5
    /// 7           5  5  5
    /// 8           5  5  5
    /// ```
    #[must_use]
    pub fn standard() -> Placement {
        const ORIGINS: [(u16, u16); FACE_COUNT] = [(3, 0), (0, 3), (3, 3), (6, 3), (9, 3), (3, 6)];

        Placement {
            positions: ORIGINS.map(|(x0, y0)| {
                std::array::from_fn(|row| {
                    std::array::from_fn(|col| Position(x0 + col as u16, y0 + row as u16))
                })
            }),
        }
    }

    #[must_use]
    pub fn position(&self, facelet: Facelet) -> Position {
        self.positions[facelet.face().index()][facelet.row()][facelet.col()]
    }

    /// Width and height of the smallest grid holding every facelet
    #[must_use]
    pub fn extent(&self) -> (u16, u16) {
        self.positions
            .iter()
            .flatten()
            .flatten()
            .fold((0u16, 0u16), |(w, h), position| {
                (
                    w.max(position.x().saturating_add(1)),
                    h.max(position.y().saturating_add(1)),
                )
            })
    }

    /// Positions of every facelet in buffer order
    pub fn iter(&self) -> impl Iterator<Item = (Facelet, Position)> + '_ {
        Facelet::all().map(|facelet| (facelet, self.position(facelet)))
    }
}

impl Default for Placement {
    fn default() -> Self {
        Placement::standard()
    }
}

impl TryFrom<RawPlacement> for Placement {
    type Error = PlacementError;

    fn try_from(raw: RawPlacement) -> Result<Self, Self::Error> {
        let result = validate(&raw);

        if let Err(e) = &result {
            warn!("Rejecting facelet placement: {e}");
        }

        result
    }
}

fn validate(raw: &RawPlacement) -> Result<Placement, PlacementError> {
    if raw.len() != FACE_COUNT {
        return Err(PlacementError::FaceCount(raw.len()));
    }

    for (face, rows) in raw.iter().enumerate() {
        if rows.len() != SIDE {
            return Err(PlacementError::RowCount {
                face,
                actual: rows.len(),
            });
        }

        for (row, cols) in rows.iter().enumerate() {
            if cols.len() != SIDE {
                return Err(PlacementError::ColumnCount {
                    face,
                    row,
                    actual: cols.len(),
                });
            }
        }
    }

    let placement = Placement {
        positions: std::array::from_fn(|face| {
            std::array::from_fn(|row| std::array::from_fn(|col| raw[face][row][col]))
        }),
    };

    let mut seen = HashMap::<Position, Facelet>::new();

    for (facelet, position) in placement.iter() {
        if position.x() > MAX_COORDINATE || position.y() > MAX_COORDINATE {
            return Err(PlacementError::OutOfBounds { facelet, position });
        }

        if let Some(&first) = seen.get(&position) {
            return Err(PlacementError::DuplicatePosition {
                position,
                first,
                second: facelet,
            });
        }

        seen.insert(position, facelet);
    }

    Ok(placement)
}

impl From<Placement> for RawPlacement {
    fn from(value: Placement) -> Self {
        value
            .positions
            .iter()
            .map(|rows| rows.iter().map(|cols| cols.to_vec()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::moves::Face;

    #[derive(Debug, Deserialize)]
    struct Layout {
        placement: Placement,
    }

    fn standard_raw() -> RawPlacement {
        Placement::standard().into()
    }

    fn layout_toml(raw: &RawPlacement) -> String {
        let faces = raw
            .iter()
            .map(|rows| {
                let rows = rows
                    .iter()
                    .map(|cols| {
                        let cols = cols.iter().map(|p| format!("[{}, {}]", p.0, p.1)).join(", ");
                        format!("[{cols}]")
                    })
                    .join(", ");
                format!("[{rows}]")
            })
            .join(", ");

        format!("placement = [{faces}]\n")
    }

    #[test]
    fn test_standard_net() {
        let placement = Placement::standard();

        assert_eq!(placement.extent(), (12, 9));
        assert_eq!(Placement::try_from(standard_raw()).unwrap(), placement);

        let facelet = Facelet::from_indices(0, 1, 2).unwrap();
        assert_eq!(placement.position(facelet), Position(5, 1));
        let facelet = Facelet::from_indices(4, 2, 0).unwrap();
        assert_eq!(placement.position(facelet), Position(9, 5));
        let facelet = Facelet::from_indices(5, 0, 1).unwrap();
        assert_eq!(placement.position(facelet), Position(4, 6));

        let right = placement
            .iter()
            .find(|&(_, position)| position == Position(7, 4))
            .map(|(facelet, _)| facelet.face());
        assert_eq!(right, Some(Face::Right));
        assert!(placement.iter().all(|(_, position)| position != Position(0, 0)));
    }

    #[test]
    fn test_wrong_face_count() {
        let mut raw = standard_raw();
        raw.pop();

        assert_eq!(Placement::try_from(raw), Err(PlacementError::FaceCount(5)));
    }

    #[test]
    fn test_wrong_row_and_column_counts() {
        let mut raw = standard_raw();
        raw[2].push(vec![Position(20, 20); 3]);
        assert_eq!(
            Placement::try_from(raw),
            Err(PlacementError::RowCount { face: 2, actual: 4 })
        );

        let mut raw = standard_raw();
        raw[4][1].remove(0);
        assert_eq!(
            Placement::try_from(raw),
            Err(PlacementError::ColumnCount {
                face: 4,
                row: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn test_duplicate_positions() {
        let mut raw = standard_raw();
        raw[5][2][2] = Position(3, 0);

        assert_eq!(
            Placement::try_from(raw),
            Err(PlacementError::DuplicatePosition {
                position: Position(3, 0),
                first: Facelet::from_indices(0, 0, 0).unwrap(),
                second: Facelet::from_indices(5, 2, 2).unwrap(),
            })
        );
    }

    #[test]
    fn test_coordinates_out_of_bounds() {
        for position in [Position(65535, 0), Position(60000, 60000), Position(0, 256)] {
            let mut raw = standard_raw();
            raw[5][2][2] = position;

            assert_eq!(
                Placement::try_from(raw),
                Err(PlacementError::OutOfBounds {
                    facelet: Facelet::from_indices(5, 2, 2).unwrap(),
                    position,
                })
            );
        }

        let mut raw = standard_raw();
        raw[5][2][2] = Position(MAX_COORDINATE, MAX_COORDINATE);
        let placement = Placement::try_from(raw).unwrap();
        assert_eq!(placement.extent(), (256, 256));
    }

    #[test]
    fn test_extent_saturates() {
        let mut placement = Placement::standard();
        placement.positions[0][0][0] = Position(u16::MAX, 0);

        assert_eq!(placement.extent(), (u16::MAX, 9));
    }

    #[test]
    fn test_placement_from_toml() {
        let layout = toml::from_str::<Layout>(&layout_toml(&standard_raw())).unwrap();
        assert_eq!(layout.placement, Placement::standard());

        let err = toml::from_str::<Layout>("placement = [[[[0, 0]]]]\n").unwrap_err();
        assert!(err.to_string().contains("Invalid face count"), "{err}");

        let mut raw = standard_raw();
        raw[5][2][2] = Position(65535, 0);
        let err = toml::from_str::<Layout>(&layout_toml(&raw)).unwrap_err();
        assert!(err.to_string().contains("beyond the largest coordinate"), "{err}");
    }
}
