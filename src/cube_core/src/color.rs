use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::moves::Face;

/// Sticker colors of the standard cube
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Blue,
    Orange,
    Green,
    Yellow,
}

impl Color {
    /// Colors of the solved cube, indexed by face
    pub const CANONICAL: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Blue,
        Color::Orange,
        Color::Green,
        Color::Yellow,
    ];

    #[must_use]
    pub const fn of_face(face: Face) -> Color {
        Color::CANONICAL[face.index()]
    }

    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::White => (0xFF, 0xFF, 0xFF),
            Color::Red => (0xFF, 0x00, 0x00),
            Color::Blue => (0x00, 0x00, 0xFF),
            Color::Orange => (0xE5, 0x54, 0x00),
            Color::Green => (0x00, 0x80, 0x00),
            Color::Yellow => (0xFF, 0xFF, 0x00),
        }
    }

    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Yellow => 'Y',
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (r, g, b) = self.rgb();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_canonical_colors_are_distinct() {
        assert!(Color::CANONICAL.iter().all_unique());
        assert!(Color::CANONICAL.iter().map(|c| c.rgb()).all_unique());
        assert_eq!(Color::of_face(Face::Right), Color::Orange);
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(Color::Orange.to_string(), "#E55400");
        assert_eq!(Color::Yellow.to_string(), "#FFFF00");
        assert_eq!(Color::White.to_string(), "#FFFFFF");
    }
}
