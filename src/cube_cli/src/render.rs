//! Terminal drawing of the cube's net

use std::collections::HashMap;

use cube_core::{Color, Cube, Facelet, Position};
use owo_colors::OwoColorize;

/// How facelets are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Style {
    /// Colored blocks using 24 bit terminal colors
    Color,
    /// Color initials, for terminals and logs without color support
    Plain,
}

/// Draw `cube` laid out by its placement, one text line per grid row
#[must_use]
pub fn render(cube: &Cube, style: Style) -> String {
    let placement = cube.placement();
    let cells = placement
        .iter()
        .map(|(facelet, position)| (position, facelet))
        .collect::<HashMap<Position, Facelet>>();
    let (width, height) = placement.extent();

    let mut out = String::new();

    for y in 0..height {
        let mut line = String::new();

        for x in 0..width {
            match cells.get(&Position(x, y)) {
                Some(&facelet) => line.push_str(&cell(*cube.get(facelet), style)),
                None => line.push_str("  "),
            }
        }

        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn cell(color: Color, style: Style) -> String {
    match style {
        Style::Color => {
            let (r, g, b) = color.rgb();
            "  ".on_truecolor(r, g, b).to_string()
        }
        Style::Plain => format!("{} ", color.initial()),
    }
}
