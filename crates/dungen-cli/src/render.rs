//! ASCII rendering of a finished layout
//!
//! The canvas is one cell larger than the grid on every side so that wall
//! faces on the grid edge have somewhere to go.

use dungen_core::{CellTag, Direction, Dungeon, Position, WallFaces};
use strum::IntoEnumIterator;

pub const WALL: char = '#';

/// Draw the layout with inferred walls, one line per row
pub fn render_ascii(dungeon: &Dungeon) -> String {
    let grid = &dungeon.grid;
    let (cw, ch) = (grid.width() + 2, grid.height() + 2);
    let mut canvas = vec![vec![' '; cw]; ch];

    for (pos, tag) in grid.iter() {
        if tag != CellTag::Empty {
            canvas[pos.y + 1][pos.x + 1] = tag.symbol();
        }

        let faces = dungeon.wall_faces(pos);
        for dir in Direction::iter() {
            if !faces.contains(WallFaces::from_direction(dir)) {
                continue;
            }
            // Step on the padded canvas, where the grid edge is still in range
            let padded = Position::new(pos.x + 1, pos.y + 1);
            if let Some(wall) = padded.step(dir, cw, ch) {
                canvas[wall.y][wall.x] = WALL;
            }
        }
    }

    let mut out = String::with_capacity(ch * (cw + 1));
    for row in canvas {
        out.extend(row);
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        out.push('\n');
    }
    out
}

/// Raw tag rows, digits separated by spaces
pub fn render_raw(dungeon: &Dungeon) -> String {
    let width = dungeon.grid.width().max(1);
    dungeon
        .grid
        .as_raw()
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

/// One line per tag: symbol, value and name
pub fn legend() -> String {
    CellTag::iter()
        .map(|tag| format!("{} {:>2} {}", tag.symbol(), tag.value(), tag))
        .chain(std::iter::once(format!("{}    wall", WALL)))
        .collect::<Vec<_>>()
        .join("\n")
}
