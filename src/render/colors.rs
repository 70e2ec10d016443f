//! Colour assignments for diagram cells

use crate::render::diagram::Cell;
use crossterm::style::Color;

/// Terminal colour for a cell, `None` for the default foreground
pub fn cell_color(cell: Cell) -> Option<Color> {
    match cell {
        Cell::Empty => None,
        Cell::AxisHorizontal | Cell::AxisVertical | Cell::Origin => Some(Color::DarkGrey),
        Cell::Circle => Some(Color::White),
        Cell::PhaseLine => Some(Color::Grey),
        Cell::DangerSector => Some(Color::Red),
        Cell::Health => Some(Color::Green),
    }
}
