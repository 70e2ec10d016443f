//! Rasterizes a character snapshot into a grid of terminal cells
//!
//! Row 0 is the top of the plot; the positive imaginary axis points up.

use crate::core::angle::{argument, from_polar, wrap_angle};
use crate::core::config::DiagramConfig;
use crate::render::colors::cell_color;
use crate::render::DiagramSnapshot;
use crossterm::style::{style, Stylize};
use glam::DVec2;
use std::f64::consts::{FRAC_PI_4, PI, TAU};
use std::io::{self, Write};

/// Room left around the circle, as a multiple of the radius
const MARGIN: f64 = 1.15;

/// What occupies one cell of the diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    AxisHorizontal,
    AxisVertical,
    Origin,
    Circle,
    PhaseLine,
    DangerSector,
    Health,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::AxisHorizontal => '-',
            Cell::AxisVertical => '|',
            Cell::Origin => '+',
            Cell::Circle => '*',
            Cell::PhaseLine => '#',
            Cell::DangerSector => ':',
            Cell::Health => '@',
        }
    }
}

/// A rendered diagram
#[derive(Debug, Clone)]
pub struct Diagram {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    /// Cell coordinates of the origin
    center: DVec2,
    /// Plane units covered by one cell along each axis
    scale: DVec2,
}

impl Diagram {
    /// Draw a snapshot. Later layers cover earlier ones: axes, danger
    /// sector, circle, phase line, then the health marker.
    pub fn rasterize(snapshot: &DiagramSnapshot, config: &DiagramConfig) -> Self {
        let width = config.width;
        let height = config.height;
        let center = DVec2::new(
            (width.saturating_sub(1) as f64 / 2.0).max(1.0),
            (height.saturating_sub(1) as f64 / 2.0).max(1.0),
        );
        let extent = snapshot.max_health * MARGIN;

        let mut diagram = Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            center,
            scale: DVec2::new(extent / center.x, extent / center.y),
        };

        diagram.paint_axes();
        diagram.paint_sector(snapshot.max_health, snapshot.phase + PI);
        diagram.paint_circle(snapshot.max_health);
        diagram.paint_phase_line(snapshot.max_health, snapshot.phase);
        if let Some((col, row)) = diagram.plane_to_cell(snapshot.health) {
            diagram.set(col, row, Cell::Health);
        }

        tracing::debug!(
            "Rasterized {} into {}x{} cells",
            snapshot.name,
            width,
            height
        );
        diagram
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Centre point of a cell in plane coordinates
    pub fn cell_to_plane(&self, col: usize, row: usize) -> DVec2 {
        DVec2::new(
            (col as f64 - self.center.x) * self.scale.x,
            (self.center.y - row as f64) * self.scale.y,
        )
    }

    /// Cell containing a plane point, if it is inside the grid
    pub fn plane_to_cell(&self, point: DVec2) -> Option<(usize, usize)> {
        let col = (point.x / self.scale.x + self.center.x).round();
        let row = (self.center.y - point.y / self.scale.y).round();

        if col < 0.0 || row < 0.0 || col >= self.width as f64 || row >= self.height as f64 {
            return None;
        }
        Some((col as usize, row as usize))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Diagram as plain text, one line per row, trailing blanks removed
    pub fn to_plain_string(&self) -> String {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| {
                let line: String = row.iter().map(|cell| cell.glyph()).collect();
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the diagram, optionally coloured, followed by a legend
    pub fn write_to<W: Write>(&self, out: &mut W, color: bool) -> io::Result<()> {
        for row in self.cells.chunks(self.width.max(1)) {
            for &cell in row {
                match cell_color(cell).filter(|_| color) {
                    Some(c) => write!(out, "{}", style(cell.glyph()).with(c))?,
                    None => write!(out, "{}", cell.glyph())?,
                }
            }
            writeln!(out)?;
        }
        writeln!(out, "{}", Self::legend())?;
        Ok(())
    }

    pub fn legend() -> &'static str {
        "@ health   # phase   : danger   * max health"
    }

    fn set(&mut self, col: usize, row: usize, cell: Cell) {
        let index = row * self.width + col;
        self.cells[index] = cell;
    }

    fn paint_axes(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let point = self.cell_to_plane(col, row);
                let on_real = point.y.abs() < self.scale.y / 2.0;
                let on_imaginary = point.x.abs() < self.scale.x / 2.0;
                let cell = match (on_real, on_imaginary) {
                    (true, true) => Cell::Origin,
                    (true, false) => Cell::AxisHorizontal,
                    (false, true) => Cell::AxisVertical,
                    (false, false) => continue,
                };
                self.set(col, row, cell);
            }
        }
    }

    /// Quarter-turn wedge of the disc centred on `center_angle`
    fn paint_sector(&mut self, radius: f64, center_angle: f64) {
        for row in 0..self.height {
            for col in 0..self.width {
                let point = self.cell_to_plane(col, row);
                let distance = point.length();
                if distance == 0.0 || distance > radius {
                    continue;
                }
                let offset = wrap_angle(argument(point) - center_angle + PI) - PI;
                if offset.abs() <= FRAC_PI_4 {
                    self.set(col, row, Cell::DangerSector);
                }
            }
        }
    }

    fn paint_circle(&mut self, radius: f64) {
        let samples = 8 * (self.width + self.height);
        for i in 0..samples {
            let angle = TAU * i as f64 / samples as f64;
            if let Some((col, row)) = self.plane_to_cell(from_polar(radius, angle)) {
                self.set(col, row, Cell::Circle);
            }
        }
    }

    fn paint_phase_line(&mut self, radius: f64, phase: f64) {
        let samples = 2 * (self.width + self.height);
        for i in 1..=samples {
            let distance = radius * i as f64 / samples as f64;
            if let Some((col, row)) = self.plane_to_cell(from_polar(distance, phase)) {
                if self.cell(col, row) != Cell::Origin {
                    self.set(col, row, Cell::PhaseLine);
                }
            }
        }
    }
}
