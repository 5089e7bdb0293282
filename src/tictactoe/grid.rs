//! Mapping pointer positions on the 3x3 grid to cell indices

use serde::{Deserialize, Serialize};

/// Pixel layout of the board, origin at the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridGeometry {
    /// Side length of one cell
    pub cell_size: f32,
    /// Dead band on each side of a grid line (and along the outer border)
    pub gutter: f32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            gutter: 5.0,
        }
    }
}

impl GridGeometry {
    /// Width and height of the whole board
    pub fn board_size(&self) -> f32 {
        self.cell_size * 3.0
    }

    /// Cell under `(x, y)`, or `None` for clicks on grid lines or off the board
    pub fn cell_at(&self, x: f32, y: f32) -> Option<usize> {
        let col = self.axis_cell(x)?;
        let row = self.axis_cell(y)?;
        Some(row * 3 + col)
    }

    /// Center of a cell, for placing its sprite
    pub fn cell_center(&self, index: usize) -> (f32, f32) {
        let col = (index % 3) as f32;
        let row = (index / 3) as f32;
        let half = self.cell_size / 2.0;
        (col * self.cell_size + half, row * self.cell_size + half)
    }

    fn axis_cell(&self, v: f32) -> Option<usize> {
        if !v.is_finite() {
            return None;
        }
        if v < self.gutter || v > self.board_size() - self.gutter {
            return None;
        }
        let cell = (v / self.cell_size).floor();
        let within = v - cell * self.cell_size;
        if within < self.gutter || within > self.cell_size - self.gutter {
            return None;
        }
        Some(cell as usize)
    }
}
