//! Character-grid storage.
//!
//! A fixed-size, row-major grid of glyphs. Coordinates are signed so that
//! callers can pass cells computed from drags that left the canvas; any
//! coordinate outside `0..cols` × `0..rows` is rejected rather than clamped.

use serde::{Deserialize, Serialize};

/// Glyph of an empty cell.
pub const BLANK: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharGrid {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl CharGrid {
    /// A blank grid of `cols` × `rows` cells.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![BLANK; cols * rows],
        }
    }

    /// Build a grid from newline-separated rows.
    ///
    /// The widest line sets the column count; shorter lines are padded
    /// with [`BLANK`].
    ///
    /// # Errors
    /// Returns an error if the text has no rows or no columns.
    pub fn from_text(text: &str) -> Result<Self, String> {
        let lines: Vec<&str> = text.lines().collect();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if lines.is_empty() || cols == 0 {
            return Err("Grid text has no cells".to_string());
        }

        let mut grid = Self::new(cols, lines.len());
        for (y, line) in lines.iter().enumerate() {
            let row = y * cols;
            for (x, ch) in line.chars().enumerate() {
                grid.cells[row + x] = ch;
            }
        }
        Ok(grid)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.cols || y >= self.rows {
            return None;
        }
        let idx = y * self.cols + x;
        (idx < self.cells.len()).then_some(idx)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Write `ch` at `(x, y)` and return the glyph it replaced.
    ///
    /// Out-of-range writes are ignored and return `None`.
    pub fn set(&mut self, x: i32, y: i32, ch: char) -> Option<char> {
        let Some(idx) = self.index(x, y) else {
            log::trace!(
                "rejecting {ch:?} at ({x}, {y}) outside {}x{} grid",
                self.cols,
                self.rows
            );
            return None;
        };
        Some(std::mem::replace(&mut self.cells[idx], ch))
    }

    /// Rows joined by `\n`, without a trailing newline.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.rows);
        for (y, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if y > 0 {
                out.push('\n');
            }
            out.extend(row);
        }
        out
    }
}
