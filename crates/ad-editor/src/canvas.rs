//! The canvas contract tools draw through, and an in-memory host for it.
//!
//! Tools never touch grid storage directly. They stage transient glyphs
//! with [`Canvas::preview_char_at`] while a gesture is in flight, and on
//! release open an undo entry with [`Canvas::add_undo_action`] before
//! committing with [`Canvas::draw_char_at`]. Range checking of cell
//! coordinates belongs to the canvas.

use std::collections::BTreeMap;

use ad_core::CharGrid;

use crate::commands::{CellChange, CommandStack};

/// Default number of undo entries kept by [`GridCanvas`].
pub const DEFAULT_UNDO_DEPTH: usize = 100;

/// Operations a drawing tool may request from its host canvas.
pub trait Canvas {
    /// Stage a transient glyph at a cell. Must not change committed content.
    fn preview_char_at(&mut self, x: i32, y: i32, ch: char);

    /// Remove every glyph staged since the last clear.
    fn clear_preview(&mut self);

    /// Permanently set a cell's glyph.
    fn draw_char_at(&mut self, x: i32, y: i32, ch: char);

    /// Open an undo checkpoint; subsequent `draw_char_at` calls belong to it.
    fn add_undo_action(&mut self, label: &str);
}

// ─── GridCanvas ──────────────────────────────────────────────────────────

/// A headless canvas: committed [`CharGrid`], preview layer, undo history.
pub struct GridCanvas {
    grid: CharGrid,
    /// Staged glyphs keyed by `(y, x)` so iteration is row-major.
    preview: BTreeMap<(i32, i32), char>,
    history: CommandStack,
}

impl GridCanvas {
    /// A blank canvas of `cols` × `rows` cells.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self::from_grid(CharGrid::new(cols, rows))
    }

    pub fn from_grid(grid: CharGrid) -> Self {
        Self::with_undo_depth(grid, DEFAULT_UNDO_DEPTH)
    }

    pub fn with_undo_depth(grid: CharGrid, max_depth: usize) -> Self {
        Self {
            grid,
            preview: BTreeMap::new(),
            history: CommandStack::new(max_depth),
        }
    }

    /// Committed content.
    pub fn grid(&self) -> &CharGrid {
        &self.grid
    }

    pub fn history(&self) -> &CommandStack {
        &self.history
    }

    pub fn preview_at(&self, x: i32, y: i32) -> Option<char> {
        self.preview.get(&(y, x)).copied()
    }

    /// Number of staged preview cells.
    pub fn preview_len(&self) -> usize {
        self.preview.len()
    }

    /// Committed content with staged glyphs drawn over it.
    pub fn composited_text(&self) -> String {
        let mut frame = self.grid.clone();
        for (&(y, x), &ch) in &self.preview {
            frame.set(x, y, ch);
        }
        frame.to_text()
    }

    pub fn undo(&mut self) -> Option<String> {
        self.history.undo(&mut self.grid)
    }

    pub fn redo(&mut self) -> Option<String> {
        self.history.redo(&mut self.grid)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Canvas for GridCanvas {
    fn preview_char_at(&mut self, x: i32, y: i32, ch: char) {
        if self.grid.in_bounds(x, y) {
            self.preview.insert((y, x), ch);
        }
    }

    fn clear_preview(&mut self) {
        self.preview.clear();
    }

    fn draw_char_at(&mut self, x: i32, y: i32, ch: char) {
        match self.grid.set(x, y, ch) {
            Some(before) if before != ch => {
                let change = CellChange {
                    x,
                    y,
                    before,
                    after: ch,
                };
                if !self.history.record(change) {
                    log::debug!("write at ({x}, {y}) outside any undo entry");
                }
            }
            _ => {}
        }
    }

    fn add_undo_action(&mut self, label: &str) {
        self.history.begin(label);
    }
}
