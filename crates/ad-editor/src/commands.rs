//! Undo/Redo command stack.
//!
//! A tool opens an undo entry with [`CommandStack::begin`] before a batch
//! of committing writes. Each write that changes a cell is recorded into
//! the open entry, so undo/redo replays the whole batch as one step.
//!
//! The open entry stays open until the next `begin`, `undo` or `redo`.

use ad_core::CharGrid;

/// One cell write, with the glyph it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub x: i32,
    pub y: i32,
    pub before: char,
    pub after: char,
}

/// A labelled batch of cell writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub description: String,
    pub changes: Vec<CellChange>,
}

/// Manages undo/redo stacks.
pub struct CommandStack {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
    /// Maximum undo depth.
    max_depth: usize,
    /// Whether the top of `undo_stack` still accepts changes.
    recording: bool,
}

impl CommandStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::new(),
            max_depth,
            recording: false,
        }
    }

    /// Open a new undo entry. Clears the redo stack.
    pub fn begin(&mut self, description: &str) {
        self.undo_stack.push(Command {
            description: description.to_string(),
            changes: Vec::new(),
        });
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
        self.recording = !self.undo_stack.is_empty();
        self.redo_stack.clear();
    }

    /// Append a change to the open entry.
    ///
    /// Returns `false` when no entry is open; the change is then not undoable.
    pub fn record(&mut self, change: CellChange) -> bool {
        if !self.recording {
            return false;
        }
        match self.undo_stack.last_mut() {
            Some(cmd) => {
                cmd.changes.push(change);
                true
            }
            None => false,
        }
    }

    /// Undo the last entry, returning its description.
    pub fn undo(&mut self, grid: &mut CharGrid) -> Option<String> {
        self.recording = false;
        let cmd = self.undo_stack.pop()?;
        for change in cmd.changes.iter().rev() {
            grid.set(change.x, change.y, change.before);
        }
        log::debug!("undo {:?} ({} cells)", cmd.description, cmd.changes.len());
        let desc = cmd.description.clone();
        self.redo_stack.push(cmd);
        Some(desc)
    }

    /// Redo the last undone entry, returning its description.
    pub fn redo(&mut self, grid: &mut CharGrid) -> Option<String> {
        self.recording = false;
        let cmd = self.redo_stack.pop()?;
        for change in &cmd.changes {
            grid.set(change.x, change.y, change.after);
        }
        log::debug!("redo {:?} ({} cells)", cmd.description, cmd.changes.len());
        let desc = cmd.description.clone();
        self.undo_stack.push(cmd);
        Some(desc)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// The entry the next `undo` would revert.
    pub fn last(&self) -> Option<&Command> {
        self.undo_stack.last()
    }
}
