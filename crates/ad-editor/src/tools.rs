//! Tool system for canvas interactions.
//!
//! Each tool translates gesture events into calls on the host [`Canvas`]:
//! transient preview glyphs while a drag is in flight, and one undoable
//! batch of committed glyphs on release.
//!
//! An inactive tool ignores every event and makes no canvas calls.

use ad_core::{CellMetrics, DragExtent, needs_preview_clear};
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::input::GestureEvent;
use crate::properties::{PropertyListener, PropertyNotifier, Subscription, ToolProperty};

/// Identifies a tool implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    FilledRectangle,
}

impl ToolKind {
    /// Human-readable name, also used as the undo entry label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FilledRectangle => "Filled Rectangle",
        }
    }
}

/// Trait for tools that turn gestures into canvas writes.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    fn is_active(&self) -> bool;

    /// Handle a gesture event, issuing zero or more canvas calls.
    fn handle(&mut self, event: &GestureEvent, canvas: &mut dyn Canvas);
}

// ─── Settings ────────────────────────────────────────────────────────────

/// Host-supplied configuration for a drawing tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Glyph stamped into cells. Default: `'#'`.
    pub character: char,

    /// Pixel size of one cell. Default: 12 × 24.
    pub metrics: CellMetrics,

    /// Mirror the horizontal drag direction (right-to-left layouts).
    pub flip: bool,

    /// Whether the tool starts enabled. Default: **false**.
    pub active: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            character: '#',
            metrics: CellMetrics::default(),
            flip: false,
            active: false,
        }
    }
}

impl ToolSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns the deserializer's message if the JSON is malformed, or the
    /// validation message if the cell metrics are not positive and finite.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| format!("Invalid tool settings: {e}"))?;
        settings
            .metrics
            .validate()
            .map_err(|e| format!("Invalid tool settings: {e}"))?;
        Ok(settings)
    }
}

// ─── Filled Rectangle Tool ───────────────────────────────────────────────

/// Drags out a solid rectangle of one glyph.
///
/// While dragging, the rectangle is previewed. The previous preview is only
/// cleared when the new frame would not cover it (shrink or direction
/// change), so a steadily growing drag never wipes the preview layer.
pub struct FilledRectangleTool {
    active: bool,
    character: char,
    metrics: CellMetrics,
    flip: bool,
    /// Pixel where the current drag began.
    drag_start: (f64, f64),
    /// Last cell-aligned pixel offset from `drag_start`.
    drag_end_offset: (f64, f64),
    /// Signed cell size of the last preview frame.
    last_size: (i32, i32),
    notifier: PropertyNotifier,
}

impl Default for FilledRectangleTool {
    fn default() -> Self {
        Self::new()
    }
}

impl FilledRectangleTool {
    pub fn new() -> Self {
        Self::with_settings(&ToolSettings::default())
    }

    pub fn with_settings(settings: &ToolSettings) -> Self {
        Self {
            active: settings.active,
            character: settings.character,
            metrics: settings.metrics,
            flip: settings.flip,
            drag_start: (0.0, 0.0),
            drag_end_offset: (0.0, 0.0),
            last_size: (0, 0),
            notifier: PropertyNotifier::new(),
        }
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.notifier.notify(ToolProperty::Active(active));
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn set_character(&mut self, character: char) {
        self.character = character;
        self.notifier.notify(ToolProperty::Character(character));
    }

    pub fn flip(&self) -> bool {
        self.flip
    }

    /// Set by the host; the tool never toggles it itself.
    pub fn set_flip(&mut self, flip: bool) {
        self.flip = flip;
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    pub fn drag_end_offset(&self) -> (f64, f64) {
        self.drag_end_offset
    }

    /// Be notified whenever `active` or `character` is set.
    pub fn subscribe(&self, listener: PropertyListener) -> Subscription {
        self.notifier.subscribe(listener)
    }

    fn extent(&self, dx: f64, dy: f64) -> DragExtent {
        DragExtent::from_drag(&self.metrics, self.drag_start, (dx, dy), self.flip)
    }

    fn drag_update(&mut self, dx: f64, dy: f64, canvas: &mut dyn Canvas) {
        let extent = self.extent(dx, dy);
        self.drag_end_offset = (
            f64::from(extent.width) * self.metrics.width,
            f64::from(extent.height) * self.metrics.height,
        );

        let size = extent.signed_size();
        if needs_preview_clear(self.last_size, size) {
            canvas.clear_preview();
        }
        self.last_size = size;

        let rect = extent.normalize();
        log::trace!("preview {rect:?}");
        for (x, y) in rect.cells() {
            canvas.preview_char_at(x, y, self.character);
        }
    }

    fn drag_end(&mut self, dx: f64, dy: f64, canvas: &mut dyn Canvas) {
        canvas.clear_preview();

        let extent = self.extent(dx, dy);
        self.last_size = (0, 0);

        canvas.add_undo_action(self.kind().label());

        let rect = extent.normalize();
        log::debug!(
            "filled rectangle at ({}, {}) {}x{} with {:?}",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            self.character
        );
        for (x, y) in rect.cells() {
            canvas.draw_char_at(x, y, self.character);
        }
    }
}

impl Tool for FilledRectangleTool {
    fn kind(&self) -> ToolKind {
        ToolKind::FilledRectangle
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn handle(&mut self, event: &GestureEvent, canvas: &mut dyn Canvas) {
        if !self.active {
            return;
        }
        match *event {
            GestureEvent::DragBegin { x, y } => {
                self.drag_start = (x, y);
            }
            GestureEvent::DragUpdate { dx, dy } => self.drag_update(dx, dy, canvas),
            GestureEvent::DragEnd { dx, dy } => self.drag_end(dx, dy, canvas),
            // Clicks are accepted so every tool shares one handler set.
            GestureEvent::ClickPressed { .. }
            | GestureEvent::ClickReleased { .. }
            | GestureEvent::ClickStopped => {}
        }
    }
}
