//! Gesture abstraction layer.
//!
//! Normalizes the host widget's drag and click recognizers into a single
//! `GestureEvent` enum consumed by tools. Drag updates and drag end carry
//! the pixel offset from the drag start, not an absolute position.

/// A normalized gesture from the canvas widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Drag recognized, starting at pixel `(x, y)`.
    DragBegin { x: f64, y: f64 },

    /// Pointer moved while dragging.
    DragUpdate { dx: f64, dy: f64 },

    /// Drag released.
    DragEnd { dx: f64, dy: f64 },

    /// Button pressed. `n_press` counts presses in a multi-click sequence.
    ClickPressed { n_press: u32, x: f64, y: f64 },

    ClickReleased { n_press: u32, x: f64, y: f64 },

    /// The click sequence was interrupted (pointer moved, timeout).
    ClickStopped,
}

impl GestureEvent {
    pub fn from_drag_begin(x: f64, y: f64) -> Self {
        Self::DragBegin { x, y }
    }

    pub fn from_drag_update(dx: f64, dy: f64) -> Self {
        Self::DragUpdate { dx, dy }
    }

    pub fn from_drag_end(dx: f64, dy: f64) -> Self {
        Self::DragEnd { dx, dy }
    }
}

