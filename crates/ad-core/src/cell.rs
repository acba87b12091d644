//! Pixel → cell quantization for drag gestures.
//!
//! Pointer input arrives in pixels while the grid is addressed in cells.
//! A drag is described by its start pixel and a pixel delta. It is first
//! quantized into a signed [`DragExtent`] (negative when dragging left or
//! up), then normalized into a [`CellRect`] that always covers at least
//! one cell.
//!
//! All quantization rounds toward negative infinity: a pointer one pixel
//! left of the canvas origin is in cell `-1`, not `0`.

use serde::{Deserialize, Serialize};

// ─── Metrics ─────────────────────────────────────────────────────────────

/// Pixel size of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellMetrics {
    pub width: f64,
    pub height: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width: 12.0,
            height: 24.0,
        }
    }
}

impl CellMetrics {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions must be finite and positive.
    ///
    /// # Errors
    /// Returns a message naming the offending dimension.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("Cell {name} must be a positive number, got {value}"));
            }
        }
        Ok(())
    }

    /// Cell containing the pixel `(px, py)`.
    pub fn cell_at(&self, px: f64, py: f64) -> (i32, i32) {
        (floor_div(px, self.width), floor_div(py, self.height))
    }
}

/// Floor division of a pixel coordinate by a cell dimension.
///
/// Plain `as i32` truncates toward zero, which would put pixels `-11..0`
/// into cell `0` together with `0..12`. Results beyond `i32` saturate.
pub fn floor_div(value: f64, divisor: f64) -> i32 {
    (value / divisor).floor() as i32
}

// ─── Signed extent ───────────────────────────────────────────────────────

/// Cell-space result of a drag before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DragExtent {
    /// Cell under the drag start.
    pub origin_x: i32,
    pub origin_y: i32,
    /// Signed width in cells; negative when dragging left.
    pub width: i32,
    /// Signed height in cells; negative when dragging up.
    pub height: i32,
}

impl DragExtent {
    /// Quantize a drag that started at pixel `start` and moved by `delta`.
    ///
    /// The end point is re-quantized (`floor((s + d) / cell) - floor(s / cell)`)
    /// rather than the delta itself, so a short drag that crosses a cell
    /// boundary still counts as one cell. `flip` mirrors the horizontal delta.
    pub fn from_drag(
        metrics: &CellMetrics,
        start: (f64, f64),
        delta: (f64, f64),
        flip: bool,
    ) -> Self {
        let (sx, sy) = start;
        let (mut dx, dy) = delta;
        if flip {
            dx = -dx;
        }

        let (origin_x, origin_y) = metrics.cell_at(sx, sy);
        let (end_x, end_y) = metrics.cell_at(dx + sx, dy + sy);

        Self {
            origin_x,
            origin_y,
            width: end_x.saturating_sub(origin_x),
            height: end_y.saturating_sub(origin_y),
        }
    }

    /// Signed `(width, height)` in cells.
    pub fn signed_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Canonical rectangle with the endpoint included on both axes.
    ///
    /// Saturates at the `i32` range, so the size is always at least one cell.
    pub fn normalize(&self) -> CellRect {
        let (x, width) = normalize_axis(self.origin_x, self.width);
        let (y, height) = normalize_axis(self.origin_y, self.height);
        CellRect {
            x,
            y,
            width,
            height,
        }
    }
}

fn normalize_axis(origin: i32, extent: i32) -> (i32, i32) {
    if extent < 0 {
        let span = extent.saturating_neg();
        (origin.saturating_sub(span), span.saturating_add(1))
    } else {
        (origin, extent.saturating_add(1))
    }
}

/// Whether the preview drawn for `previous` must be wiped before drawing `next`.
///
/// A rectangle that only grows on both axes fully covers the previous frame,
/// so the old glyphs can stay. Shrinking on either axis, or crossing the
/// start cell onto the other side, leaves stale cells behind. Zero counts
/// as positive.
pub fn needs_preview_clear(previous: (i32, i32), next: (i32, i32)) -> bool {
    let (pw, ph) = previous;
    let (nw, nh) = next;
    pw.unsigned_abs() > nw.unsigned_abs()
        || ph.unsigned_abs() > nh.unsigned_abs()
        || (pw >= 0) != (nw >= 0)
        || (ph >= 0) != (nh >= 0)
}

// ─── Normalized rectangle ────────────────────────────────────────────────

/// A rectangle of cells with non-negative origin-relative size.
///
/// Produced by [`DragExtent::normalize`], which guarantees `width >= 1`
/// and `height >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CellRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        let CellRect {
            x,
            y,
            width,
            height,
        } = self;
        (0..height).flat_map(move |dy| {
            (0..width).map(move |dx| (x.saturating_add(dx), y.saturating_add(dy)))
        })
    }
}
