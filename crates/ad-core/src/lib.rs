pub mod cell;
pub mod grid;

pub use cell::{CellMetrics, CellRect, DragExtent, needs_preview_clear};
pub use grid::{BLANK, CharGrid};
