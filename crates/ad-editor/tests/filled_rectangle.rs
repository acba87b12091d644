//! Integration tests: filled rectangle tool drawing onto a GridCanvas.
//!
//! Drives full drag gestures through the `Tool` trait and checks the
//! preview layer and committed grid the way a host would see them.

use ad_core::CharGrid;
use ad_editor::canvas::{Canvas, GridCanvas};
use ad_editor::input::GestureEvent;
use ad_editor::tools::{FilledRectangleTool, Tool, ToolSettings};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn active_tool() -> FilledRectangleTool {
    FilledRectangleTool::with_settings(&ToolSettings {
        active: true,
        ..ToolSettings::default()
    })
}

fn px(col: i32, row: i32) -> (f64, f64) {
    (f64::from(col) * 12.0 + 1.0, f64::from(row) * 24.0 + 1.0)
}

// ─── Preview ────────────────────────────────────────────────────────────

#[test]
fn preview_follows_drag_without_committing() {
    init_logging();
    let mut canvas = GridCanvas::new(6, 4);
    let mut tool = active_tool();

    let (sx, sy) = px(1, 1);
    tool.handle(&GestureEvent::from_drag_begin(sx, sy), &mut canvas);
    tool.handle(&GestureEvent::from_drag_update(24.0, 24.0), &mut canvas);

    assert_eq!(
        canvas.composited_text(),
        "      \n ###  \n ###  \n      "
    );
    assert_eq!(canvas.grid().to_text(), "      \n      \n      \n      ");
    assert!(!canvas.can_undo());
}

#[test]
fn shrinking_preview_leaves_no_stale_cells() {
    let mut canvas = GridCanvas::new(6, 4);
    let mut tool = active_tool();

    let (sx, sy) = px(1, 1);
    tool.handle(&GestureEvent::from_drag_begin(sx, sy), &mut canvas);
    tool.handle(&GestureEvent::from_drag_update(48.0, 48.0), &mut canvas);
    assert_eq!(canvas.preview_len(), 15);

    tool.handle(&GestureEvent::from_drag_update(12.0, 0.0), &mut canvas);
    assert_eq!(canvas.preview_len(), 2);
    assert_eq!(
        canvas.composited_text(),
        "      \n ##   \n      \n      "
    );
}

#[test]
fn reversing_direction_leaves_no_stale_cells() {
    let mut canvas = GridCanvas::new(6, 2);
    let mut tool = active_tool();

    let (sx, sy) = px(3, 0);
    tool.handle(&GestureEvent::from_drag_begin(sx, sy), &mut canvas);
    tool.handle(&GestureEvent::from_drag_update(24.0, 0.0), &mut canvas);
    assert_eq!(canvas.composited_text(), "   ###\n      ");

    tool.handle(&GestureEvent::from_drag_update(-24.0, 0.0), &mut canvas);
    assert_eq!(canvas.composited_text(), " ###  \n      ");
}

// ─── Commit ─────────────────────────────────────────────────────────────

#[test]
fn release_commits_and_clears_preview() {
    init_logging();
    let mut canvas = GridCanvas::new(5, 3);
    let mut tool = active_tool();

    tool.handle(&GestureEvent::from_drag_begin(0.0, 0.0), &mut canvas);
    tool.handle(&GestureEvent::from_drag_update(30.0, 50.0), &mut canvas);
    tool.handle(&GestureEvent::from_drag_end(30.0, 50.0), &mut canvas);

    assert_eq!(canvas.preview_len(), 0);
    assert_eq!(canvas.grid().to_text(), "###  \n###  \n###  ");
    let last = canvas.history().last().unwrap();
    assert_eq!(last.description, "Filled Rectangle");
    assert_eq!(last.changes.len(), 9);
}

#[test]
fn commit_past_edges_is_clipped_by_canvas() {
    let mut canvas = GridCanvas::new(3, 2);
    let mut tool = active_tool();

    let (sx, sy) = px(1, 1);
    tool.handle(&GestureEvent::from_drag_begin(sx, sy), &mut canvas);
    tool.handle(&GestureEvent::from_drag_end(-60.0, 100.0), &mut canvas);

    assert_eq!(canvas.grid().to_text(), "   \n## ");
    assert_eq!(canvas.history().last().unwrap().changes.len(), 2);
}

#[test]
fn flipped_tool_draws_mirrored() {
    let mut canvas = GridCanvas::new(6, 1);
    let mut tool = active_tool();
    tool.set_flip(true);

    let (sx, sy) = px(4, 0);
    tool.handle(&GestureEvent::from_drag_begin(sx, sy), &mut canvas);
    tool.handle(&GestureEvent::from_drag_end(24.0, 0.0), &mut canvas);

    assert_eq!(canvas.grid().to_text(), "  ### ");
}

#[test]
fn inactive_tool_leaves_canvas_untouched() {
    let mut canvas = GridCanvas::from_grid(CharGrid::from_text("abc\ndef").unwrap());
    let mut tool = FilledRectangleTool::new();

    tool.handle(&GestureEvent::from_drag_begin(0.0, 0.0), &mut canvas);
    tool.handle(&GestureEvent::from_drag_update(30.0, 30.0), &mut canvas);
    tool.handle(&GestureEvent::from_drag_end(30.0, 30.0), &mut canvas);

    assert_eq!(canvas.preview_len(), 0);
    assert_eq!(canvas.grid().to_text(), "abc\ndef");
    assert!(!canvas.can_undo());
}

#[test]
fn tool_works_through_trait_objects() {
    let mut canvas = GridCanvas::new(2, 1);
    let mut tool: Box<dyn Tool> = Box::new(active_tool());
    let host: &mut dyn Canvas = &mut canvas;

    tool.handle(&GestureEvent::from_drag_begin(0.0, 0.0), host);
    tool.handle(&GestureEvent::from_drag_end(12.0, 0.0), host);

    assert_eq!(canvas.grid().to_text(), "##");
}
