use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use movable_core::PointerSample;

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    SelectNext,
    SelectPrev,
    MoveDown,      // J: move selected item down one place
    MoveUp,        // K: move selected item up one place
    Remove,
    CancelDrag,
    Press(PointerSample),
    Drag(PointerSample),
    Release,
    Scroll(i16),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // Only Esc and quit while a drag is in flight
    if app.is_dragging() {
        return match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Action::CancelDrag,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            _ => Action::None,
        };
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Selection
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::SelectNext,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::SelectPrev,
        (KeyCode::Down, KeyModifiers::NONE) => Action::SelectNext,
        (KeyCode::Up, KeyModifiers::NONE) => Action::SelectPrev,

        // Reorder
        (KeyCode::Char('J'), KeyModifiers::SHIFT) => Action::MoveDown,
        (KeyCode::Char('K'), KeyModifiers::SHIFT) => Action::MoveUp,
        (KeyCode::Down, KeyModifiers::SHIFT) => Action::MoveDown,
        (KeyCode::Up, KeyModifiers::SHIFT) => Action::MoveUp,

        (KeyCode::Char('d'), KeyModifiers::NONE) => Action::Remove,

        _ => Action::None,
    }
}

/// Map a mouse event onto the drag gesture
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    let sample = PointerSample::mouse(mouse.column as f64, mouse.row as f64);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::Press(sample),
        MouseEventKind::Drag(MouseButton::Left) => Action::Drag(sample),
        MouseEventKind::Up(MouseButton::Left) => Action::Release,
        MouseEventKind::ScrollDown => Action::Scroll(1),
        MouseEventKind::ScrollUp => Action::Scroll(-1),
        _ => Action::None,
    }
}

/// Apply an action to the app
pub fn dispatch(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::SelectNext => app.select_next(),
        Action::SelectPrev => app.select_prev(),
        Action::MoveDown => app.move_selected(1),
        Action::MoveUp => app.move_selected(-1),
        Action::Remove => app.delete_selected(),
        Action::CancelDrag => app.cancel_drag(),
        Action::Press(sample) => app.press(sample),
        Action::Drag(sample) => app.pointer_moved(sample),
        Action::Release => app.release(),
        Action::Scroll(rows) => {
            if !app.is_dragging() {
                app.scroll_by(rows as f64);
            }
        }
        Action::None => {}
    }
}
