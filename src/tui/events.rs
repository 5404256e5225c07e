use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Keyboard input translated into screen-independent actions. The active
/// screen decides what each action means: `Input` characters go to the
/// focused text field, control keys drive commands.
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Escape,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    PageUp,
    PageDown,
    Submit,
    NextTab,
    PrevTab,
    /// Ctrl+R: force a refetch of what the current screen shows.
    Refresh,
    /// Ctrl+A: toggle the AI summary panel on the detail screen.
    ToggleSummary,
    /// Ctrl+W or Insert: create a new student from the list screen.
    New,
    /// Ctrl+E: edit the selected record or item.
    Edit,
    /// Ctrl+D: arm (then confirm) deletion of the selected item.
    Delete,
    /// Ctrl+K: mark the selected task complete.
    Complete,
    /// Ctrl+T: cycle the focused option (channel, assignee, priority).
    CycleOption,
    /// Ctrl+S / Ctrl+G / Ctrl+O: advance a list filter criterion.
    CycleStatus,
    CycleGrade,
    CycleCountry,
    /// F1..F3: toggle one of the quick filters.
    Quick(u8),
    Input(char),
    DeleteChar,
    None,
}

/// Poll for one keyboard event within the timeout.
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Escape,

        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::Left, _) => Action::MoveLeft,
        (KeyCode::Right, _) => Action::MoveRight,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,

        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Tab, _) => Action::NextTab,
        (KeyCode::BackTab, _) => Action::PrevTab,

        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::Refresh,
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::ToggleSummary,
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Action::New,
        (KeyCode::Insert, _) => Action::New,
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::Edit,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::Delete,
        (KeyCode::Char('k'), KeyModifiers::CONTROL) => Action::Complete,
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => Action::CycleOption,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::CycleStatus,
        (KeyCode::Char('g'), KeyModifiers::CONTROL) => Action::CycleGrade,
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => Action::CycleCountry,
        (KeyCode::F(n @ 1..=3), _) => Action::Quick(n),

        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
