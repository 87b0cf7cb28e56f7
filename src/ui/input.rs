use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::traits::Action;

/// Global keymap, consulted only after the active view declined the key.
/// Seek steps: `h`/`l` scrub five seconds, `H`/`L` thirty.
pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<Action> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
            (KeyCode::Char(' '), _) => Some(Action::TogglePlay),
            (KeyCode::Char('h'), KeyModifiers::NONE) => Some(Action::SeekBy(-5)),
            (KeyCode::Char('l'), KeyModifiers::NONE) => Some(Action::SeekBy(5)),
            (KeyCode::Char('H'), _) => Some(Action::SeekBy(-30)),
            (KeyCode::Char('L'), _) => Some(Action::SeekBy(30)),
            (KeyCode::Char('q'), _) => Some(Action::ToggleQueue),
            (KeyCode::Char('n'), _) => Some(Action::OpenNowPlaying),
            (KeyCode::Char('y'), _) => Some(Action::OpenLyrics),
            (KeyCode::Tab, _) => Some(Action::NextTab),
            (KeyCode::BackTab, _) => Some(Action::PreviousTab),
            (KeyCode::Char('1'), _) => Some(Action::SwitchTab(0)),
            (KeyCode::Char('2'), _) => Some(Action::SwitchTab(1)),
            (KeyCode::Char('3'), _) => Some(Action::SwitchTab(2)),
            (KeyCode::Char('4'), _) => Some(Action::SwitchTab(3)),
            (KeyCode::Esc, _) => Some(Action::Back),
            _ => None,
        }
    }
}
