use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::event::events::Event;
use crate::player::clock::PlaybackSnapshot;
use crate::ui::state::UiState;
use crate::ui::traits::{Action, View};

/// Stack of views plus at most one overlay panel. The overlay, when
/// present, receives rendering and input instead of the stack top; events
/// are broadcast to everything so a background view keeps its data fresh.
pub struct Router {
    stack: Vec<Box<dyn View>>,
    overlay: Option<Box<dyn View>>,
}

impl Router {
    pub fn new(initial_view: Box<dyn View>) -> Self {
        Self {
            stack: vec![initial_view],
            overlay: None,
        }
    }

    pub fn push(&mut self, view: Box<dyn View>) {
        self.stack.push(view);
    }

    pub fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Drops the whole stack and starts over from `view`. Used by tab
    /// switches, which are roots rather than drill-downs.
    pub fn reset(&mut self, view: Box<dyn View>) {
        self.stack.clear();
        self.stack.push(view);
    }

    pub fn set_overlay(&mut self, view: Box<dyn View>) {
        self.overlay = Some(view);
    }

    pub fn clear_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn can_pop(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &UiState, player: &PlaybackSnapshot) {
        if let Some(view) = self.stack.last_mut() {
            view.render(f, area, state, player);
        }
        if let Some(overlay) = &mut self.overlay {
            overlay.render(f, area, state, player);
        }
    }

    pub async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &UiState,
        player: &PlaybackSnapshot,
    ) -> Option<Action> {
        if let Some(overlay) = &mut self.overlay {
            overlay.handle_input(key, state, player).await
        } else if let Some(view) = self.stack.last_mut() {
            view.handle_input(key, state, player).await
        } else {
            None
        }
    }

    pub fn on_event(&mut self, event: &Event) {
        for view in &mut self.stack {
            view.on_event(event);
        }
        if let Some(overlay) = &mut self.overlay {
            overlay.on_event(event);
        }
    }
}
