use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{
    event::events::Event,
    model::{catalog::PlayRequest, playlist::Playlist},
    player::clock::PlaybackSnapshot,
    ui::state::UiState,
};

/// Intents a view hands back to the app loop. Views never mutate playback
/// or navigation state themselves; they only describe what the user asked
/// for. `None` marks a key as consumed without further effect, which keeps
/// it away from the global keymap (text entry relies on this).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    TogglePlay,
    SeekBy(i32),
    SeekFraction(f64),
    Play(PlayRequest),
    SwitchTab(usize),
    NextTab,
    PreviousTab,
    ToggleQueue,
    OpenNowPlaying,
    OpenLyrics,
    OpenPlaylist(Playlist),
    Back,
    Inspire(String),
    Status(String),
    None,
}

#[async_trait]
pub trait View: Send {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &UiState, player: &PlaybackSnapshot);

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &UiState,
        player: &PlaybackSnapshot,
    ) -> Option<Action>;

    fn on_event(&mut self, _event: &Event) {}
}
