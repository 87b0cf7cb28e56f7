use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use crate::{
    model::catalog::{self, PlayRequest},
    player::clock::PlaybackSnapshot,
    ui::{
        state::UiState,
        traits::{Action, View},
    },
    util::colors,
};

/// Play-queue side panel. The queue is the recommendation shelf; the
/// currently loaded track is marked, and Enter switches playback without
/// closing the panel.
pub struct Queue {
    list_state: ListState,
}

impl Default for Queue {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }
}

#[async_trait]
impl View for Queue {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &UiState, player: &PlaybackSnapshot) {
        let panel = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(44)])
            .split(area)[1];

        f.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .title_top(format!("播放队列 ({})", catalog::RECOMMENDED.len()))
            .border_style(Style::default().fg(colors::NEUTRAL));
        let inner = block.inner(panel);
        f.render_widget(block, panel);

        let items: Vec<ListItem> = catalog::RECOMMENDED
            .iter()
            .map(|track| {
                let is_current = track.id == player.track.id;
                let prefix = if is_current {
                    if player.is_playing { " " } else { " " }
                } else {
                    "   "
                };
                let mut item = ListItem::new(Line::from(vec![
                    Span::raw(format!("{prefix}{}", track.title)),
                    Span::styled(
                        format!("  {}", track.artist),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                ]));
                if is_current {
                    item = item.style(
                        Style::default()
                            .fg(colors::SECONDARY)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                item
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(list, inner, &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &UiState,
        _player: &PlaybackSnapshot,
    ) -> Option<Action> {
        let len = catalog::RECOMMENDED.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self
                    .list_state
                    .selected()
                    .map_or(0, |i| (i + 1).min(len.saturating_sub(1)));
                self.list_state.select(Some(i));
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
                self.list_state.select(Some(i));
                Some(Action::None)
            }
            KeyCode::Enter => self
                .list_state
                .selected()
                .and_then(|i| catalog::RECOMMENDED.get(i))
                .map(|track| Action::Play(PlayRequest::Id(track.id.clone()))),
            _ => None,
        }
    }
}
