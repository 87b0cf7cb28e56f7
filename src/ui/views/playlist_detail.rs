use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    model::{
        catalog::{self, PlayRequest},
        playlist::Playlist,
    },
    player::clock::PlaybackSnapshot,
    ui::{
        state::UiState,
        traits::{Action, View},
    },
    util::colors,
};

/// Drill-down from the hall: one playlist's header over its track list.
/// The mock catalog backs every playlist with the recommendation shelf.
pub struct PlaylistDetail {
    playlist: Playlist,
    list_state: ListState,
}

impl PlaylistDetail {
    pub fn new(playlist: Playlist) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            playlist,
            list_state,
        }
    }
}

#[async_trait]
impl View for PlaylistDetail {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &UiState, player: &PlaybackSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(1)])
            .split(area);

        let mut header = vec![Line::from(vec![
            Span::styled(
                self.playlist.title.clone(),
                Style::default()
                    .fg(colors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  󰐊 {}", self.playlist.play_count),
                Style::default().fg(colors::NEUTRAL),
            ),
        ])];
        if let Some(description) = &self.playlist.description {
            header.push(Line::from(Span::styled(
                description.clone(),
                Style::default().fg(colors::NEUTRAL),
            )));
        }
        f.render_widget(
            Paragraph::new(header).block(Block::default().borders(Borders::BOTTOM)),
            chunks[0],
        );

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
                    Span::styled(
                        format!("  {}", track.duration),
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
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
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
