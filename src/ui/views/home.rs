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
    model::catalog::{self, PlayRequest},
    player::clock::PlaybackSnapshot,
    ui::{
        state::UiState,
        traits::{Action, View},
    },
    util::colors,
};

/// Landing tab: promoted banner strip over the daily recommendation list.
pub struct Home {
    list_state: ListState,
}

impl Default for Home {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }
}

#[async_trait]
impl View for Home {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &UiState, player: &PlaybackSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(1)])
            .split(area);

        let banner_lines: Vec<Line> = catalog::BANNERS
            .iter()
            .map(|banner| {
                Line::from(vec![
                    Span::styled("󰽰 ", Style::default().fg(colors::ACCENT)),
                    Span::styled(
                        banner.title.clone(),
                        Style::default()
                            .fg(colors::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", banner.subtitle),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                    Span::styled(
                        format!("  · {}", banner.kind),
                        Style::default()
                            .fg(colors::NEUTRAL)
                            .add_modifier(Modifier::DIM),
                    ),
                ])
            })
            .collect();
        let banners = Paragraph::new(banner_lines).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title_top("为你推荐"),
        );
        f.render_widget(banners, chunks[0]);

        let items: Vec<ListItem> = catalog::RECOMMENDED
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let is_current = track.id == player.track.id;
                let prefix = if is_current {
                    if player.is_playing { " " } else { " " }
                } else {
                    "   "
                };

                let mut spans = vec![
                    Span::raw(format!("{prefix}{:>2}  ", i + 1)),
                    Span::raw(track.title.clone()),
                    Span::styled(
                        format!("  {} · {}", track.artist, track.album),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                    Span::styled(
                        format!("  {}", track.duration),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                ];
                if track.is_vip {
                    spans.push(Span::styled(
                        "  VIP",
                        Style::default().fg(colors::ACCENT),
                    ));
                }
                if track.is_hi_res {
                    spans.push(Span::styled(
                        "  Hi-Res",
                        Style::default().fg(colors::ACCENT),
                    ));
                }
                if track.has_video {
                    spans.push(Span::styled(
                        "  MV",
                        Style::default().fg(colors::NEUTRAL),
                    ));
                }

                let mut item = ListItem::new(Line::from(spans));
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
            KeyCode::Char('g') => {
                self.list_state.select(Some(0));
                Some(Action::None)
            }
            KeyCode::Char('G') => {
                self.list_state.select(Some(len.saturating_sub(1)));
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
