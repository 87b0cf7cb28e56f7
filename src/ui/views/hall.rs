use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Tabs},
};

use crate::{
    model::catalog,
    player::clock::PlaybackSnapshot,
    ui::{
        state::UiState,
        traits::{Action, View},
    },
    util::colors,
};

const CATEGORIES: [&str; 3] = ["精选", "排行榜", "歌手"];

/// Music hall: browsing shelves behind a category tab row. Playlists and
/// rankings drill into a detail view; artists are display cards only.
pub struct Hall {
    category: usize,
    list_state: ListState,
}

impl Default for Hall {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            category: 0,
            list_state,
        }
    }
}

impl Hall {
    fn shelf_len(&self) -> usize {
        match self.category {
            0 => catalog::PLAYLISTS.len(),
            1 => catalog::RANKINGS.len(),
            _ => catalog::ARTISTS.len(),
        }
    }

    fn switch_category(&mut self, category: usize) {
        self.category = category;
        self.list_state.select(Some(0));
    }
}

#[async_trait]
impl View for Hall {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &UiState, _player: &PlaybackSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(area);

        let tabs = Tabs::new(CATEGORIES.to_vec())
            .select(self.category)
            .style(Style::default().fg(colors::NEUTRAL))
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("·");
        f.render_widget(tabs, chunks[0]);

        let items: Vec<ListItem> = match self.category {
            0 => catalog::PLAYLISTS
                .iter()
                .map(|playlist| {
                    let description = playlist.description.clone().unwrap_or_default();
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::raw(format!("󰲸  {}", playlist.title)),
                            Span::styled(
                                format!("  󰐊 {}", playlist.play_count),
                                Style::default().fg(colors::NEUTRAL),
                            ),
                        ]),
                        Line::from(Span::styled(
                            format!("     {description}"),
                            Style::default()
                                .fg(colors::NEUTRAL)
                                .add_modifier(Modifier::DIM),
                        )),
                    ])
                })
                .collect(),
            1 => catalog::RANKINGS
                .iter()
                .enumerate()
                .map(|(i, ranking)| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("  {:>2} ", i + 1),
                            Style::default().fg(colors::ACCENT),
                        ),
                        Span::raw(ranking.title.clone()),
                        Span::styled(
                            format!("  󰐊 {}", ranking.play_count),
                            Style::default().fg(colors::NEUTRAL),
                        ),
                    ]))
                })
                .collect(),
            _ => catalog::ARTISTS
                .iter()
                .map(|artist| {
                    ListItem::new(Line::from(vec![
                        Span::raw(format!("  {}", artist.name)),
                        Span::styled(
                            format!("  粉丝 {}", artist.fans),
                            Style::default().fg(colors::NEUTRAL),
                        ),
                    ]))
                })
                .collect(),
        };

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
        match key.code {
            KeyCode::Left => {
                self.switch_category((self.category + CATEGORIES.len() - 1) % CATEGORIES.len());
                Some(Action::None)
            }
            KeyCode::Right => {
                self.switch_category((self.category + 1) % CATEGORIES.len());
                Some(Action::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self
                    .list_state
                    .selected()
                    .map_or(0, |i| (i + 1).min(self.shelf_len().saturating_sub(1)));
                self.list_state.select(Some(i));
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
                self.list_state.select(Some(i));
                Some(Action::None)
            }
            KeyCode::Enter => {
                let i = self.list_state.selected()?;
                match self.category {
                    0 => catalog::PLAYLISTS
                        .get(i)
                        .map(|p| Action::OpenPlaylist(p.clone())),
                    1 => catalog::RANKINGS
                        .get(i)
                        .map(|p| Action::OpenPlaylist(p.clone())),
                    _ => catalog::ARTISTS
                        .get(i)
                        .map(|a| Action::Status(format!("{} · 粉丝 {}", a.name, a.fans))),
                }
            }
            _ => None,
        }
    }
}
