use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    ai::Recommendation,
    event::events::Event,
    model::catalog::PlayRequest,
    player::clock::PlaybackSnapshot,
    ui::{
        components::spinner::Spinner,
        state::UiState,
        traits::{Action, View},
    },
    util::colors,
};

const PRESET_TAGS: [&str; 8] = [
    "深夜食堂",
    "硬核健身",
    "赛博朋克",
    "下雨天",
    "冥想专注",
    "复古怀旧",
    "日落漫步",
    "游戏激战",
];

/// AI radio: a mood prompt goes out to the generative-text service, five
/// `{title, artist, reason}` suggestions come back. Failures surface as an
/// empty result set plus a notice; they never reach the player. Accepting
/// a suggestion plays it as an external track.
pub struct AiRadio {
    prompt: String,
    insert: bool,
    tag_index: usize,
    results: Vec<Recommendation>,
    list_state: ListState,
    loading: bool,
    notice: Option<String>,
}

impl Default for AiRadio {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            insert: false,
            tag_index: 0,
            results: Vec::new(),
            list_state: ListState::default(),
            loading: false,
            notice: None,
        }
    }
}

impl AiRadio {
    fn begin_request(&mut self, prompt: String) -> Action {
        self.loading = true;
        self.notice = None;
        self.results.clear();
        self.list_state.select(None);
        Action::Inspire(prompt)
    }
}

#[async_trait]
impl View for AiRadio {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &UiState, _player: &PlaybackSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "AI 灵感电台",
                Style::default()
                    .fg(colors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "输入任何心境、场景或关键词，让 AI 为你编织完美的背景旋律。",
                Style::default().fg(colors::NEUTRAL),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        let input_text = if self.insert {
            format!("{}▌", self.prompt)
        } else if self.prompt.is_empty() {
            "在此输入你的心境描述...".to_string()
        } else {
            self.prompt.clone()
        };
        let input_style = if self.insert || !self.prompt.is_empty() {
            Style::default()
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let input = Paragraph::new(input_text).style(input_style).block(
            Block::default()
                .borders(Borders::ALL)
                .title_top("心境描述")
                .border_style(if self.insert {
                    Style::default().fg(colors::PRIMARY)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                }),
        );
        f.render_widget(input, chunks[1]);

        let mut tag_spans: Vec<Span> = Vec::with_capacity(PRESET_TAGS.len() * 2);
        for (i, tag) in PRESET_TAGS.iter().enumerate() {
            let style = if i == self.tag_index && !self.insert {
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::NEUTRAL)
            };
            tag_spans.push(Span::styled(format!("# {tag}"), style));
            tag_spans.push(Span::raw("  "));
        }
        f.render_widget(
            Paragraph::new(Line::from(tag_spans)).alignment(Alignment::Center),
            chunks[2],
        );

        if self.loading {
            f.render_widget(
                Spinner::default()
                    .label("等待灵感的迸发...")
                    .style(Style::default().fg(colors::ACCENT)),
                chunks[3],
            );
        } else if let Some(notice) = &self.notice {
            f.render_widget(
                Paragraph::new(notice.clone())
                    .style(Style::default().fg(colors::NEUTRAL))
                    .alignment(Alignment::Center),
                chunks[3],
            );
        } else {
            let items: Vec<ListItem> = self
                .results
                .iter()
                .map(|rec| {
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(
                                rec.title.clone(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(
                                format!("  {}", rec.artist),
                                Style::default().fg(colors::ACCENT),
                            ),
                        ]),
                        Line::from(Span::styled(
                            format!("    “{}”", rec.reason),
                            Style::default()
                                .fg(colors::NEUTRAL)
                                .add_modifier(Modifier::ITALIC),
                        )),
                    ])
                })
                .collect();

            let list = List::new(items)
                .highlight_style(
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            if !self.results.is_empty() && self.list_state.selected().is_none() {
                self.list_state.select(Some(0));
            }
            f.render_stateful_widget(list, chunks[3], &mut self.list_state);
        }

        f.render_widget(
            Paragraph::new("i 输入心境 · ←/→ 选择标签 · Enter 生成 / 播放 · j/k 浏览结果")
                .style(
                    Style::default()
                        .fg(colors::NEUTRAL)
                        .add_modifier(Modifier::DIM),
                )
                .alignment(Alignment::Center),
            chunks[4],
        );
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &UiState,
        _player: &PlaybackSnapshot,
    ) -> Option<Action> {
        if self.insert {
            return match key.code {
                KeyCode::Esc => {
                    self.insert = false;
                    Some(Action::None)
                }
                KeyCode::Enter => {
                    self.insert = false;
                    let prompt = self.prompt.trim().to_string();
                    if prompt.is_empty() {
                        Some(Action::None)
                    } else {
                        Some(self.begin_request(prompt))
                    }
                }
                KeyCode::Backspace => {
                    self.prompt.pop();
                    Some(Action::None)
                }
                KeyCode::Char(c) => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        // Control chords belong to the global keymap.
                        return None;
                    }
                    self.prompt.push(c);
                    Some(Action::None)
                }
                _ => Some(Action::None),
            };
        }

        match key.code {
            KeyCode::Char('i') => {
                self.insert = true;
                Some(Action::None)
            }
            KeyCode::Left => {
                self.tag_index = (self.tag_index + PRESET_TAGS.len() - 1) % PRESET_TAGS.len();
                Some(Action::None)
            }
            KeyCode::Right => {
                self.tag_index = (self.tag_index + 1) % PRESET_TAGS.len();
                Some(Action::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.results.is_empty() {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| (i + 1).min(self.results.len() - 1));
                    self.list_state.select(Some(i));
                }
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if !self.results.is_empty() {
                    let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
                    self.list_state.select(Some(i));
                }
                Some(Action::None)
            }
            KeyCode::Enter => {
                if self.loading {
                    return Some(Action::None);
                }
                if let Some(rec) = self.list_state.selected().and_then(|i| self.results.get(i)) {
                    return Some(Action::Play(PlayRequest::External {
                        title: rec.title.clone(),
                        artist: rec.artist.clone(),
                    }));
                }
                let tag = PRESET_TAGS[self.tag_index].to_string();
                self.prompt = tag.clone();
                Some(self.begin_request(tag))
            }
            _ => None,
        }
    }

    fn on_event(&mut self, event: &Event) {
        match event {
            Event::RecommendationsFetched(recommendations) => {
                self.loading = false;
                self.results = recommendations.clone();
                self.list_state.select(None);
                self.notice = self
                    .results
                    .is_empty()
                    .then(|| "没有得到推荐，换个描述再试试。".to_string());
            }
            Event::AiFailed(message) => {
                self.loading = false;
                self.results.clear();
                self.list_state.select(None);
                self.notice = Some(format!("推荐服务暂不可用：{message}"));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_surfaces_an_empty_result_set() {
        let mut view = AiRadio::default();
        view.loading = true;
        view.results = vec![Recommendation {
            title: "旧结果".into(),
            artist: "某人".into(),
            reason: "上一轮的残留".into(),
        }];

        view.on_event(&Event::AiFailed("connection reset".into()));

        assert!(!view.loading);
        assert!(view.results.is_empty());
        assert!(view.notice.as_deref().is_some_and(|n| n.contains("不可用")));
    }

    #[test]
    fn fetched_recommendations_replace_the_notice() {
        let mut view = AiRadio::default();
        view.loading = true;
        view.notice = Some("旧提示".into());

        view.on_event(&Event::RecommendationsFetched(vec![Recommendation {
            title: "小半".into(),
            artist: "陈粒".into(),
            reason: "深夜情绪".into(),
        }]));

        assert!(!view.loading);
        assert_eq!(view.results.len(), 1);
        assert!(view.notice.is_none());
    }

    #[test]
    fn empty_fetch_shows_a_hint_instead_of_results() {
        let mut view = AiRadio::default();
        view.loading = true;

        view.on_event(&Event::RecommendationsFetched(Vec::new()));

        assert!(!view.loading);
        assert!(view.results.is_empty());
        assert!(view.notice.is_some());
    }
}
