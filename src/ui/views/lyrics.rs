use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    model::track::active_lyric_index,
    player::clock::PlaybackSnapshot,
    ui::{
        state::UiState,
        traits::{Action, View},
    },
    util::{colors, format::mm_ss},
};

/// Full lyric sheet for the current track, scrolled so the active cue sits
/// in the middle of the pane. The active index is derived from the
/// snapshot position on every frame.
pub struct LyricsView;

#[async_trait]
impl View for LyricsView {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &UiState, player: &PlaybackSnapshot) {
        let track = &player.track;
        let block = Block::default()
            .borders(Borders::NONE)
            .title_top(format!("歌词 — {} · {}", track.title, track.artist))
            .title_alignment(ratatui::layout::Alignment::Center);
        let inner = block.inner(area);
        f.render_widget(block, area);

        if track.lyrics.is_empty() {
            f.render_widget(
                Paragraph::new("暂无歌词")
                    .style(Style::default().fg(colors::NEUTRAL))
                    .alignment(ratatui::layout::Alignment::Center),
                inner,
            );
            return;
        }

        let active = active_lyric_index(&track.lyrics, player.position_secs);
        let half = usize::from(inner.height / 2);
        let first = active.saturating_sub(half);

        let lines: Vec<Line> = track
            .lyrics
            .iter()
            .enumerate()
            .skip(first)
            .take(usize::from(inner.height))
            .map(|(i, cue)| {
                let stamp = Span::styled(
                    format!("[{}]  ", mm_ss(cue.time_secs)),
                    Style::default()
                        .fg(colors::NEUTRAL)
                        .add_modifier(Modifier::DIM),
                );
                let text = if i == active {
                    Span::styled(
                        cue.text.clone(),
                        Style::default()
                            .fg(colors::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(cue.text.clone(), Style::default().fg(colors::NEUTRAL))
                };
                Line::from(vec![stamp, text])
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
            inner,
        );
    }

    async fn handle_input(
        &mut self,
        _key: KeyEvent,
        _state: &UiState,
        _player: &PlaybackSnapshot,
    ) -> Option<Action> {
        None
    }
}
