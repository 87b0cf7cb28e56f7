use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{
    player::clock::PlaybackSnapshot,
    ui::{
        components::{gauge::ProgressGauge, lyrics::LyricPane},
        state::UiState,
        traits::{Action, View},
    },
    util::{colors, format::mm_ss},
};

/// Immersive now-playing overlay: big track header, the lyric window, and
/// a wide progress gauge. All keys fall through to the global keymap, so
/// space and the seek keys keep working here.
pub struct NowPlaying;

#[async_trait]
impl View for NowPlaying {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &UiState, player: &PlaybackSnapshot) {
        f.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Length(2),
                Constraint::Fill(1),
            ])
            .split(area);

        let track = &player.track;
        let state_line = if player.is_playing {
            "  正在播放"
        } else {
            "  已暂停"
        };
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                track.title.clone(),
                Style::default()
                    .fg(colors::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} · {}", track.artist, track.album),
                Style::default().fg(colors::NEUTRAL),
            )),
            Line::from(Span::styled(
                state_line,
                Style::default()
                    .fg(colors::NEUTRAL)
                    .add_modifier(Modifier::DIM),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(header, chunks[1]);

        f.render_widget(LyricPane::new(&track.lyrics, player.position_secs), chunks[2]);

        let gauge_area = centered_bar(chunks[3]).intersection(chunks[3]);
        let label = format!(
            "{} / {}",
            mm_ss(player.position_secs),
            mm_ss(player.total_secs)
        );
        f.render_widget(
            ProgressGauge::default()
                .ratio(player.progress_ratio())
                .label(label)
                .filled_style(Style::default().fg(colors::PRIMARY).bg(colors::SECONDARY))
                .empty_style(
                    Style::default()
                        .fg(colors::BACKGROUND)
                        .bg(colors::BACKGROUND),
                ),
            gauge_area,
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

fn centered_bar(area: Rect) -> Rect {
    let width = area.width.saturating_sub(8).min(60).max(10);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y,
        width,
        height: 1,
    }
}
