use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    symbols::{self, border},
    text::ToSpan,
    widgets::{Block, Borders, Widget},
};

use crate::{
    player::clock::PlaybackSnapshot,
    ui::components::gauge::ProgressGauge,
    util::{colors, format::mm_ss},
};

/// Bottom player bar: play state, track identity, elapsed / total labels
/// and a clickable progress gauge. Purely a projection of the snapshot;
/// seek clicks are resolved by the app from the bar's screen area.
pub struct PlayerBar<'a> {
    snapshot: &'a PlaybackSnapshot,
}

impl<'a> PlayerBar<'a> {
    pub fn new(snapshot: &'a PlaybackSnapshot) -> Self {
        Self { snapshot }
    }
}

impl Widget for PlayerBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let track = &self.snapshot.track;

        let state_icon = if self.snapshot.is_playing { "" } else { "" };
        let mut track_info = format!("{}  {} — {}", state_icon, track.title, track.artist);
        if track.is_hi_res {
            track_info.push_str("  [Hi-Res]");
        }
        if track.is_vip {
            track_info.push_str("  [VIP]");
        }

        let time_label = format!(
            "{} / {}",
            mm_ss(self.snapshot.position_secs),
            mm_ss(self.snapshot.total_secs)
        );

        let gauge = ProgressGauge::default()
            .block(
                Block::default()
                    .title_top(track_info)
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_set(border::Set {
                        top_right: symbols::line::ROUNDED.horizontal_down,
                        bottom_right: symbols::line::ROUNDED.horizontal_up,
                        ..symbols::border::ROUNDED
                    }),
            )
            .ratio(self.snapshot.progress_ratio())
            .label(time_label.to_span().fg(Color::White))
            .filled_style(Style::default().fg(colors::PRIMARY).bg(colors::SECONDARY))
            .empty_style(
                Style::default()
                    .fg(colors::BACKGROUND)
                    .bg(colors::BACKGROUND),
            );

        gauge.render(area, buf);
    }
}
