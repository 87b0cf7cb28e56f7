use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::model::track::{LyricLine, active_lyric_index};
use crate::util::colors;

/// Three-line lyric window centered on the active cue, with a small
/// between-cue progress marker underneath. The active line is recomputed
/// from (cues, position) on every render; nothing is cached across frames.
pub struct LyricPane<'a> {
    lyrics: &'a [LyricLine],
    position_secs: u32,
}

impl<'a> LyricPane<'a> {
    pub fn new(lyrics: &'a [LyricLine], position_secs: u32) -> Self {
        Self {
            lyrics,
            position_secs,
        }
    }

    fn centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
        if y < area.y || y >= area.y + area.height {
            return;
        }
        let width = UnicodeWidthStr::width(text) as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        buf.set_stringn(x, y, text, area.width as usize, style);
    }
}

impl Widget for LyricPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let center_row = area.y + area.height / 2;
        if self.lyrics.is_empty() {
            Self::centered(
                buf,
                area,
                center_row,
                "暂无歌词",
                Style::default().fg(colors::NEUTRAL),
            );
            return;
        }

        let idx = active_lyric_index(self.lyrics, self.position_secs);

        if idx > 0 {
            if let Some(prev) = self.lyrics.get(idx - 1) {
                Self::centered(
                    buf,
                    area,
                    center_row.saturating_sub(1),
                    &prev.text,
                    Style::default().fg(colors::NEUTRAL),
                );
            }
        }
        Self::centered(
            buf,
            area,
            center_row,
            &self.lyrics[idx].text,
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        );
        if let Some(next) = self.lyrics.get(idx + 1) {
            Self::centered(
                buf,
                area,
                center_row.saturating_add(1),
                &next.text,
                Style::default().fg(colors::NEUTRAL),
            );
        }

        // Dot marker tracking progress between the active cue and the next.
        let current_ts = self.lyrics[idx].time_secs;
        let next_ts = self
            .lyrics
            .get(idx + 1)
            .map(|l| l.time_secs)
            .unwrap_or(current_ts + 1);
        let span = next_ts.saturating_sub(current_ts).max(1);
        let frac =
            f64::from(self.position_secs.saturating_sub(current_ts)) / f64::from(span);

        let bar_width = area.width.saturating_sub(8).min(30);
        if area.height >= 5 && bar_width > 2 {
            let bar_x = area.x + area.width.saturating_sub(bar_width) / 2;
            let bar_y = center_row.saturating_add(2);
            let dot = ((frac.clamp(0.0, 1.0) * f64::from(bar_width - 1)).round() as u16)
                .min(bar_width - 1);
            for i in 0..bar_width {
                let (ch, style) = if i == dot {
                    ("•", Style::default().fg(colors::ACCENT))
                } else {
                    ("─", Style::default().fg(colors::NEUTRAL))
                };
                buf.set_stringn(bar_x + i, bar_y, ch, 1, style);
            }
        }
    }
}
