use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Widget},
};

use crate::util::colors;

const NAV_ITEMS: [&str; 4] = ["  首页", "  音乐馆", "󰚩  AI 电台", "  歌词"];
const MY_PLAYLISTS: [&str; 3] = ["travel", "coding vibe", "深夜EMO"];

/// Navigation rail: the four routed tabs plus the user's playlist shelf.
/// The shelf entries are display-only; only nav items carry a selection.
pub struct Sidebar {
    selected_index: usize,
}

impl Sidebar {
    pub fn new(selected_index: usize) -> Self {
        Self { selected_index }
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let section = |title: &str| {
            ListItem::new(format!(" {title}")).style(
                Style::default()
                    .fg(colors::NEUTRAL)
                    .add_modifier(Modifier::DIM),
            )
        };

        let mut items: Vec<ListItem> = vec![section("在线音乐")];
        items.extend(NAV_ITEMS.iter().enumerate().map(|(i, item)| {
            let style = if i == self.selected_index {
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::NEUTRAL)
            };
            ListItem::new(format!("  {item}")).style(style)
        }));

        items.push(ListItem::new(""));
        items.push(section("我的歌单"));
        items.extend(MY_PLAYLISTS.iter().map(|title| {
            ListItem::new(format!("   󰲸 {title}")).style(Style::default().fg(colors::NEUTRAL))
        }));

        List::new(items).render(area, buf);
    }
}
