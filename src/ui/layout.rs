use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::{
    player::clock::PlaybackSnapshot,
    ui::{app::App, components::{player_bar::PlayerBar, sidebar::Sidebar}},
    util::colors,
};

/// Application shell: sidebar rail, routed content, player bar. Rendering
/// records the player bar's screen area on the app so mouse clicks on the
/// progress gauge can be translated into proportional seeks.
pub struct AppLayout<'a> {
    app: &'a mut App,
    snapshot: &'a PlaybackSnapshot,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App, snapshot: &'a PlaybackSnapshot) -> Self {
        Self { app, snapshot }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        f.buffer_mut()
            .set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(area);
        let main_area = chunks[0];
        let player_area = chunks[1];

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(1)])
            .split(main_area);
        let sidebar_area = main_chunks[0];
        let content_area = main_chunks[1];

        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("resona")
            .title_alignment(Alignment::Center);
        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title_bottom(
                self.app
                    .state
                    .status
                    .clone()
                    .unwrap_or_else(|| "空格 播放/暂停 · h/l 快退/快进 · q 队列 · n 正在播放".into()),
            );

        let sidebar_inner = sidebar_block.inner(sidebar_area);
        let content_inner = content_block.inner(content_area);
        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(content_block, content_area);

        f.render_widget(Sidebar::new(self.app.state.sidebar_index), sidebar_inner);

        self.app
            .router
            .render(f, content_inner, &self.app.state, self.snapshot);

        f.render_widget(PlayerBar::new(self.snapshot), player_area);
        self.app.player_bar_area = player_area;
    }
}
