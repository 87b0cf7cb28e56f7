use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::warn;

use crate::{
    ai::AiClient,
    event::events::Event,
    player::{command::PlayerCommand, session::PlayerSession},
    ui::{
        input::InputHandler,
        layout::AppLayout,
        router::Router,
        state::{Overlay, Route, UiState},
        traits::Action,
        tui::{TerminalEvent, Tui},
        views::{self, NowPlaying, PlaylistDetail, Queue},
    },
    util::task::TaskManager,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub session: PlayerSession,
    pub ai: Option<Arc<AiClient>>,
    pub router: Router,
    pub state: UiState,
    pub tasks: TaskManager,
    pub overlay: Option<Overlay>,
    pub player_bar_area: Rect,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let session = PlayerSession::new(event_tx.clone());
        let ai = match AiClient::from_env() {
            Ok(client) => Some(Arc::new(client)),
            Err(err) => {
                warn!(%err, "AI radio disabled");
                None
            }
        };
        let router = Router::new(views::view_for(Route::Home));

        Ok(Self {
            event_rx,
            event_tx,
            session,
            ai,
            router,
            state: UiState::default(),
            tasks: TaskManager::default(),
            overlay: None,
            player_bar_area: Rect::default(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?.mouse(true);
        tui.enter()?;

        while !self.should_quit {
            let snapshot = self.session.snapshot();
            if self.has_focus {
                tui.draw(|f| AppLayout::new(self, &snapshot).render(f, f.area()))?;
            }

            self.handle_events(&mut tui).await?;
        }

        tui.exit()
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(event) = tui.next().await {
            match event {
                TerminalEvent::Quit => self.should_quit = true,
                TerminalEvent::Key(key) => self.handle_key(key).await,
                TerminalEvent::Mouse(mouse) => self.handle_mouse(mouse),
                TerminalEvent::FocusGained => {
                    self.has_focus = true;
                    tui.clear()?;
                }
                TerminalEvent::FocusLost => self.has_focus = false,
                TerminalEvent::Render
                | TerminalEvent::Resize(_, _)
                | TerminalEvent::Init => {}
            }
        }

        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let snapshot = self.session.snapshot();
        let action = self
            .router
            .handle_input(key, &self.state, &snapshot)
            .await
            .or_else(|| InputHandler::handle_key(key));

        if let Some(action) = action {
            self.apply_action(action);
        }
    }

    /// A left click inside the player bar's gauge maps the clicked column
    /// to a proportional seek.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }

        let inner = Rect {
            x: self.player_bar_area.x + 1,
            y: self.player_bar_area.y + 1,
            width: self.player_bar_area.width.saturating_sub(2),
            height: self.player_bar_area.height.saturating_sub(2),
        };
        if inner.width == 0 || !inner.contains((mouse.column, mouse.row).into()) {
            return;
        }

        let fraction = f64::from(mouse.column - inner.x) / f64::from(inner.width);
        self.session
            .handle_command(PlayerCommand::SeekFraction(fraction));
    }

    fn handle_event(&mut self, event: Event) {
        self.router.on_event(&event);

        match event {
            Event::ClockTick => self.session.handle_tick(),
            Event::TrackStarted(track) => {
                self.state.status = Some(format!("正在播放：{} — {}", track.title, track.artist));
            }
            Event::TrackEnded => {
                self.state.status = Some("播放结束".into());
            }
            Event::AiFailed(reason) => {
                warn!(%reason, "AI recommendation surfaced a failure");
            }
            Event::RecommendationsFetched(_) => {}
        }
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePlay => self.session.handle_command(PlayerCommand::TogglePlay),
            Action::SeekBy(delta) => self.session.handle_command(PlayerCommand::SeekBy(delta)),
            Action::SeekFraction(fraction) => self
                .session
                .handle_command(PlayerCommand::SeekFraction(fraction)),
            Action::Play(request) => self.session.handle_command(PlayerCommand::Play(request)),
            Action::SwitchTab(index) => self.switch_tab(index),
            Action::NextTab => self.switch_tab((self.state.sidebar_index + 1) % Route::COUNT),
            Action::PreviousTab => {
                self.switch_tab((self.state.sidebar_index + Route::COUNT - 1) % Route::COUNT)
            }
            Action::ToggleQueue => match self.overlay {
                Some(Overlay::Queue) => self.close_overlay(),
                _ => self.open_overlay(Overlay::Queue),
            },
            Action::OpenNowPlaying => self.open_overlay(Overlay::NowPlaying),
            Action::OpenLyrics => self.switch_tab(3),
            Action::OpenPlaylist(playlist) => {
                self.router.push(Box::new(PlaylistDetail::new(playlist)));
            }
            Action::Back => {
                if self.overlay.is_some() {
                    self.close_overlay();
                } else {
                    self.router.pop();
                }
            }
            Action::Inspire(prompt) => self.request_recommendations(prompt),
            Action::Status(message) => self.state.status = Some(message),
            Action::None => {}
        }
    }

    fn switch_tab(&mut self, index: usize) {
        self.close_overlay();
        self.state.sidebar_index = index;
        self.router.reset(views::view_for(Route::from_index(index)));
    }

    fn open_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
        match overlay {
            Overlay::Queue => self.router.set_overlay(Box::new(Queue::default())),
            Overlay::NowPlaying => self.router.set_overlay(Box::new(NowPlaying)),
        }
    }

    fn close_overlay(&mut self) {
        self.overlay = None;
        self.router.clear_overlay();
    }

    fn request_recommendations(&mut self, prompt: String) {
        let event_tx = self.event_tx.clone();
        match &self.ai {
            Some(client) => {
                let client = client.clone();
                self.state.status = Some(format!("AI 正在为「{prompt}」挑选歌曲…"));
                self.tasks.spawn("ai_recommend", async move {
                    match client.recommend(&prompt).await {
                        Ok(recommendations) => {
                            let _ = event_tx
                                .send_async(Event::RecommendationsFetched(recommendations))
                                .await;
                        }
                        Err(err) => {
                            warn!(%err, "AI recommendation request failed");
                            let _ = event_tx.send_async(Event::AiFailed(err.to_string())).await;
                        }
                    }
                });
            }
            None => {
                let _ = event_tx.send(Event::AiFailed(
                    "未配置 GEMINI_API_KEY，AI 电台不可用".into(),
                ));
            }
        }
    }
}
