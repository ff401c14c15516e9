use std::sync::Arc;

use flume::Receiver;
use ratatui::Frame;
use tracing::{debug, info, warn};

use crate::{
    catalog::{CatalogSource, MockCatalog},
    config::PlayerConfig,
    event::events::Event,
    playback::PlaybackSystem,
    ui::{
        context::AppContext,
        layout::AppLayout,
        message::AppMessage,
        router::Router,
        state::{AppState, Route, SIDEBAR_ROUTES},
        tui::{self, TerminalEvent},
        util::handler::EventHandler,
        views::view_for,
    },
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub state: AppState,
    pub router: Router,
    pub history: Vec<Route>,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_catalog(config, Arc::new(MockCatalog::new()))
    }

    pub fn with_catalog(config: PlayerConfig, catalog: Arc<dyn CatalogSource>) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let playback = PlaybackSystem::new(&config, event_tx.clone(), catalog.liked_song_ids());

        Self {
            event_rx,
            ctx: AppContext {
                catalog,
                playback,
                event_tx,
                config,
            },
            state: AppState::default(),
            router: Router::new(),
            history: Vec::new(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.mouse(true);
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        let mut should_render = true;
        while !self.should_quit {
            if should_render {
                tui.draw(|f| {
                    self.ui(f);
                })?;
            }

            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    pub fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }

    pub async fn update(&mut self, msg: AppMessage) {
        debug!(?msg, "app message");
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::TogglePlayPause => self.ctx.playback.play_pause(),
            AppMessage::NextTrack => self.ctx.playback.next(),
            AppMessage::PreviousTrack => self.ctx.playback.previous(),
            AppMessage::VolumeUp => self.ctx.playback.volume_up(),
            AppMessage::VolumeDown => self.ctx.playback.volume_down(),
            AppMessage::SeekForward => self.ctx.playback.seek_forward(),
            AppMessage::SeekBackward => self.ctx.playback.seek_backward(),
            AppMessage::ToggleMute => self.ctx.playback.toggle_mute(),
            AppMessage::ToggleLikeCurrent => self.ctx.playback.toggle_like_current(),
            AppMessage::NavigateTo(route) => self.navigate(route).await,
            AppMessage::GoBack => self.go_back(),
            AppMessage::NextSidebarItem => {
                let next = (self.state.ui.sidebar_index + 1) % SIDEBAR_ROUTES.len();
                self.select_sidebar(next).await;
            }
            AppMessage::PreviousSidebarItem => {
                let len = SIDEBAR_ROUTES.len();
                let prev = (self.state.ui.sidebar_index + len - 1) % len;
                self.select_sidebar(prev).await;
            }
            AppMessage::SetSidebarIndex(index) => self.select_sidebar(index).await,
        }
    }

    async fn select_sidebar(&mut self, index: usize) {
        if let Some(route) = Route::from_sidebar(index) {
            self.navigate(route).await;
        }
    }

    /// Opens the configured launch page, falling back to Home when it does not parse.
    pub async fn open_start_route(&mut self) {
        let raw = self.ctx.config.start_route.clone();
        match Route::parse(&raw) {
            Ok(route) => self.navigate(route).await,
            Err(e) => {
                warn!(route = raw.as_str(), "bad start route: {}", e);
                self.state.ui.notice = Some(e.to_string());
            }
        }
        if self.router.depth() == 0 {
            let notice = self.state.ui.notice.take();
            self.navigate(Route::Home).await;
            self.state.ui.notice = notice;
        }
    }

    /// Top-level pages replace the stack, detail pages stack on top of it.
    pub async fn navigate(&mut self, route: Route) {
        let path = route.path();
        let Some(view) = view_for(&route) else {
            info!(path = path.as_str(), "no page for route");
            self.state.ui.notice = Some(format!("Nothing to show at {} yet.", path));
            return;
        };

        info!(path = path.as_str(), "navigate");
        self.state.ui.notice = None;
        if route.is_top_level() {
            self.state.ui.sidebar_index = route.sidebar_index().unwrap_or_default();
            self.history.clear();
            self.router.reset(view, &self.ctx).await;
        } else {
            self.router.push(view, &self.ctx).await;
        }
        self.history.push(route.clone());
        self.state.ui.current_route = route;
    }

    pub fn go_back(&mut self) {
        if self.router.pop() {
            self.history.pop();
            self.state.ui.current_route = self.history.last().cloned().unwrap_or_default();
            self.state.ui.notice = None;
        }
    }
}
