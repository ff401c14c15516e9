use crossterm::event::KeyCode;
use ratatui::{
    crossterm::event::{
        KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    layout::Position,
};
use tracing::{debug, info, trace, warn};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        components::transport::percent_at,
        input::InputHandler,
        message::AppMessage,
        state::Route,
        traits::Action,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui).await? {
                should_render = true;
            }
        }

        should_render |= Self::drain_app_events(app).await;
        Ok(should_render)
    }

    /// Applies every pending app event. Returns whether anything arrived.
    pub async fn drain_app_events(app: &mut App) -> bool {
        let mut any = false;
        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
            any = true;
        }
        any
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => app.open_start_route().await,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse),
            TerminalEvent::Tick => {
                return Ok(app.has_focus);
            }
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    pub async fn handle_action(app: &mut App, evt: Event) {
        app.router.on_event(&evt, &app.ctx).await;

        match evt {
            Event::HomeFeedFetched(feed) => {
                if app.state.ui.current_route != Route::Home {
                    debug!("home feed arrived after leaving home");
                    return;
                }
                if let Some(track) = feed.welcome_track {
                    app.ctx.playback.cue(track);
                }
            }
            Event::PlaybackProgress(percent) => {
                trace!(percent, "playback progress");
            }
            Event::PlaybackFinished(id) => {
                info!(id = id.as_str(), "track reached the end");
            }
            Event::PlaylistDescriptionSaved(playlist) => {
                app.state.ui.notice = Some(format!("Description of {} updated.", playlist.name));
            }
            Event::FetchError(e) => {
                warn!("Fetch failed: {}", e);
                app.state.ui.notice = Some(e);
            }
            _ => {}
        }
    }

    pub async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        match evt.code {
            KeyCode::Char('c') if evt.modifiers == KeyModifiers::CONTROL => {
                app.update(AppMessage::Quit).await;
                return;
            }
            KeyCode::Tab => {
                app.update(AppMessage::NextSidebarItem).await;
                return;
            }
            KeyCode::BackTab => {
                app.update(AppMessage::PreviousSidebarItem).await;
                return;
            }
            _ => {}
        }

        let action = app.router.handle_input(evt, &app.state, &app.ctx).await;

        if let Some(action) = action {
            Self::dispatch_action(app, action).await;
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt) {
            app.update(msg).await;
        }
    }

    pub async fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::Play(track) => app.ctx.playback.load_and_play(track),
            Action::PlayPause => app.ctx.playback.play_pause(),
            Action::ToggleLike(id) => {
                app.ctx.playback.toggle_like(&id);
            }
            Action::Navigate(route) => app.navigate(route).await,
            Action::None => {}
        }
    }

    pub fn handle_mouse_event(app: &mut App, evt: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = evt.kind {
            Self::handle_click(app, evt.column, evt.row);
            return;
        }

        let playback = &mut app.ctx.playback;
        match (evt.kind, evt.modifiers) {
            (MouseEventKind::ScrollUp, KeyModifiers::SHIFT) => playback.seek_forward(),
            (MouseEventKind::ScrollUp, _) => playback.volume_up(),
            (MouseEventKind::ScrollDown, KeyModifiers::SHIFT) => playback.seek_backward(),
            (MouseEventKind::ScrollDown, _) => playback.volume_down(),
            _ => {}
        }
    }

    /// Clicking a gauge of the transport bar behaves like dragging a slider there.
    fn handle_click(app: &mut App, column: u16, row: u16) {
        if app.ctx.playback.snapshot().current_track().is_none() {
            return;
        }
        let areas = app.state.ui.transport;
        let pos = Position::new(column, row);
        if areas.progress.contains(pos) {
            app.ctx.playback.seek(percent_at(areas.progress, column));
        } else if areas.volume.contains(pos) {
            app.ctx.playback.set_volume(percent_at(areas.volume, column));
        } else if areas.volume_icon.contains(pos) {
            app.ctx.playback.toggle_mute();
        }
    }
}
