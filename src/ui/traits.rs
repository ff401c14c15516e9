use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{
    event::events::Event,
    playback::Track,
    ui::{
        context::AppContext,
        state::{AppState, Route},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Play(Track),
    PlayPause,
    ToggleLike(String),
    Navigate(Route),
    None,
}

#[async_trait]
pub trait View: Send {
    async fn on_mount(&mut self, _ctx: &AppContext) {}

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext);

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action>;

    async fn on_event(&mut self, _event: &Event, _ctx: &AppContext) {}
}
