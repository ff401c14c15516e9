use crate::event::events::Event;
use crate::ui::context::AppContext;
use crate::ui::state::AppState;
use crate::ui::traits::{Action, View};
use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

#[derive(Default)]
pub struct Router {
    pub stack: Vec<Box<dyn View>>,
}

impl Router {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub async fn push(&mut self, mut view: Box<dyn View>, ctx: &AppContext) {
        view.on_mount(ctx).await;
        self.stack.push(view);
    }

    /// Drops every view (aborting their fetches) and mounts `view` as the root.
    pub async fn reset(&mut self, view: Box<dyn View>, ctx: &AppContext) {
        self.stack.clear();
        self.push(view, ctx).await;
    }

    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        if let Some(view) = self.stack.last_mut() {
            view.render(f, area, state, ctx);
        }
    }

    pub async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        match self.stack.last_mut() {
            Some(view) => view.handle_input(key, state, ctx).await,
            None => None,
        }
    }

    pub async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        for view in &mut self.stack {
            view.on_event(event, ctx).await;
        }
    }
}
