use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    ui::{
        app::App,
        components::{
            sidebar::{SIDEBAR_ITEMS, Sidebar},
            transport::TransportBar,
        },
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let notice_height = if self.app.state.ui.notice.is_some() { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(notice_height),
                Constraint::Length(3),
            ])
            .split(area);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(1)])
            .split(chunks[0]);

        let sidebar_area = main_chunks[0];
        let content_area = main_chunks[1];
        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::MUTED))
            .title(Span::styled("ascendion", Style::default().fg(colors::PRIMARY)))
            .title_alignment(Alignment::Center);
        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::MUTED));

        let sidebar_inner = sidebar_block.inner(sidebar_area);
        let content_inner = content_block.inner(content_area);

        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(content_block, content_area);
        f.render_widget(
            Sidebar::new(
                &SIDEBAR_ITEMS,
                self.app.state.ui.current_route.sidebar_index(),
            ),
            sidebar_inner,
        );

        self.app
            .router
            .render(f, content_inner, &self.app.state, &self.app.ctx);

        if let Some(notice) = &self.app.state.ui.notice {
            f.render_widget(
                Paragraph::new(notice.as_str())
                    .style(Style::default().fg(colors::SECONDARY))
                    .alignment(Alignment::Center),
                chunks[1],
            );
        }

        self.app.state.ui.transport = TransportBar::areas(chunks[2]);
        let session = self.app.ctx.playback.snapshot();
        f.render_widget(TransportBar::new(&session), chunks[2]);
    }
}
