use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Widget},
};

use crate::util::colors;

pub const SIDEBAR_ITEMS: [&str; 3] = ["󰋜  Home", "  Search", "󰌱  Library"];

pub struct Sidebar<'a> {
    items: &'a [&'a str],
    selected_index: Option<usize>,
}

impl<'a> Sidebar<'a> {
    /// `selected_index` is `None` while a detail page is open.
    pub fn new(items: &'a [&'a str], selected_index: Option<usize>) -> Self {
        Self {
            items,
            selected_index,
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if Some(i) == self.selected_index {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };
                ListItem::new(format!("  {}", item)).style(style)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
