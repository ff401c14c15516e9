use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    Submitted(String),
    Cancelled,
    Changed,
}

/// Single-field editor used by the search boxes and the description editor.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
    editing: bool,
    placeholder: String,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
        self.cursor = self.value.chars().count();
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Applies a key while editing. Enter submits the trimmed value, Esc
    /// cancels; both leave edit mode.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputOutcome {
        match key.code {
            KeyCode::Enter => {
                self.editing = false;
                InputOutcome::Submitted(self.value.trim().to_string())
            }
            KeyCode::Esc => {
                self.editing = false;
                InputOutcome::Cancelled
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let i = self.byte_index();
                    self.value.remove(i);
                }
                InputOutcome::Changed
            }
            KeyCode::Delete => {
                if self.cursor < self.value.chars().count() {
                    let i = self.byte_index();
                    self.value.remove(i);
                }
                InputOutcome::Changed
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputOutcome::Changed
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                InputOutcome::Changed
            }
            KeyCode::Home => {
                self.cursor = 0;
                InputOutcome::Changed
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                InputOutcome::Changed
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.clear();
                self.cursor = 0;
                InputOutcome::Changed
            }
            KeyCode::Char(c) => {
                let i = self.byte_index();
                self.value.insert(i, c);
                self.cursor += 1;
                InputOutcome::Changed
            }
            _ => InputOutcome::Changed,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, title: &str) {
        let border_style = if self.editing {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(border_style);
        let inner = block.inner(area);

        let paragraph = if self.value.is_empty() && !self.editing {
            Paragraph::new(self.placeholder.clone()).style(Style::default().fg(colors::MUTED))
        } else {
            Paragraph::new(self.value.clone()).style(Style::default().fg(colors::TEXT))
        };
        f.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);

        if self.editing && inner.width > 0 {
            let before: String = self.value.chars().take(self.cursor).collect();
            let offset = before.width() as u16;
            f.set_cursor_position(Position::new(
                inner.x + offset % inner.width,
                inner.y + (offset / inner.width).min(inner.height.saturating_sub(1)),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_and_submitting() {
        let mut input = TextInput::new("Search");
        input.start_editing();
        type_text(&mut input, " neon ");
        assert_eq!(
            input.handle_key(key(KeyCode::Enter)),
            InputOutcome::Submitted("neon".into())
        );
        assert!(!input.is_editing());
    }

    #[test]
    fn editing_in_the_middle() {
        let mut input = TextInput::new("").with_value("Retro");
        input.start_editing();
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        type_text(&mut input, "é");
        assert_eq!(input.value(), "Reéro");
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "eéro");
    }

    #[test]
    fn escape_cancels_without_clearing() {
        let mut input = TextInput::new("").with_value("kept");
        input.start_editing();
        assert_eq!(input.handle_key(key(KeyCode::Esc)), InputOutcome::Cancelled);
        assert_eq!(input.value(), "kept");
    }
}
