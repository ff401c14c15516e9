use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{
    playback::PlaybackSession,
    ui::util::truncate,
    util::{colors, format::format_clock},
};

pub const EMPTY_MESSAGE: &str = "No track selected.";

const HEART_FILLED: &str = "♥";
const HEART_EMPTY: &str = "♡";
const VOLUME_ICON: &str = "󰕾";
const MUTED_ICON: &str = "󰝟";

/// `elapsed / total`, or `None` when nothing is loaded.
pub fn time_label(session: &PlaybackSession) -> Option<String> {
    session.current_track().map(|track| {
        format!(
            "{} / {}",
            format_clock(session.elapsed_secs()),
            format_clock(f64::from(track.duration_secs))
        )
    })
}

pub fn heart(liked: bool) -> &'static str {
    if liked { HEART_FILLED } else { HEART_EMPTY }
}

/// Where the clickable gauges of the bar land for a given area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportAreas {
    pub info: Rect,
    pub controls: Rect,
    pub progress: Rect,
    pub volume_icon: Rect,
    pub volume: Rect,
}

/// Maps a click column on a gauge to a percentage, 0 at the left edge and
/// 100 at the right edge.
pub fn percent_at(gauge: Rect, column: u16) -> f64 {
    if gauge.width <= 1 {
        return 0.0;
    }
    let offset = column.saturating_sub(gauge.x).min(gauge.width - 1);
    f64::from(offset) * 100.0 / f64::from(gauge.width - 1)
}

/// The bar at the bottom of every page. Reads the session, never changes it.
pub struct TransportBar<'a> {
    session: &'a PlaybackSession,
}

impl<'a> TransportBar<'a> {
    pub fn new(session: &'a PlaybackSession) -> Self {
        Self { session }
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(colors::MUTED))
    }

    pub fn areas(area: Rect) -> TransportAreas {
        let inner = Self::block().inner(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(50),
                Constraint::Percentage(20),
            ])
            .spacing(2)
            .split(inner);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(cols[1]);
        let volume = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(cols[2]);

        TransportAreas {
            info: cols[0],
            controls: rows[0],
            progress: rows[1],
            volume_icon: volume[0],
            volume: Rect {
                height: volume[1].height.min(1),
                ..volume[1]
            },
        }
    }

    fn render_track_info(&self, area: Rect, buf: &mut Buffer) {
        let Some(track) = self.session.current_track() else {
            return;
        };
        let width = area.width.saturating_sub(2) as usize;
        let liked = self.session.current_is_liked();
        let heart_style = if liked {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    truncate(&track.title, width),
                    Style::default()
                        .fg(colors::TEXT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(heart(liked), heart_style),
            ]),
            Line::from(Span::styled(
                truncate(&track.artist, width),
                Style::default().fg(colors::NEUTRAL),
            )),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn render_controls(&self, areas: &TransportAreas, buf: &mut Buffer) {
        let play_glyph = if self.session.is_playing() {
            "󰏤"
        } else {
            "󰐊"
        };
        Paragraph::new(Line::from(vec![
            Span::styled("󰒮", Style::default().fg(colors::NEUTRAL)),
            Span::raw("   "),
            Span::styled(
                play_glyph,
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("󰒭", Style::default().fg(colors::NEUTRAL)),
        ]))
        .alignment(Alignment::Center)
        .render(areas.controls, buf);

        let label = time_label(self.session).unwrap_or_default();
        super::gauge::BarGauge::default()
            .percent(self.session.progress())
            .label(Span::styled(label, Style::default().fg(colors::TEXT)))
            .use_unicode(true)
            .filled_style(Style::default().fg(colors::PRIMARY))
            .remaining_style(Style::default().bg(colors::SURFACE))
            .render(areas.progress, buf);
    }

    fn render_volume(&self, areas: &TransportAreas, buf: &mut Buffer) {
        let icon = if self.session.is_muted() {
            MUTED_ICON
        } else {
            VOLUME_ICON
        };
        if !areas.volume_icon.is_empty() {
            buf.set_string(
                areas.volume_icon.x,
                areas.volume_icon.y,
                icon,
                Style::default().fg(colors::NEUTRAL),
            );
        }

        super::gauge::BarGauge::default()
            .percent(self.session.volume())
            .label(format!("{}%", self.session.volume().round() as u16))
            .use_unicode(true)
            .filled_style(Style::default().fg(colors::SECONDARY))
            .remaining_style(Style::default().bg(colors::SURFACE))
            .render(areas.volume, buf);
    }
}

impl Widget for TransportBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Self::block();
        let inner = block.inner(area);
        block.render(area, buf);

        if self.session.current_track().is_none() {
            Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(colors::NEUTRAL))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let areas = Self::areas(area);
        self.render_track_info(areas.info, buf);
        self.render_controls(&areas, buf);
        self.render_volume(&areas, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::Track;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(session: &PlaybackSession) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 3)).unwrap();
        terminal
            .draw(|f| f.render_widget(TransportBar::new(session), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn idle_bar_shows_placeholder() {
        let session = PlaybackSession::default();
        assert_eq!(time_label(&session), None);
        assert!(render(&session).contains(EMPTY_MESSAGE));
    }

    #[test]
    fn time_label_floors_elapsed_seconds() {
        let mut session = PlaybackSession::default();
        session.load_and_play(Track::new("s1", "Future Echoes", "Cybernetic Bard", "", 225));
        assert_eq!(time_label(&session).as_deref(), Some("0:00 / 3:45"));

        session.seek(40.0);
        assert_eq!(time_label(&session).as_deref(), Some("1:30 / 3:45"));

        session.seek(100.0);
        assert_eq!(time_label(&session).as_deref(), Some("3:45 / 3:45"));
    }

    #[test]
    fn clicks_map_to_percentages() {
        let gauge = Rect::new(10, 2, 11, 1);
        assert_eq!(percent_at(gauge, 10), 0.0);
        assert_eq!(percent_at(gauge, 15), 50.0);
        assert_eq!(percent_at(gauge, 20), 100.0);
        assert_eq!(percent_at(gauge, 99), 100.0);
        assert_eq!(percent_at(gauge, 0), 0.0);
    }

    #[test]
    fn areas_sit_inside_the_bar() {
        let area = Rect::new(0, 37, 120, 3);
        let areas = TransportBar::areas(area);
        assert_eq!(areas.progress.y, 39);
        assert_eq!(areas.progress.height, 1);
        assert!(areas.volume.width > 0);
        assert!(areas.progress.x > areas.info.x);
    }

    #[test]
    fn loaded_bar_shows_track_and_like_state() {
        let mut session = PlaybackSession::default().with_liked(["s2"]);
        session.load_and_play(Track::new("s2", "Neon Rider", "Grid Runner", "", 252));
        let screen = render(&session);
        assert!(screen.contains("Neon Rider"));
        assert!(screen.contains("Grid Runner"));
        assert!(screen.contains(HEART_FILLED));
        assert!(!screen.contains(EMPTY_MESSAGE));
    }
}
