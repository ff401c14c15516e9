use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph, Widget},
};

use crate::{
    catalog::{CardFallback, MediaItem, MediaKind},
    ui::{state::Route, traits::Action, util::truncate},
    util::colors,
};

pub const CARD_WIDTH: u16 = 24;
pub const CAROUSEL_HEIGHT: u16 = 7;

pub fn kind_icon(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Album => "󰀥",
        MediaKind::Song => "󰎈",
        MediaKind::Artist => "󰠃",
        MediaKind::Playlist => "󰲸",
    }
}

/// Enter on a card. Albums and playlists navigate; artists have no page.
pub fn open_action(item: &MediaItem, fallback: &CardFallback) -> Option<Action> {
    match item {
        MediaItem::Album(card) => Some(Action::Navigate(Route::Album(card.id.clone()))),
        MediaItem::Playlist(card) => Some(Action::Navigate(Route::Playlist(card.id.clone()))),
        MediaItem::Song(_) => play_action(item, fallback),
        MediaItem::Artist(_) => None,
    }
}

/// The play button on a card. Artist cards have none.
pub fn play_action(item: &MediaItem, fallback: &CardFallback) -> Option<Action> {
    match item.kind() {
        MediaKind::Artist => None,
        _ => Some(Action::Play(item.to_track(fallback))),
    }
}

pub fn card_list_item(item: &MediaItem, width: usize) -> ListItem<'static> {
    let title = Line::from(vec![
        Span::styled(
            format!("{} ", kind_icon(item.kind())),
            Style::default().fg(colors::SECONDARY),
        ),
        Span::styled(
            truncate(item.title(), width.saturating_sub(2)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let subtitle = Line::from(Span::styled(
        format!("  {}", truncate(item.subtitle().unwrap_or_default(), width.saturating_sub(2))),
        Style::default().fg(colors::NEUTRAL),
    ));
    ListItem::new(vec![title, subtitle])
}

/// A titled row of cards that scrolls to keep the selection visible.
pub struct Carousel<'a> {
    title: &'a str,
    items: &'a [MediaItem],
    selected: Option<usize>,
}

impl<'a> Carousel<'a> {
    pub fn new(title: &'a str, items: &'a [MediaItem]) -> Self {
        Self {
            title,
            items,
            selected: None,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for Carousel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = if self.selected.is_some() {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(colors::MUTED))
            .title(Span::styled(format!(" {} ", self.title), title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let visible = (inner.width / CARD_WIDTH).max(1) as usize;
        let offset = self
            .selected
            .map_or(0, |s| s.saturating_sub(visible - 1));

        let text_width = CARD_WIDTH.saturating_sub(4) as usize;
        for (slot, (i, item)) in self
            .items
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let x = inner.x + slot as u16 * CARD_WIDTH;
            let card_area = Rect {
                x,
                y: inner.y,
                width: CARD_WIDTH.min(inner.right().saturating_sub(x)),
                height: inner.height,
            };
            let border_style = if Some(i) == self.selected {
                Style::default().fg(colors::PRIMARY)
            } else {
                Style::default().fg(colors::MUTED)
            };
            let card = Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(border_style);

            let lines = vec![
                Line::from(Span::styled(
                    format!("{} {}", kind_icon(item.kind()), item.kind().as_str()),
                    Style::default().fg(colors::SECONDARY),
                )),
                Line::from(Span::styled(
                    truncate(item.title(), text_width),
                    Style::default()
                        .fg(colors::TEXT)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    truncate(item.subtitle().unwrap_or_default(), text_width),
                    Style::default().fg(colors::NEUTRAL),
                )),
            ];
            Paragraph::new(lines).block(card).render(card_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardInfo;

    fn album() -> MediaItem {
        MediaItem::Album(CardInfo::new("album1", "Synth Dreams", "ElectroMaestro", "img"))
    }

    fn fallback() -> CardFallback {
        CardFallback::new(240, "Various Artists")
    }

    #[test]
    fn albums_and_playlists_open_their_routes() {
        assert_eq!(
            open_action(&album(), &fallback()),
            Some(Action::Navigate(Route::Album("album1".into())))
        );
        let playlist = MediaItem::Playlist(CardInfo::new("p1", "Retro Vibes", "", "img"));
        assert_eq!(
            open_action(&playlist, &fallback()),
            Some(Action::Navigate(Route::Playlist("p1".into())))
        );
    }

    #[test]
    fn playing_a_card_builds_a_fallback_track() {
        let Some(Action::Play(track)) = play_action(&album(), &fallback()) else {
            panic!("expected a play action");
        };
        assert_eq!(track.title, "Synth Dreams");
        assert_eq!(track.artist, "ElectroMaestro");
        assert_eq!(track.duration_secs, 240);

        let mix = MediaItem::Playlist(CardInfo::new("p4", "Deep Focus Ambient", "", "img"));
        let browse = CardFallback::new(210, "Unknown");
        let Some(Action::Play(track)) = play_action(&mix, &browse) else {
            panic!("expected a play action");
        };
        assert_eq!(track.artist, "Unknown");
        assert_eq!(track.duration_secs, 210);
    }

    #[test]
    fn artists_cannot_be_played_or_opened() {
        let artist = MediaItem::Artist(CardInfo::new("ar1", "SynthWave Surfer", "Artist", "img"));
        assert_eq!(play_action(&artist, &fallback()), None);
        assert_eq!(open_action(&artist, &fallback()), None);
    }
}
