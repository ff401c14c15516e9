use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::{
    catalog::Song,
    playback::PlaybackSession,
    ui::{
        components::transport::heart,
        traits::Action,
        util::{get_active_track_icon, truncate},
    },
    util::colors,
};

/// Play button on a song row: pauses the row that is already playing,
/// otherwise starts it from the top.
pub fn play_or_pause(
    song: &Song,
    session: &PlaybackSession,
    fallback_artwork: Option<&str>,
) -> Action {
    if session.is_current(&song.id) && session.is_playing() {
        Action::PlayPause
    } else {
        Action::Play(song.to_track(fallback_artwork))
    }
}

fn column(text: &str, width: usize) -> String {
    format!("{:<width$}", truncate(text, width), width = width)
}

pub struct SongRow<'a> {
    song: &'a Song,
    number: usize,
    show_album: bool,
}

impl<'a> SongRow<'a> {
    pub fn new(song: &'a Song, number: usize) -> Self {
        Self {
            song,
            number,
            show_album: true,
        }
    }

    pub fn show_album(mut self, show_album: bool) -> Self {
        self.show_album = show_album;
        self
    }

    pub fn to_list_item(&self, session: &PlaybackSession, width: usize) -> ListItem<'static> {
        let is_active = session.is_current(&self.song.id);
        let is_playing = is_active && session.is_playing();
        let liked = session.is_liked(&self.song.id);

        let lead = if is_active {
            format!("{:>3} ", get_active_track_icon(is_playing))
        } else {
            format!("{:>3} ", self.number)
        };

        // lead, heart and duration take 14 cells
        let text_width = width.saturating_sub(14);
        let (title_w, artist_w, album_w) = if self.show_album {
            (text_width * 2 / 5, text_width * 3 / 10, text_width * 3 / 10)
        } else {
            (text_width / 2, text_width / 2, 0)
        };

        let title_style = if is_playing {
            Style::default()
                .fg(colors::SECONDARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::TEXT)
        };
        let heart_style = if liked {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let mut spans = vec![
            Span::styled(lead, Style::default().fg(colors::NEUTRAL)),
            Span::styled(column(&self.song.title, title_w), title_style),
            Span::raw(" "),
            Span::styled(
                column(&self.song.artist, artist_w),
                Style::default().fg(colors::NEUTRAL),
            ),
        ];
        if self.show_album {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                column(self.song.album.as_deref().unwrap_or_default(), album_w),
                Style::default().fg(colors::NEUTRAL),
            ));
        }
        spans.push(Span::styled(format!(" {} ", heart(liked)), heart_style));
        spans.push(Span::styled(
            format!("{:>6}", self.song.duration_label),
            Style::default().fg(colors::NEUTRAL),
        ));

        let mut item = ListItem::new(Line::from(spans));
        if is_active {
            item = item.style(Style::default().bg(colors::SURFACE));
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song() -> Song {
        Song::new("s1", "Future Echoes", "Cybernetic Bard", Some("Digital Dreams"), 225, None)
    }

    #[test]
    fn idle_row_plays() {
        let session = PlaybackSession::default();
        let Action::Play(track) = play_or_pause(&song(), &session, Some("cover")) else {
            panic!("expected play");
        };
        assert_eq!(track.id, "s1");
        assert_eq!(track.duration_secs, 225);
        assert_eq!(track.artwork_url, "cover");
    }

    #[test]
    fn playing_row_pauses() {
        let mut session = PlaybackSession::default();
        session.load_and_play(song().to_track(None));
        assert_eq!(play_or_pause(&song(), &session, None), Action::PlayPause);
    }

    #[test]
    fn paused_row_restarts() {
        let mut session = PlaybackSession::default();
        session.load_and_play(song().to_track(None));
        session.seek(50.0);
        session.toggle_play_pause();
        assert!(matches!(
            play_or_pause(&song(), &session, None),
            Action::Play(_)
        ));
    }
}
