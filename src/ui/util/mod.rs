pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::widgets::ListState;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn get_active_track_icon(is_playing: bool) -> &'static str {
    if is_playing {
        const FRAME_STEP_MS: u128 = 100;

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis());
        let step = (now / FRAME_STEP_MS) as usize % 6;

        match step {
            0 | 5 => "·",
            1 | 4 => "•",
            _ => "●",
        }
    } else {
        "•"
    }
}

/// Cuts `text` to at most `width` terminal cells, ending in `…` when shortened.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Moves a list selection one row, wrapping at both ends.
pub fn step_selection(state: &mut ListState, len: usize, forward: bool) {
    if len == 0 {
        state.select(None);
        return;
    }
    let next = match state.selected() {
        None => 0,
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
    };
    state.select(Some(next));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps() {
        let mut state = ListState::default();
        step_selection(&mut state, 3, true);
        assert_eq!(state.selected(), Some(0));
        step_selection(&mut state, 3, false);
        assert_eq!(state.selected(), Some(2));
        step_selection(&mut state, 3, true);
        assert_eq!(state.selected(), Some(0));
        step_selection(&mut state, 0, true);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Neon Rider", 10), "Neon Rider");
    }

    #[test]
    fn truncate_ends_with_ellipsis() {
        assert_eq!(truncate("Starlight Melody", 8), "Starlig…");
        assert_eq!(truncate("Starlight Melody", 0), "");
    }

    #[test]
    fn truncate_counts_wide_characters() {
        assert_eq!(truncate("音楽の時間", 5), "音楽…");
    }
}
