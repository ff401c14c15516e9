use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Char(' '), _) => Some(AppMessage::TogglePlayPause),
            (KeyCode::Char('n'), _) => Some(AppMessage::NextTrack),
            (KeyCode::Char('p'), _) => Some(AppMessage::PreviousTrack),
            (KeyCode::Char('+'), _) => Some(AppMessage::VolumeUp),
            (KeyCode::Char('='), _) => Some(AppMessage::VolumeUp),
            (KeyCode::Char('-'), _) => Some(AppMessage::VolumeDown),
            (KeyCode::Char('H'), _) => Some(AppMessage::SeekBackward),
            (KeyCode::Char('L'), _) => Some(AppMessage::SeekForward),
            (KeyCode::Char('m'), _) => Some(AppMessage::ToggleMute),
            (KeyCode::Char('F'), _) => Some(AppMessage::ToggleLikeCurrent),
            (KeyCode::Esc, _) => Some(AppMessage::GoBack),
            (KeyCode::Tab, _) => Some(AppMessage::NextSidebarItem),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousSidebarItem),
            (KeyCode::Char('1'), _) => Some(AppMessage::SetSidebarIndex(0)),
            (KeyCode::Char('2'), _) => Some(AppMessage::SetSidebarIndex(1)),
            (KeyCode::Char('3'), _) => Some(AppMessage::SetSidebarIndex(2)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn transport_keys() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char(' '))),
            Some(AppMessage::TogglePlayPause)
        );
        assert_eq!(
            InputHandler::handle_key(KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT)),
            Some(AppMessage::SeekForward)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('m'))),
            Some(AppMessage::ToggleMute)
        );
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            InputHandler::handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppMessage::Quit)
        );
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn digits_pick_sidebar_entries() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('3'))),
            Some(AppMessage::SetSidebarIndex(2))
        );
    }
}
