pub mod gauge;
pub mod media_card;
pub mod sidebar;
pub mod song_row;
pub mod spinner;
pub mod text_input;
pub mod transport;
