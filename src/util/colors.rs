use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00ef4444);
pub const SECONDARY: Color = Color::from_u32(0x00f87171);
pub const NEUTRAL: Color = Color::from_u32(0x00737373);
pub const MUTED: Color = Color::from_u32(0x00404040);
pub const SURFACE: Color = Color::from_u32(0x00262626);
pub const BACKGROUND: Color = Color::from_u32(0x00171717);
pub const TEXT: Color = Color::from_u32(0x00fafafa);
