use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x0010b981);
pub const SECONDARY: Color = Color::from_u32(0x00047857);
pub const NEUTRAL: Color = Color::from_u32(0x0064748b);
pub const BACKGROUND: Color = Color::from_u32(0x00020617);
pub const ACCENT: Color = Color::from_u32(0x0034d399);
