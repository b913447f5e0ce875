use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const ACCENT: Color = Color::Green;
pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const STATUS_ALIVE: Color = Color::Green;
pub const STATUS_DEAD: Color = Color::Red;
pub const STATUS_UNKNOWN: Color = Color::Gray;

pub const BUTTON_BG: Color = Color::Green;
pub const BUTTON_TEXT: Color = Color::Black;
pub const ERROR_COLOR: Color = Color::Red;
