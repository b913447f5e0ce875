use super::colors::*;
use ratatui::style::{Modifier, Style};
use roster_domain::CharacterStatus;

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_card(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUSED_BORDER).bg(SELECTED_BG)
    } else {
        Style::default().fg(FOCUSED_BORDER)
    }
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn title_text() -> Style {
    Style::default()
        .fg(NORMAL_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR)
}

pub fn button() -> Style {
    Style::default()
        .fg(BUTTON_TEXT)
        .bg(BUTTON_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn status_style(status: CharacterStatus) -> Style {
    let color = match status {
        CharacterStatus::Alive => STATUS_ALIVE,
        CharacterStatus::Dead => STATUS_DEAD,
        CharacterStatus::Unknown => STATUS_UNKNOWN,
    };
    Style::default().fg(color)
}
