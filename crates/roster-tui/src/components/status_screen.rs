//! Full-screen states shown while nothing has been loaded yet.

use super::Spinner;
use crate::theme::{button, error_text, label_text, normal_text};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const STATUS_BOX_WIDTH: u16 = 48;

/// A `width` x `height` box in the middle of `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

pub fn render_loading_screen(frame: &mut Frame, spinner: &Spinner) {
    let area = centered_rect(STATUS_BOX_WIDTH, 3, frame.area());
    let text = vec![
        Line::from(Span::styled(spinner.glyph(), normal_text())),
        Line::from(""),
        Line::from(Span::styled("Loading characters...", label_text())),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

pub fn render_error_screen(frame: &mut Frame, message: &str) {
    let area = centered_rect(STATUS_BOX_WIDTH, 3, frame.area());
    let text = vec![
        Line::from(Span::styled(message.to_string(), error_text())),
        Line::from(""),
        Line::from(Span::styled(" Try again ", button())),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}
