use crate::theme::colors::{ACCENT, ERROR_COLOR};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerVariant {
    Error,
    Info,
}

impl BannerVariant {
    fn color(self) -> Color {
        match self {
            BannerVariant::Error => ERROR_COLOR,
            BannerVariant::Info => ACCENT,
        }
    }
}

/// A one-line boxed message drawn over the bottom edge of an area.
///
/// Used for errors that must not hide the list behind them, such as a
/// failed next page.
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub variant: BannerVariant,
}

impl Banner {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: BannerVariant::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: BannerVariant::Info,
        }
    }

    /// Where the banner lands inside `area`: centered, bottom-aligned.
    pub fn area_within(&self, area: Rect) -> Rect {
        // +4 for border chars and padding
        let box_width = (self.message.chars().count() + 4).min(area.width as usize) as u16;
        let height = 3.min(area.height);
        Rect {
            x: area.x + area.width.saturating_sub(box_width) / 2,
            y: area.y + area.height.saturating_sub(height),
            width: box_width,
            height,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let color = self.variant.color();
        let banner_area = self.area_within(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        let widget = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(Clear, banner_area);
        frame.render_widget(widget, banner_area);
    }
}
