use crate::theme::{focused_border, label_text, title_text, unfocused_border};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered box whose border and title follow keyboard focus.
pub struct PanelConfig<'a> {
    title: &'a str,
    is_focused: bool,
}

impl<'a> PanelConfig<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            is_focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    fn title_line(&self) -> Line<'a> {
        if self.is_focused {
            Line::from(vec![
                Span::styled(format!(" {} ", self.title), title_text()),
                Span::styled("● ", focused_border()),
            ])
        } else {
            Line::from(Span::styled(format!(" {} ", self.title), label_text()))
        }
    }

    pub fn block(&self) -> Block<'a> {
        let border_style = if self.is_focused {
            focused_border()
        } else {
            unfocused_border()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title_line())
    }
}

pub fn render_panel<'a>(
    frame: &mut Frame,
    area: Rect,
    config: &PanelConfig<'a>,
    content: Paragraph<'a>,
) {
    frame.render_widget(content.block(config.block()), area);
}
