use crate::theme::{label_text, normal_text, selected_card, status_style, title_text, unfocused_border};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use roster_domain::Character;

/// Draw one grid cell: name, status, species and the avatar URL.
pub fn render_character_card(
    frame: &mut Frame,
    area: Rect,
    character: &Character,
    is_selected: bool,
    grid_focused: bool,
) {
    let border_style = if is_selected {
        selected_card(grid_focused)
    } else {
        unfocused_border()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" #{} ", character.id));

    let lines = vec![
        Line::from(Span::styled(character.name.clone(), title_text())),
        Line::from(vec![
            Span::styled("● ", status_style(character.status)),
            Span::styled(character.status.as_str(), status_style(character.status)),
            Span::styled(" - ", label_text()),
            Span::styled(character.species.clone(), normal_text()),
        ]),
        Line::from(Span::styled(character.image.clone(), label_text())),
    ];

    let mut widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    if is_selected && grid_focused {
        widget = widget.style(selected_card(true));
    }
    frame.render_widget(widget, area);
}
