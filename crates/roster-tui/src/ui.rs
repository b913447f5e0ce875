use crate::app::{App, Focus};
use crate::components::{
    render_character_card, render_error_screen, render_loading_screen, render_panel, Banner,
    PanelConfig,
};
use crate::grid::CARD_HEIGHT;
use crate::keybindings::KeybindingRegistry;
use crate::theme::{accent, button, highlight_text, label_text, normal_text};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use roster_core::error::FETCH_FAILED_MESSAGE;
use roster_domain::{grid_columns, logical_width, ViewState};

pub fn render(app: &mut App, frame: &mut Frame) {
    match app.browser.view() {
        ViewState::InitialLoading => render_loading_screen(frame, &app.spinner),
        ViewState::ErrorEmpty => {
            let message = app.browser.error().unwrap_or(FETCH_FAILED_MESSAGE);
            render_error_screen(frame, message);
        }
        ViewState::Loaded => render_loaded(app, frame),
    }
}

fn render_loaded(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_search(app, frame, chunks[0]);
    render_controls(app, frame, chunks[1]);
    render_grid(app, frame, chunks[2]);
    render_status_line(app, frame, chunks[3]);
    render_footer(app, frame, chunks[4]);
}

fn render_search(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Search;
    let config = PanelConfig::new("Search").focused(focused);

    let content = if app.search.is_empty() && !focused {
        Paragraph::new(Span::styled("Search characters...", label_text()))
    } else {
        Paragraph::new(Span::styled(app.search.as_str().to_string(), normal_text()))
    };
    render_panel(frame, area, &config, content);

    if focused {
        frame.set_cursor_position((search_cursor_x(area, app.search.cursor_column()), area.y + 1));
    }
}

/// Cursor column inside the bordered search box, pinned to its last cell.
fn search_cursor_x(area: Rect, column: usize) -> u16 {
    let column = u16::try_from(column).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(column)
        .min(area.right().saturating_sub(2))
}

fn render_controls(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(" Reload list ", button())];
    if !app.search.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("matching ", label_text()));
        spans.push(Span::styled(
            format!("\"{}\"", app.browser.search_text()),
            highlight_text(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_grid(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Grid;
    let title = format!("Characters ({})", app.browser.items().len());
    let config = PanelConfig::new(&title).focused(focused);
    let block = config.block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = grid_columns(logical_width(inner.width, app.cell_width_px));
    let viewport_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    app.grid
        .layout(app.browser.items().len(), columns, viewport_rows);

    if app.browser.items().is_empty() {
        let text = if app.browser.is_loading() {
            format!("{} Loading characters...", app.spinner.glyph())
        } else {
            "No characters found.".to_string()
        };
        let centered = Rect {
            y: inner.y + inner.height / 2,
            height: 1.min(inner.height),
            ..inner
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, label_text())).alignment(Alignment::Center),
            centered,
        );
    } else {
        let info = app.grid.page_info();
        let selected = app.grid.selected();
        let card_width = inner.width / columns as u16;

        for idx in info.visible_items.clone() {
            let row = (idx / columns - info.first_row) as u16;
            let col = (idx % columns) as u16;
            let cell = Rect {
                x: inner.x + col * card_width,
                y: inner.y + row * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT.min(inner.bottom().saturating_sub(inner.y + row * CARD_HEIGHT)),
            };
            if cell.height == 0 {
                break;
            }
            render_character_card(
                frame,
                cell,
                &app.browser.items()[idx],
                selected == Some(idx),
                focused,
            );
        }
    }

    if app.browser.is_refreshing() {
        Banner::info(format!("{} Refreshing...", app.spinner.glyph())).render(frame, inner);
    } else if let Some(error) = app.browser.error() {
        Banner::error(error).render(frame, inner);
    }
}

fn render_status_line(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    if app.browser.is_fetching_more() {
        spans.push(Span::styled(
            format!("{} Loading more...", app.spinner.glyph()),
            accent(),
        ));
    } else if !app.browser.has_more() && !app.browser.items().is_empty() {
        spans.push(Span::styled("End of list", label_text()));
    }

    if let Some(loaded_at) = app.browser.last_loaded_at() {
        if !spans.is_empty() {
            spans.push(Span::styled(" · ", label_text()));
        }
        let updated = loaded_at.with_timezone(&Local).format("%H:%M:%S");
        let text = match app.browser.loaded_page() {
            0 => format!("updated {}", updated),
            page => format!("Page {} · updated {}", page, updated),
        };
        spans.push(Span::styled(text, label_text()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let context = KeybindingRegistry::get_provider(app).get_context();
    frame.render_widget(
        Paragraph::new(Span::styled(context.footer_hint(), label_text())),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_cursor_stays_inside_box() {
        let area = Rect::new(4, 0, 30, 3);
        assert_eq!(search_cursor_x(area, 0), 5);
        assert_eq!(search_cursor_x(area, 10), 15);
        assert_eq!(search_cursor_x(area, 500), 32);
        assert_eq!(search_cursor_x(area, usize::MAX), 32);
    }

    #[test]
    fn test_search_cursor_near_u16_limit() {
        let area = Rect::new(u16::MAX - 10, 0, 10, 3);
        assert_eq!(search_cursor_x(area, 70_000), u16::MAX - 2);
    }
}
