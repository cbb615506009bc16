//! Rendering
//!
//! Cards sit on a 24-column grid: each spans 8 columns (three per row) on a
//! wide terminal and the full 24 on a narrow one. The add/edit modal is drawn
//! over the grid.

use dish_client::{ButtonState, DishCard, FormField, ListView, Tone, state::EMPTY_MESSAGE};
use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::App;

const GRID_COLUMNS: usize = 24;
/// Terminal width from which cards span 8 grid columns instead of 24
const WIDE_MIN_WIDTH: u16 = 96;
const CARD_HEIGHT: u16 = 10;

/// Cards per row for a given terminal width
pub fn grid_columns(width: u16) -> usize {
    let span = if width >= WIDE_MIN_WIDTH { 8 } else { 24 };
    GRID_COLUMNS / span
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(8), // Logs
            Constraint::Length(1), // Key help
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_list(f, app, chunks[1]);
    draw_logs(f, app, chunks[2]);
    draw_help(f, app, chunks[3]);

    if app.state.modal().is_some() {
        draw_modal(f, app);
    }
    if let Some(toast) = &app.toast {
        draw_toast(f, toast.message);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let status = if app.state.is_submitting() {
        Span::styled(
            " Saving... ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else if app.state.is_loading() {
        Span::styled(" Loading... ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            format!(" {} dishes ", app.state.dishes().len()),
            Style::default().fg(Color::Green),
        )
    };

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Hotel Ordering App ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        status,
        Span::raw(" | "),
        Span::styled("[a] Add Dish", Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn draw_list(f: &mut Frame, app: &App, area: Rect) {
    let cards = match app.state.view() {
        ListView::Loading => {
            let loader = Paragraph::new("⟳ Loading dishes...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow));
            f.render_widget(loader, centered_line(area));
            return;
        }
        ListView::Empty => {
            let empty = Paragraph::new(EMPTY_MESSAGE).alignment(Alignment::Center);
            f.render_widget(empty, centered_line(area));
            return;
        }
        ListView::Cards(cards) => cards,
    };

    let columns = app.columns.max(1);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = app.selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_area, (row_idx, row)) in rows
        .iter()
        .zip(cards.chunks(columns).enumerate().skip(first_row))
    {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for (col_idx, card) in row.iter().enumerate() {
            let index = row_idx * columns + col_idx;
            draw_card(f, card, index == app.selected, cells[col_idx]);
        }
    }
}

fn draw_card(f: &mut Frame, card: &DishCard<'_>, selected: bool, area: Rect) {
    let label = |text: &'static str| Span::styled(text, Style::default().add_modifier(Modifier::BOLD));
    let category = card.category_tag();
    let availability = card.availability_tag();

    let lines = vec![
        Line::from(vec![label("Name: "), Span::raw(card.name())]),
        Line::from(vec![label("Description: "), Span::raw(card.description())]),
        Line::from(vec![label("Price: "), Span::raw(card.price_label())]),
        Line::from(vec![
            label("Category: "),
            Span::styled(format!("[{}]", category.label), tone_style(category.tone)),
        ]),
        Line::from(vec![
            label("Available: "),
            Span::styled(format!("[{}]", availability.label), tone_style(availability.tone)),
        ]),
        Line::from(vec![label("Waiting Time: "), Span::raw(card.waiting_label())]),
        Line::from(""),
        Line::from(vec![
            button("[e] Edit", card.edit_button()),
            Span::raw("  "),
            button("[d] Delete", card.delete_button()),
        ]),
    ];

    let border = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::DIM)
    };
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(border))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn button(text: &'static str, state: ButtonState) -> Span<'static> {
    if state.loading {
        Span::styled(
            format!("⟳ {}", text),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else if state.disabled {
        Span::styled(text, Style::default().add_modifier(Modifier::DIM))
    } else {
        Span::styled(text, Style::default().fg(Color::Cyan))
    }
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Neutral => Style::default().fg(Color::Gray),
        Tone::Green => Style::default().fg(Color::Green),
        Tone::Red => Style::default().fg(Color::Red),
    }
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let text = if app.state.modal().is_some() {
        " Tab/↑↓ field · ←→/Space choose · Enter save · Esc close "
    } else {
        " a add · e edit · d delete · r refresh · ←→↑↓ select · PgUp/PgDn logs · q quit "
    };
    let help = Paragraph::new(text).style(Style::default().add_modifier(Modifier::DIM));
    f.render_widget(help, area);
}

fn draw_modal(f: &mut Frame, app: &App) {
    let Some(modal) = app.state.modal() else {
        return;
    };
    let form = &modal.form;
    let area = centered_rect(60, 22, f.area());

    let mut lines = Vec::new();
    for field in FormField::ALL {
        let focused = field == app.focus;
        let marker = if focused { "▶ " } else { "  " };
        let mut value = form.value(field);
        if field.is_select() {
            value = format!("< {} >", if value.is_empty() { "Select" } else { value.as_str() });
        } else if focused {
            value.push('▏');
        }

        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(field.label(), label_style),
            Span::styled(" *", Style::default().fg(Color::Red)),
        ]));
        lines.push(Line::from(vec![Span::raw("    "), Span::raw(value)]));
        if let Some(message) = form.error(field) {
            lines.push(Line::from(Span::styled(
                format!("    {message}"),
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(button_label(modal.confirm_label(), app.state.confirm_button()))
            .alignment(Alignment::Center),
    );

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", modal.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn button_label(text: &'static str, state: ButtonState) -> Span<'static> {
    if state.loading {
        Span::styled(
            format!("[ ⟳ {text} ]"),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled(
            format!("[ {text} ]"),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    }
}

fn draw_toast(f: &mut Frame, message: &str) {
    let screen = f.area();
    let width = (message.chars().count() as u16 + 6).min(screen.width);
    let area = Rect {
        x: screen.width.saturating_sub(width + 1),
        y: 1,
        width,
        height: 3.min(screen.height),
    };
    let toast = Paragraph::new(Line::from(vec![
        Span::styled("✖ ", Style::default().fg(Color::Red)),
        Span::raw(message),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(Clear, area);
    f.render_widget(toast, area);
}

fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: 1.min(area.height),
        ..area
    }
}

/// Rect `percent_x` wide and `height` rows tall, centred in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_breakpoint() {
        assert_eq!(grid_columns(80), 1);
        assert_eq!(grid_columns(WIDE_MIN_WIDTH - 1), 1);
        assert_eq!(grid_columns(WIDE_MIN_WIDTH), 3);
        assert_eq!(grid_columns(200), 3);
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 22, area);
        assert_eq!(popup.height, 22);
        assert!(popup.x >= 19 && popup.x <= 21);

        let small = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(60, 22, small).height, 10);
    }
}
