//! Overlay rendering (error notification, help popup)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::UiState;

pub fn render_error_notification(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref error_msg) = ui_state.error_message {
        let area = frame.area();

        // Fixed width popup (responsive to screen size)
        let popup_width = 52.min(area.width.saturating_sub(4));
        // Never zero, even on terminals narrower than the borders
        let inner_width = (popup_width.saturating_sub(4) as usize).max(1);

        // Calculate how many lines the error message will take when wrapped
        let error_line_count = error_msg
            .chars()
            .count()
            .div_ceil(inner_width)
            .min(u16::MAX as usize) as u16;

        // Height: top border (1) + error lines + bottom border (1)
        let popup_height = 2u16
            .saturating_add(error_line_count.max(1))
            .min(area.height.saturating_sub(4));

        let popup_x = area.width.saturating_sub(popup_width) / 2;
        let popup_y = area.height.saturating_sub(popup_height) / 2;

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: popup_width,
            height: popup_height,
        };

        // Clear the area behind the popup first
        frame.render_widget(Clear, popup_area);

        // Create text with error message and dismiss hint
        let error_widget = Paragraph::new(error_msg.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(ratatui::widgets::Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error (Esc to dismiss) ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(error_widget, popup_area);
    }
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    // Define keybindings organized by category
    let keybindings = vec![
        ("", "── Characters ──"),
        ("Type", "Search by name (500 ms debounce)"),
        ("Backspace", "Delete last character"),
        ("Esc", "Clear search"),
        ("F2", "Sort by name (again to flip)"),
        ("F3", "Sort by modified (again to flip)"),
        ("↑ / ↓", "Move selection"),
        ("Enter", "Open detail"),
        ("Tab", "Go to gallery"),
        ("", ""),
        ("", "── Gallery ──"),
        ("C", "Toggle has comics"),
        ("S", "Toggle has series"),
        ("E", "Toggle has events"),
        ("↑ / ↓", "Move selection"),
        ("Enter", "Open detail"),
        ("Tab", "Go to list"),
        ("", ""),
        ("", "── Detail ──"),
        ("← / P", "Previous character"),
        ("→ / N", "Next character"),
        ("Esc / Backspace", "Back"),
        ("", ""),
        ("", "── General ──"),
        ("F1", "Toggle this help"),
        ("?", "Toggle this help (gallery, detail)"),
        ("Ctrl+C / Ctrl+Q", "Quit"),
        ("Q", "Quit (gallery, detail)"),
    ];

    let popup_width = 62;
    let popup_height = (keybindings.len() as u16 + 2).min(area.height.saturating_sub(4));

    let popup_x = area.width.saturating_sub(popup_width) / 2;
    let popup_y = area.height.saturating_sub(popup_height) / 2;

    let popup_area = Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    };

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    // Create help text lines
    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        desc.to_string(),
                        Style::default().fg(Color::White),
                    ),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (F1 or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
