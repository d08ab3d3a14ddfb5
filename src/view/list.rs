//! Search/sort list view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::ListState;
use super::utils::{calculate_num_width, format_date, render_message, render_scrollable_list, truncate_string};

const TITLE: &str = " Characters ";

pub fn render_list_view(frame: &mut Frame, area: Rect, list_state: &ListState) {
    if list_state.is_loading {
        render_message(frame, area, TITLE, "Loading characters...", Color::Yellow);
        return;
    }
    if let Some(error) = &list_state.error {
        render_message(frame, area, TITLE, &format!("Error: {}", error), Color::Red);
        return;
    }

    let characters = list_state.visible();
    if characters.is_empty() {
        render_message(frame, area, TITLE, "No characters found.", Color::DarkGray);
        return;
    }

    // Format: " {num}   {name}   {modified}"
    let num_width = calculate_num_width(characters.len());
    let date_width = 12;
    let content_width = area.width.saturating_sub(4) as usize;
    let name_width = content_width.saturating_sub(1 + num_width + 3 + 3 + date_width);

    let items: Vec<ListItem> = characters
        .iter()
        .enumerate()
        .map(|(i, character)| {
            let is_selected = i == list_state.selected_index;
            let name_style = if is_selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:>width$}   ", i + 1, width = num_width),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(truncate_string(&character.name, name_width), name_style),
                Span::styled(
                    format!("   {:>width$}", format_date(character.modified_at()), width = date_width),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let title = format!(" Characters ({}) ", characters.len());
    render_scrollable_list(
        frame,
        area,
        items,
        list_state.selected_index,
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Green)),
    );
}
