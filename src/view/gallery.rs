//! Gallery view: thumbnails as links plus resource counts

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{Character, GalleryState};
use super::utils::{render_message, render_scrollable_list, truncate_string};

const TITLE: &str = " Gallery ";

pub fn render_gallery_view(frame: &mut Frame, area: Rect, gallery_state: &GalleryState) {
    if gallery_state.is_loading {
        render_message(frame, area, TITLE, "Loading characters...", Color::Yellow);
        return;
    }
    if let Some(error) = &gallery_state.error {
        render_message(frame, area, TITLE, &format!("Error: {}", error), Color::Red);
        return;
    }

    let characters = gallery_state.visible();
    if characters.is_empty() {
        render_message(
            frame,
            area,
            TITLE,
            "No characters match the selected filters.",
            Color::DarkGray,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let name_width = chunks[0].width.saturating_sub(4 + 20) as usize;
    let items: Vec<ListItem> = characters
        .iter()
        .enumerate()
        .map(|(i, character)| {
            let style = if i == gallery_state.selected_index {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(truncate_string(&character.name, name_width), style),
                Span::styled(
                    format!(
                        " C{:>4} S{:>4} E{:>3}",
                        character.comics.available,
                        character.series.available,
                        character.events.available
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let title = format!(" Gallery ({} of {}) ", characters.len(), gallery_state.base.len());
    render_scrollable_list(
        frame,
        chunks[0],
        items,
        gallery_state.selected_index,
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Green)),
    );

    if let Some(selected) = characters.get(gallery_state.selected_index) {
        render_card(frame, chunks[1], selected);
    }
}

/// Preview card for the highlighted character
fn render_card(frame: &mut Frame, area: Rect, character: &Character) {
    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled(
            character.name.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Comics: ", label), Span::raw(character.comics.available.to_string())]),
        Line::from(vec![Span::styled("Series: ", label), Span::raw(character.series.available.to_string())]),
        Line::from(vec![Span::styled("Events: ", label), Span::raw(character.events.available.to_string())]),
        Line::from(""),
        Line::from(Span::styled("Image", label)),
        Line::from(Span::styled(character.image_url(), Style::default().fg(Color::Cyan))),
    ];

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Preview ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(card, area);
}
