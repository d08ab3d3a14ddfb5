//! Character detail page

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{Character, DetailState, ResourceList};
use super::utils::{format_date, render_message};

const TITLE: &str = " Character ";
const PREVIEW_ITEMS: usize = 3;
const PLACEHOLDER_SIZE: u32 = 400;

pub fn render_detail_view(frame: &mut Frame, area: Rect, detail_state: &DetailState) {
    if detail_state.is_loading {
        render_message(frame, area, TITLE, "Loading character...", Color::Yellow);
        return;
    }

    let character = match (&detail_state.character, &detail_state.error) {
        (Some(character), _) => character,
        (None, Some(error)) => {
            render_message(frame, area, TITLE, &format!("Error: {}", error), Color::Red);
            return;
        }
        (None, None) => {
            render_message(frame, area, TITLE, "Character not found", Color::DarkGray);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_overview(frame, chunks[0], character);
    render_resources(frame, chunks[1], character);
}

fn render_overview(frame: &mut Frame, area: Rect, character: &Character) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            character.name.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(character.display_description().to_string()),
        Line::from(""),
        Line::from(vec![Span::styled("ID: ", label), Span::raw(character.id.to_string())]),
        Line::from(vec![
            Span::styled("Last modified: ", label),
            Span::raw(format_date(character.modified_at())),
        ]),
        Line::from(""),
        Line::from(Span::styled("Image", label)),
        Line::from(Span::styled(character.image_url(), Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(
            character.placeholder_image_url(PLACEHOLDER_SIZE),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if !character.urls.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Links", label)));
        for url in &character.urls {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", url.label()), Style::default().fg(Color::Green)),
                Span::styled(url.url.clone(), Style::default().fg(Color::Cyan)),
            ]));
        }
    }

    let overview = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(TITLE)
                .padding(Padding::horizontal(1))
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(overview, area);
}

fn render_resources(frame: &mut Frame, area: Rect, character: &Character) {
    let mut lines = Vec::new();
    for (title, resources) in [
        ("Comics", &character.comics),
        ("Series", &character.series),
        ("Stories", &character.stories),
        ("Events", &character.events),
    ] {
        lines.extend(resource_lines(title, resources));
        lines.push(Line::from(""));
    }

    let stats = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Appearances ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(stats, area);
}

fn resource_lines<'a>(title: &'a str, resources: &'a ResourceList) -> Vec<Line<'a>> {
    let (names, more) = resources.preview(PREVIEW_ITEMS);
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{}: ", title), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw(resources.available.to_string()),
    ])];
    lines.extend(names.into_iter().map(|name| Line::from(format!("  • {}", name))));
    if more > 0 {
        lines.push(Line::from(Span::styled(
            format!("  ...and {} more", more),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}
