//! Layout rendering (view tabs, control bar, key hints)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveView, Anchor, DetailState, FilterState, GalleryState, ListState, SortKey};

pub fn render_tabs(frame: &mut Frame, area: Rect, active_view: ActiveView) {
    let selected = match active_view {
        ActiveView::List => 0,
        ActiveView::Gallery => 1,
        ActiveView::Detail => 2,
    };

    let tabs = Tabs::new(vec![" Characters ", " Gallery ", " Detail "])
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Marvel ")
                .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(tabs, area);
}

/// "Name ↑" for the active sort key, plain label otherwise
fn sort_label(filters: &FilterState, key: SortKey) -> String {
    if filters.sort_by == key {
        format!("{} {}", key.label(), filters.sort_order.arrow())
    } else {
        key.label().to_string()
    }
}

pub fn render_search_bar(frame: &mut Frame, area: Rect, list_state: &ListState) {
    let filters = &list_state.filters;
    let search_text = if filters.query.is_empty() {
        Span::styled("Type to search by name...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(filters.query.as_str(), Style::default().fg(Color::Green))
    };

    let title = format!(
        " Search | F2 {} | F3 {} ",
        sort_label(filters, SortKey::Name),
        sort_label(filters, SortKey::Modified)
    );

    let search = Paragraph::new(Line::from(search_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(search, area);
}

pub fn render_filter_bar(frame: &mut Frame, area: Rect, gallery_state: &GalleryState) {
    let filters = &gallery_state.filters;
    let toggle = |key: &'static str, label: &'static str, on: bool| {
        let style = if on {
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let mark = if on { "x" } else { " " };
        vec![
            Span::styled(format!("[{}] {} ({})", mark, label, key), style),
            Span::raw("   "),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(toggle("c", "Has comics", filters.has_comics));
    spans.extend(toggle("s", "Has series", filters.has_series));
    spans.extend(toggle("e", "Has events", filters.has_events));

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filters ")
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(bar, area);
}

pub fn render_position_bar(frame: &mut Frame, area: Rect, detail_state: &DetailState) {
    let line = match &detail_state.navigator {
        Some(navigator) if !navigator.is_empty() => {
            let mut spans = Vec::new();
            if let Some(prev) = navigator.previous() {
                spans.push(Span::styled(
                    format!("← {}", prev.name),
                    Style::default().fg(Color::Cyan),
                ));
            }
            let position = match navigator.anchor() {
                Anchor::Found(_) => Span::styled(
                    format!("   {}   ", navigator.position_label()),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Anchor::Fallback => Span::styled(
                    format!("   {} (not in listing)   ", navigator.position_label()),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                ),
            };
            spans.push(position);
            if let Some(next) = navigator.next() {
                spans.push(Span::styled(
                    format!("{} →", next.name),
                    Style::default().fg(Color::Cyan),
                ));
            }
            Line::from(spans)
        }
        _ if detail_state.is_loading => Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        )),
        _ => Line::from(Span::styled(
            "Navigation unavailable",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Browse ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(bar, area);
}

pub fn render_key_hints(frame: &mut Frame, area: Rect, active_view: ActiveView) {
    let hints: &[(&str, &str)] = match active_view {
        ActiveView::List => &[
            ("↑↓", "select"),
            ("Enter", "open"),
            ("F2/F3", "sort"),
            ("Esc", "clear"),
            ("Tab", "gallery"),
            ("F1", "help"),
        ],
        ActiveView::Gallery => &[
            ("↑↓", "select"),
            ("Enter", "open"),
            ("c/s/e", "filters"),
            ("Tab", "list"),
            ("?", "help"),
            ("q", "quit"),
        ],
        ActiveView::Detail => &[
            ("←/p", "previous"),
            ("→/n", "next"),
            ("Esc", "back"),
            ("?", "help"),
            ("q", "quit"),
        ],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(
                    format!(" {} ", key),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{}  ", desc), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
