//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Frame structure (view tabs, control bar, key hints)
//! - `list`: Search/sort list view
//! - `gallery`: Filterable gallery view
//! - `detail`: Character detail page
//! - `overlays`: Modal overlays (error, help)

mod utils;
mod layout;
mod list;
mod gallery;
mod detail;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{ActiveView, DetailState, GalleryState, ListState, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        ui_state: &UiState,
        list_state: &ListState,
        gallery_state: &GalleryState,
        detail_state: &DetailState,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // View tabs
                Constraint::Length(3), // Search box / filters / position
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        layout::render_tabs(frame, chunks[0], ui_state.active_view);

        match ui_state.active_view {
            ActiveView::List => {
                layout::render_search_bar(frame, chunks[1], list_state);
                list::render_list_view(frame, chunks[2], list_state);
            }
            ActiveView::Gallery => {
                layout::render_filter_bar(frame, chunks[1], gallery_state);
                gallery::render_gallery_view(frame, chunks[2], gallery_state);
            }
            ActiveView::Detail => {
                layout::render_position_bar(frame, chunks[1], detail_state);
                detail::render_detail_view(frame, chunks[2], detail_state);
            }
        }

        layout::render_key_hints(frame, chunks[3], ui_state.active_view);

        // Error notification overlay (if there's an error)
        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::model::fixtures::{character, with_counts};
    use crate::model::{GalleryPredicate, Navigator};

    fn render(ui: &UiState, list: &ListState, gallery: &GalleryState, detail: &DetailState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|frame| AppView::render(frame, ui, list, gallery, detail))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn ui(view: ActiveView) -> UiState {
        UiState {
            active_view: view,
            ..Default::default()
        }
    }

    #[test]
    fn list_shows_loading_then_results() {
        let mut list = ListState {
            is_loading: true,
            ..Default::default()
        };
        let screen = render(&ui(ActiveView::List), &list, &GalleryState::default(), &DetailState::default());
        assert!(screen.contains("Loading characters..."));

        list.is_loading = false;
        list.base = vec![character(1, "Hulk"), character(2, "Iron Man")];
        let screen = render(&ui(ActiveView::List), &list, &GalleryState::default(), &DetailState::default());
        assert!(screen.contains("Hulk"));
        assert!(screen.contains("Iron Man"));
    }

    #[test]
    fn list_error_and_empty_messages() {
        let list = ListState {
            error: Some("Failed to fetch characters".to_string()),
            ..Default::default()
        };
        let screen = render(&ui(ActiveView::List), &list, &GalleryState::default(), &DetailState::default());
        assert!(screen.contains("Error: Failed to fetch characters"));

        let screen = render(&ui(ActiveView::List), &ListState::default(), &GalleryState::default(), &DetailState::default());
        assert!(screen.contains("No characters found."));
    }

    #[test]
    fn gallery_reports_no_filter_matches() {
        let mut gallery = GalleryState {
            base: vec![with_counts(character(1, "Hulk"), 0, 2, 0)],
            ..Default::default()
        };
        gallery.filters.toggle(GalleryPredicate::HasComics);
        let screen = render(&ui(ActiveView::Gallery), &ListState::default(), &gallery, &DetailState::default());
        assert!(screen.contains("No characters match the selected filters."));
    }

    #[test]
    fn detail_shows_position_only_with_navigator() {
        let listing = vec![character(1, "A"), character(2, "B"), character(3, "C")];
        let mut detail = DetailState {
            id: Some(2),
            character: Some(character(2, "B")),
            navigator: Some(Navigator::locate(&listing, 2)),
            ..Default::default()
        };
        let screen = render(&ui(ActiveView::Detail), &ListState::default(), &GalleryState::default(), &detail);
        assert!(screen.contains("2 of 3"));

        detail.navigator = None;
        let screen = render(&ui(ActiveView::Detail), &ListState::default(), &GalleryState::default(), &detail);
        assert!(!screen.contains("of 3"));
        assert!(screen.contains("Navigation unavailable"));
    }

    #[test]
    fn detail_marks_character_missing_from_listing() {
        let listing = vec![character(1, "A"), character(2, "B")];
        let detail = DetailState {
            id: Some(9),
            character: Some(character(9, "Z")),
            navigator: Some(Navigator::locate(&listing, 9)),
            ..Default::default()
        };
        let screen = render(&ui(ActiveView::Detail), &ListState::default(), &GalleryState::default(), &detail);
        assert!(screen.contains("? of 2 (not in listing)"));
    }

    #[test]
    fn long_error_on_tiny_terminal_does_not_panic() {
        let ui = UiState {
            error_message: Some("x".repeat(200)),
            ..Default::default()
        };
        for (width, height) in [(3, 3), (8, 10)] {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal
                .draw(|frame| {
                    AppView::render(frame, &ui, &ListState::default(), &GalleryState::default(), &DetailState::default())
                })
                .unwrap();
        }
    }

    #[test]
    fn help_scopes_letter_keys_to_gallery_and_detail() {
        let ui = UiState {
            show_help_popup: true,
            ..Default::default()
        };
        let screen = render(&ui, &ListState::default(), &GalleryState::default(), &DetailState::default());
        assert!(screen.contains("Quit (gallery, detail)"));
        assert!(screen.contains("Toggle this help (gallery, detail)"));
    }

    #[test]
    fn error_popup_overlays_any_view() {
        let ui = UiState {
            error_message: Some("Rate limited".to_string()),
            ..Default::default()
        };
        let screen = render(&ui, &ListState::default(), &GalleryState::default(), &DetailState::default());
        assert!(screen.contains("Rate limited"));
    }
}
