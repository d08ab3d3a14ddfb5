//! Core type definitions for the application

use std::time::Instant;

/// Which top-level view is shown
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    List,
    Gallery,
    Detail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Modified,
}

impl SortKey {
    /// Field name understood by the catalog's `orderBy`
    pub fn field(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Modified => "modified",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Modified => "Modified",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flip(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// List view filter: free-text query plus sort
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl FilterState {
    /// Same key flips direction, a new key starts ascending
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_by == key {
            self.sort_order = self.sort_order.flip();
        } else {
            self.sort_by = key;
            self.sort_order = SortOrder::Asc;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryPredicate {
    HasComics,
    HasSeries,
    HasEvents,
}

/// Gallery filters, AND-combined when enabled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryFilters {
    pub has_comics: bool,
    pub has_series: bool,
    pub has_events: bool,
}

impl GalleryFilters {
    pub fn toggle(&mut self, predicate: GalleryPredicate) {
        match predicate {
            GalleryPredicate::HasComics => self.has_comics = !self.has_comics,
            GalleryPredicate::HasSeries => self.has_series = !self.has_series,
            GalleryPredicate::HasEvents => self.has_events = !self.has_events,
        }
    }
}

/// UI state shared by all views
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_view: ActiveView,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}
