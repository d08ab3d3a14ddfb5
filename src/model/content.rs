//! Per-view state for the list, gallery and detail views

use super::character::Character;
use super::navigator::Navigator;
use super::pipeline::{apply_gallery_filters, derive_list_view};
use super::types::{ActiveView, FilterState, GalleryFilters};

pub const LIST_PAGE_SIZE: u32 = 50;
pub const GALLERY_PAGE_SIZE: u32 = 100;
pub const NAVIGATION_PAGE_SIZE: u32 = 100;

pub const LIST_FETCH_FAILED: &str = "Failed to fetch characters";
pub const DETAIL_FETCH_FAILED: &str = "Failed to fetch character details";
pub const CHARACTER_NOT_FOUND: &str = "Character not found";

/// Search/sort list. `base` is the last applied fetch; what is shown is derived from it.
#[derive(Clone, Debug, Default)]
pub struct ListState {
    pub base: Vec<Character>,
    pub filters: FilterState,
    /// Query value that survived the debounce
    pub debounced_query: String,
    pub selected_index: usize,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ListState {
    pub fn visible(&self) -> Vec<Character> {
        derive_list_view(&self.base, &self.filters)
    }
}

#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub base: Vec<Character>,
    pub filters: GalleryFilters,
    pub selected_index: usize,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl GalleryState {
    pub fn visible(&self) -> Vec<Character> {
        apply_gallery_filters(&self.base, &self.filters)
    }
}

/// Results of the entity + listing fetch pair behind a detail page
#[derive(Debug)]
pub struct DetailFetch<E> {
    pub character: Result<Option<Character>, E>,
    pub listing: Result<Vec<Character>, E>,
}

#[derive(Clone, Debug, Default)]
pub struct DetailState {
    pub id: Option<u64>,
    pub character: Option<Character>,
    /// `None` when the listing fetch failed; the character is still shown
    pub navigator: Option<Navigator>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// View to return to when leaving the detail page
    pub origin: ActiveView,
}

impl DetailState {
    pub fn loading(id: u64, origin: ActiveView) -> Self {
        Self {
            id: Some(id),
            is_loading: true,
            origin,
            ..Default::default()
        }
    }

    /// Apply a finished fetch pair. A failed listing only hides navigation;
    /// a failed or empty entity lookup fails the whole page.
    pub fn resolve<E: std::fmt::Display>(&mut self, id: u64, fetch: DetailFetch<E>) {
        self.is_loading = false;
        self.id = Some(id);

        match fetch.character {
            Err(e) => {
                tracing::error!(id, error = %e, "Character fetch failed");
                self.character = None;
                self.navigator = None;
                self.error = Some(DETAIL_FETCH_FAILED.to_string());
            }
            Ok(None) => {
                tracing::info!(id, "Character not found");
                self.character = None;
                self.navigator = None;
                self.error = Some(CHARACTER_NOT_FOUND.to_string());
            }
            Ok(Some(character)) => {
                self.navigator = match fetch.listing {
                    Ok(listing) => Some(Navigator::locate(&listing, id)),
                    Err(e) => {
                        tracing::warn!(id, error = %e, "Navigation listing unavailable, showing character only");
                        None
                    }
                };
                self.character = Some(character);
                self.error = None;
            }
        }
    }
}
