//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use super::character::Character;
use super::content::{
    DetailFetch, DetailState, GalleryState, ListState, LIST_FETCH_FAILED,
};
use super::sequence::{RequestSequence, Ticket};
use super::types::{ActiveView, GalleryPredicate, SortKey, UiState};

const ERROR_DISPLAY_SECS: u64 = 5;

/// Main application model containing all state
pub struct AppModel {
    pub ui_state: Arc<Mutex<UiState>>,
    pub list_state: Arc<Mutex<ListState>>,
    pub gallery_state: Arc<Mutex<GalleryState>>,
    pub detail_state: Arc<Mutex<DetailState>>,
    pub should_quit: Arc<Mutex<bool>>,
    list_requests: RequestSequence,
    gallery_requests: RequestSequence,
    detail_requests: RequestSequence,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            ui_state: Arc::new(Mutex::new(UiState::default())),
            list_state: Arc::new(Mutex::new(ListState::default())),
            gallery_state: Arc::new(Mutex::new(GalleryState::default())),
            detail_state: Arc::new(Mutex::new(DetailState::default())),
            should_quit: Arc::new(Mutex::new(false)),
            list_requests: RequestSequence::new(),
            gallery_requests: RequestSequence::new(),
            detail_requests: RequestSequence::new(),
        }
    }

    // ========================================================================
    // UI State
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn active_view(&self) -> ActiveView {
        self.ui_state.lock().await.active_view
    }

    pub async fn set_active_view(&self, view: ActiveView) {
        let mut state = self.ui_state.lock().await;
        state.active_view = view;
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > ERROR_DISPLAY_SECS {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    // ========================================================================
    // List view
    // ========================================================================

    pub async fn get_list_state(&self) -> ListState {
        self.list_state.lock().await.clone()
    }

    /// Forget everything from a previous visit to the list view
    pub async fn reset_list(&self) {
        *self.list_state.lock().await = ListState::default();
    }

    pub async fn begin_list_fetch(&self) -> Ticket {
        let mut state = self.list_state.lock().await;
        state.is_loading = true;
        state.error = None;
        self.list_requests.issue()
    }

    /// Replace the base set if `ticket` is still the latest list request.
    /// Returns whether the result was applied.
    pub async fn apply_list_result<E: std::fmt::Display>(
        &self,
        ticket: Ticket,
        result: Result<Vec<Character>, E>,
    ) -> bool {
        if !self.list_requests.is_latest(ticket) {
            tracing::debug!(?ticket, "Dropping stale list response");
            return false;
        }

        let mut state = self.list_state.lock().await;
        state.is_loading = false;
        match result {
            Ok(characters) => {
                state.base = characters;
                state.error = None;
                state.selected_index = 0;
            }
            Err(e) => {
                tracing::error!(error = %e, "List fetch failed");
                state.error = Some(LIST_FETCH_FAILED.to_string());
            }
        }
        true
    }

    /// Returns the query after the edit
    pub async fn append_to_query(&self, c: char) -> String {
        let mut state = self.list_state.lock().await;
        state.filters.query.push(c);
        state.selected_index = 0;
        state.filters.query.clone()
    }

    pub async fn backspace_query(&self) -> String {
        let mut state = self.list_state.lock().await;
        state.filters.query.pop();
        state.selected_index = 0;
        state.filters.query.clone()
    }

    pub async fn clear_query(&self) -> String {
        let mut state = self.list_state.lock().await;
        state.filters.query.clear();
        state.selected_index = 0;
        String::new()
    }

    pub async fn set_debounced_query(&self, query: String) {
        self.list_state.lock().await.debounced_query = query;
    }

    pub async fn toggle_list_sort(&self, key: SortKey) -> ListState {
        let mut state = self.list_state.lock().await;
        state.filters.toggle_sort(key);
        state.clone()
    }

    pub async fn list_move_up(&self) {
        let mut state = self.list_state.lock().await;
        state.selected_index = state.selected_index.saturating_sub(1);
    }

    pub async fn list_move_down(&self) {
        let mut state = self.list_state.lock().await;
        let len = state.visible().len();
        if state.selected_index < len.saturating_sub(1) {
            state.selected_index += 1;
        }
    }

    pub async fn selected_list_character(&self) -> Option<u64> {
        let state = self.list_state.lock().await;
        state.visible().get(state.selected_index).map(|c| c.id)
    }

    // ========================================================================
    // Gallery view
    // ========================================================================

    pub async fn get_gallery_state(&self) -> GalleryState {
        self.gallery_state.lock().await.clone()
    }

    pub async fn reset_gallery(&self) {
        *self.gallery_state.lock().await = GalleryState::default();
    }

    pub async fn begin_gallery_fetch(&self) -> Ticket {
        let mut state = self.gallery_state.lock().await;
        state.is_loading = true;
        state.error = None;
        self.gallery_requests.issue()
    }

    pub async fn apply_gallery_result<E: std::fmt::Display>(
        &self,
        ticket: Ticket,
        result: Result<Vec<Character>, E>,
    ) -> bool {
        if !self.gallery_requests.is_latest(ticket) {
            tracing::debug!(?ticket, "Dropping stale gallery response");
            return false;
        }

        let mut state = self.gallery_state.lock().await;
        state.is_loading = false;
        match result {
            Ok(characters) => {
                state.base = characters;
                state.error = None;
                state.selected_index = 0;
            }
            Err(e) => {
                tracing::error!(error = %e, "Gallery fetch failed");
                state.error = Some(LIST_FETCH_FAILED.to_string());
            }
        }
        true
    }

    pub async fn toggle_gallery_filter(&self, predicate: GalleryPredicate) {
        let mut state = self.gallery_state.lock().await;
        state.filters.toggle(predicate);
        state.selected_index = 0;
    }

    pub async fn gallery_move_up(&self) {
        let mut state = self.gallery_state.lock().await;
        state.selected_index = state.selected_index.saturating_sub(1);
    }

    pub async fn gallery_move_down(&self) {
        let mut state = self.gallery_state.lock().await;
        let len = state.visible().len();
        if state.selected_index < len.saturating_sub(1) {
            state.selected_index += 1;
        }
    }

    pub async fn selected_gallery_character(&self) -> Option<u64> {
        let state = self.gallery_state.lock().await;
        state.visible().get(state.selected_index).map(|c| c.id)
    }

    // ========================================================================
    // Detail view
    // ========================================================================

    pub async fn get_detail_state(&self) -> DetailState {
        self.detail_state.lock().await.clone()
    }

    /// Start loading a detail page; the origin view is kept across prev/next
    pub async fn begin_detail_fetch(&self, id: u64, origin: ActiveView) -> Ticket {
        let mut state = self.detail_state.lock().await;
        *state = DetailState::loading(id, origin);
        self.detail_requests.issue()
    }

    pub async fn apply_detail_result<E: std::fmt::Display>(
        &self,
        ticket: Ticket,
        id: u64,
        fetch: DetailFetch<E>,
    ) -> bool {
        if !self.detail_requests.is_latest(ticket) {
            tracing::debug!(?ticket, id, "Dropping stale detail response");
            return false;
        }
        self.detail_state.lock().await.resolve(id, fetch);
        true
    }

    pub async fn detail_origin(&self) -> ActiveView {
        self.detail_state.lock().await.origin
    }

    /// Id of the previous or next character in the traversal listing
    pub async fn detail_neighbour(&self, forward: bool) -> Option<u64> {
        let state = self.detail_state.lock().await;
        let navigator = state.navigator.as_ref()?;
        let entry = if forward { navigator.next() } else { navigator.previous() };
        entry.map(|e| e.id)
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
