//! List view: initial load, debounced prefix search and sorting

use crate::model::{ActiveView, ListParams, OrderBy, SortKey, SortOrder, LIST_PAGE_SIZE};
use super::AppController;

impl AppController {
    /// Enter the list view with fresh state and load the first page
    pub async fn mount_list_view(&self) {
        tracing::debug!("Mounting list view");
        {
            let model = self.model.lock().await;
            model.set_active_view(ActiveView::List).await;
            model.reset_list().await;
        }
        self.query_debouncer.cancel().await;

        let params = ListParams {
            order_by: Some(OrderBy::default()),
            ..ListParams::with_limit(LIST_PAGE_SIZE)
        };
        self.spawn_list_fetch(params).await;
    }

    /// Restart the debounce timer with the query as it stands after an edit
    pub async fn on_query_edited(&self, query: String) {
        tracing::trace!(query = %query, "Query edited");
        self.query_debouncer.push(query).await;
    }

    /// Called once the query has been stable for the debounce interval
    pub async fn on_query_settled(&self, query: String) {
        let state = {
            let model = self.model.lock().await;
            if model.active_view().await != ActiveView::List {
                return;
            }
            model.set_debounced_query(query.clone()).await;
            model.get_list_state().await
        };

        // An empty query keeps the current base set
        if query.is_empty() {
            return;
        }
        tracing::info!(query = %query, "Searching by name prefix");
        self.spawn_list_fetch(Self::scoped_params(&query, state.filters.sort_by, state.filters.sort_order))
            .await;
    }

    pub async fn toggle_sort(&self, key: SortKey) {
        let state = {
            let model = self.model.lock().await;
            model.toggle_list_sort(key).await
        };
        tracing::debug!(
            sort_by = ?state.filters.sort_by,
            sort_order = ?state.filters.sort_order,
            "Sort changed"
        );

        // Server-side ordering follows the sort while a prefix search is active
        if !state.debounced_query.is_empty() {
            self.spawn_list_fetch(Self::scoped_params(
                &state.debounced_query,
                state.filters.sort_by,
                state.filters.sort_order,
            ))
            .await;
        }
    }

    fn scoped_params(query: &str, key: SortKey, order: SortOrder) -> ListParams {
        ListParams {
            name_starts_with: Some(query.to_string()),
            order_by: Some(OrderBy::new(key, order)),
            ..ListParams::with_limit(LIST_PAGE_SIZE)
        }
    }

    /// Issue a list fetch in the background. Only the latest issued fetch is applied.
    pub(crate) async fn spawn_list_fetch(&self, params: ListParams) {
        let ticket = {
            let model = self.model.lock().await;
            model.begin_list_fetch().await
        };

        let controller = self.clone();
        tokio::spawn(async move {
            let result = controller.catalog.list_characters(&params).await;
            let popup = result.as_ref().err().map(Self::format_error);

            let model = controller.model.lock().await;
            let applied = model
                .apply_list_result(ticket, result.map(|page| page.results))
                .await;
            if let (true, Some(message)) = (applied, popup) {
                model.set_error(message).await;
            }
        });
    }
}
