//! Detail view: entity + traversal listing fetch, cyclic prev/next

use crate::model::{ActiveView, DetailFetch, ListParams, NAVIGATION_PAGE_SIZE};
use super::AppController;

impl AppController {
    /// Open the detail page for `id`, remembering which view to return to
    pub async fn open_detail(&self, id: u64, origin: ActiveView) {
        tracing::info!(id, ?origin, "Opening character detail");
        let ticket = {
            let model = self.model.lock().await;
            model.set_active_view(ActiveView::Detail).await;
            model.begin_detail_fetch(id, origin).await
        };

        let controller = self.clone();
        tokio::spawn(async move {
            // The listing is refetched on every navigation
            let listing_params = ListParams::with_limit(NAVIGATION_PAGE_SIZE);
            let (character, listing) = futures::join!(
                controller.catalog.get_character_by_id(id),
                controller.catalog.list_characters(&listing_params)
            );
            let popup = character.as_ref().err().map(Self::format_error);

            let fetch = DetailFetch {
                character,
                listing: listing.map(|page| page.results),
            };
            let model = controller.model.lock().await;
            let applied = model.apply_detail_result(ticket, id, fetch).await;
            if let (true, Some(message)) = (applied, popup) {
                model.set_error(message).await;
            }
        });
    }

    /// Move to the previous/next character; does nothing without a navigation listing
    pub async fn navigate_detail(&self, forward: bool) {
        let (target, origin) = {
            let model = self.model.lock().await;
            (model.detail_neighbour(forward).await, model.detail_origin().await)
        };

        match target {
            Some(id) => self.open_detail(id, origin).await,
            None => tracing::debug!(forward, "No navigation target"),
        }
    }

    /// Leave the detail page and remount the view it was opened from
    pub async fn close_detail(&self) {
        let origin = {
            let model = self.model.lock().await;
            model.detail_origin().await
        };

        match origin {
            ActiveView::Gallery => self.mount_gallery_view().await,
            _ => self.mount_list_view().await,
        }
    }
}
