//! Gallery view: one unfiltered fetch, filtering happens client-side

use crate::model::{ActiveView, ListParams, GALLERY_PAGE_SIZE};
use super::AppController;

impl AppController {
    pub async fn mount_gallery_view(&self) {
        tracing::debug!("Mounting gallery view");
        let ticket = {
            let model = self.model.lock().await;
            model.set_active_view(ActiveView::Gallery).await;
            model.reset_gallery().await;
            model.begin_gallery_fetch().await
        };

        let controller = self.clone();
        tokio::spawn(async move {
            let result = controller
                .catalog
                .list_characters(&ListParams::with_limit(GALLERY_PAGE_SIZE))
                .await;
            let popup = result.as_ref().err().map(Self::format_error);

            let model = controller.model.lock().await;
            let applied = model
                .apply_gallery_result(ticket, result.map(|page| page.results))
                .await;
            if let (true, Some(message)) = (applied, popup) {
                model.set_error(message).await;
            }
        });
    }
}
