//! Listener for debounced search queries

use tokio::sync::mpsc::UnboundedReceiver;

use super::AppController;

impl AppController {
    pub(crate) fn start_query_listener(&self, mut query_rx: UnboundedReceiver<String>) {
        let controller = self.clone();
        tracing::debug!("Starting debounced query listener");

        tokio::spawn(async move {
            while let Some(query) = query_rx.recv().await {
                if controller.model.lock().await.should_quit().await {
                    tracing::debug!("Query listener shutting down");
                    break;
                }
                controller.on_query_settled(query).await;
            }
        });
    }
}
