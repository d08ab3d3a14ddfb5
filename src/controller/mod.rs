//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and view, and issues catalog fetches.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `list`: List view mount, debounced search and sorting
//! - `gallery`: Gallery view mount
//! - `detail`: Detail view fetches and prev/next navigation
//! - `query_events`: Listener applying debounced search queries

mod input;
mod list;
mod gallery;
mod detail;
mod query_events;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{AppModel, CatalogClient, CatalogError, Debouncer, QUERY_DEBOUNCE};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) catalog: CatalogClient,
    query_debouncer: Arc<Debouncer<String>>,
}

impl AppController {
    /// Must be called inside a tokio runtime; starts the debounced query listener
    pub fn new(model: Arc<Mutex<AppModel>>, catalog: CatalogClient) -> Self {
        let (debouncer, query_rx) = Debouncer::new(QUERY_DEBOUNCE);
        let controller = Self {
            model,
            catalog,
            query_debouncer: Arc::new(debouncer),
        };
        controller.start_query_listener(query_rx);
        controller
    }

    pub(crate) fn format_error(error: &CatalogError) -> String {
        match error {
            CatalogError::Status { status } if status.as_u16() == 401 || status.as_u16() == 409 => {
                "Catalog rejected the API keys. Check public_key/private_key.".to_string()
            }
            CatalogError::Status { status } if status.as_u16() == 429 => {
                "Rate limited. Please wait a moment.".to_string()
            }
            CatalogError::Network(e) if e.is_timeout() => {
                "Catalog request timed out.".to_string()
            }
            other => format!("Error: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::auth::Credentials;
    use crate::model::{ActiveView, Anchor};

    fn page(results: serde_json::Value) -> serde_json::Value {
        json!({ "code": 200, "status": "Ok", "data": { "total": 3, "results": results } })
    }

    fn controller(server: &MockServer) -> AppController {
        let catalog = CatalogClient::with_timeout(
            &server.base_url(),
            Credentials::new("public", "private"),
            Duration::from_secs(5),
        )
        .unwrap();
        AppController::new(Arc::new(Mutex::new(AppModel::new())), catalog)
    }

    /// Poll the model until `check` holds or two seconds pass
    async fn wait_for<F>(controller: &AppController, check: F) -> bool
    where
        F: Fn(&AppModelSnapshot) -> bool,
    {
        for _ in 0..100 {
            let snapshot = AppModelSnapshot::take(controller).await;
            if check(&snapshot) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        false
    }

    struct AppModelSnapshot {
        list: crate::model::ListState,
        gallery: crate::model::GalleryState,
        detail: crate::model::DetailState,
        view: ActiveView,
    }

    impl AppModelSnapshot {
        async fn take(controller: &AppController) -> Self {
            let model = controller.model.lock().await;
            Self {
                list: model.get_list_state().await,
                gallery: model.get_gallery_state().await,
                detail: model.get_detail_state().await,
                view: model.active_view().await,
            }
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn list_mount_loads_first_page() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.path("/characters").query_param("limit", "50").query_param("orderBy", "name");
            then.status(200).json_body(page(json!([
                { "id": 1, "name": "Spider-Man" },
                { "id": 2, "name": "Hulk" }
            ])));
        });

        let controller = controller(&server);
        controller.mount_list_view().await;

        assert!(wait_for(&controller, |s| !s.list.is_loading && s.list.base.len() == 2).await);
        mock.assert();
    }

    #[tokio::test]
    async fn settled_query_refetches_with_prefix() {
        let server = MockServer::start_async().await;
        // Registered first so scoped requests never fall through to the unscoped mock
        let intermediate = server.mock(|when, then| {
            when.path("/characters").query_param("nameStartsWith", "s");
            then.status(200).json_body(page(json!([{ "id": 3, "name": "Storm" }])));
        });
        let scoped = server.mock(|when, then| {
            when.path("/characters").query_param("nameStartsWith", "sp");
            then.status(200).json_body(page(json!([{ "id": 1, "name": "Spider-Man" }])));
        });
        server.mock(|when, then| {
            when.path("/characters").query_param("limit", "50");
            then.status(200).json_body(page(json!([{ "id": 2, "name": "Hulk" }])));
        });

        let controller = controller(&server);
        controller.mount_list_view().await;
        assert!(wait_for(&controller, |s| !s.list.is_loading).await);

        controller.handle_key_event(press(KeyCode::Char('s'))).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char('p'))).await.unwrap();

        assert!(wait_for(&controller, |s| s.list.base.iter().any(|c| c.name == "Spider-Man")).await);
        let snapshot = AppModelSnapshot::take(&controller).await;
        assert_eq!(snapshot.list.debounced_query, "sp");
        assert_eq!(snapshot.list.visible().len(), 1);
        scoped.assert_hits(1);
        intermediate.assert_hits(0);
    }

    #[tokio::test]
    async fn sort_change_refetches_active_search() {
        let server = MockServer::start_async().await;
        let descending = server.mock(|when, then| {
            when.path("/characters")
                .query_param("nameStartsWith", "sp")
                .query_param("orderBy", "-name");
            then.status(200).json_body(page(json!([
                { "id": 4, "name": "Spider-Woman" },
                { "id": 1, "name": "Spider-Man" }
            ])));
        });
        let ascending = server.mock(|when, then| {
            when.path("/characters")
                .query_param("nameStartsWith", "sp")
                .query_param("orderBy", "name");
            then.status(200).json_body(page(json!([{ "id": 1, "name": "Spider-Man" }])));
        });
        server.mock(|when, then| {
            when.path("/characters").query_param("limit", "50");
            then.status(200).json_body(page(json!([{ "id": 2, "name": "Hulk" }])));
        });

        let controller = controller(&server);
        controller.mount_list_view().await;
        assert!(wait_for(&controller, |s| !s.list.is_loading).await);

        controller.handle_key_event(press(KeyCode::Char('s'))).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char('p'))).await.unwrap();
        assert!(wait_for(&controller, |s| !s.list.is_loading && s.list.base.iter().any(|c| c.name == "Spider-Man")).await);

        // Same key again flips name ordering to descending
        controller.handle_key_event(press(KeyCode::F(2))).await.unwrap();
        assert!(wait_for(&controller, |s| s.list.base.iter().any(|c| c.name == "Spider-Woman")).await);

        ascending.assert_hits(1);
        descending.assert_hits(1);
    }

    #[tokio::test]
    async fn remount_cancels_pending_search() {
        let server = MockServer::start_async().await;
        let scoped = server.mock(|when, then| {
            when.path("/characters").query_param("nameStartsWith", "s");
            then.status(200).json_body(page(json!([{ "id": 3, "name": "Storm" }])));
        });
        let unscoped = server.mock(|when, then| {
            when.path("/characters").query_param("limit", "50");
            then.status(200).json_body(page(json!([{ "id": 2, "name": "Hulk" }])));
        });

        let controller = controller(&server);
        controller.mount_list_view().await;
        assert!(wait_for(&controller, |s| !s.list.is_loading).await);

        controller.handle_key_event(press(KeyCode::Char('s'))).await.unwrap();
        controller.mount_list_view().await;

        // Well past the debounce interval
        tokio::time::sleep(Duration::from_millis(900)).await;

        let snapshot = AppModelSnapshot::take(&controller).await;
        assert_eq!(snapshot.list.debounced_query, "");
        assert_eq!(snapshot.list.filters.query, "");
        scoped.assert_hits(0);
        unscoped.assert_hits(2);
    }

    #[tokio::test]
    async fn list_failure_sets_view_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.path("/characters");
            then.status(500);
        });

        let controller = controller(&server);
        controller.mount_list_view().await;

        assert!(wait_for(&controller, |s| s.list.error.is_some()).await);
        assert!(controller.model.lock().await.has_error().await);
    }

    #[tokio::test]
    async fn gallery_mount_fetches_hundred() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.path("/characters").query_param("limit", "100");
            then.status(200).json_body(page(json!([{ "id": 1, "name": "Thor" }])));
        });

        let controller = controller(&server);
        controller.mount_gallery_view().await;

        assert!(wait_for(&controller, |s| s.view == ActiveView::Gallery && s.gallery.base.len() == 1).await);
        mock.assert();
    }

    #[tokio::test]
    async fn detail_survives_listing_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.path("/characters/7");
            then.status(200).json_body(page(json!([{ "id": 7, "name": "Storm" }])));
        });
        server.mock(|when, then| {
            when.path("/characters");
            then.status(503);
        });

        let controller = controller(&server);
        controller.open_detail(7, ActiveView::List).await;

        assert!(wait_for(&controller, |s| !s.detail.is_loading).await);
        let snapshot = AppModelSnapshot::take(&controller).await;
        assert_eq!(snapshot.view, ActiveView::Detail);
        assert_eq!(snapshot.detail.character.map(|c| c.name), Some("Storm".to_string()));
        assert!(snapshot.detail.navigator.is_none());
        assert!(snapshot.detail.error.is_none());
    }

    #[tokio::test]
    async fn detail_next_wraps_around_listing() {
        let server = MockServer::start_async().await;
        for (id, name) in [(1, "A"), (2, "B"), (3, "C")] {
            server.mock(|when, then| {
                when.path(format!("/characters/{id}"));
                then.status(200).json_body(page(json!([{ "id": id, "name": name }])));
            });
        }
        server.mock(|when, then| {
            when.path("/characters").query_param("limit", "100");
            then.status(200).json_body(page(json!([
                { "id": 1, "name": "A" },
                { "id": 2, "name": "B" },
                { "id": 3, "name": "C" }
            ])));
        });

        let controller = controller(&server);
        controller.open_detail(3, ActiveView::Gallery).await;
        assert!(wait_for(&controller, |s| s.detail.navigator.is_some()).await);

        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        assert!(wait_for(&controller, |s| {
            s.detail.character.as_ref().map(|c| c.id) == Some(1)
                && s.detail.navigator.as_ref().map(|n| n.anchor()) == Some(Anchor::Found(0))
        })
        .await);
        assert_eq!(controller.model.lock().await.detail_origin().await, ActiveView::Gallery);
    }

    #[tokio::test]
    async fn format_error_explains_bad_keys() {
        let err = CatalogError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
        };
        assert!(AppController::format_error(&err).contains("API keys"));
    }
}
