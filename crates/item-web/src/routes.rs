//! # Routes & Handlers
//!
//! The request-handling core: each handler receives already-decoded input
//! (path parameters, query flags, form payloads), makes exactly one store
//! call, and answers with either a rendered page or a redirect.
//!
//! ## Post/Redirect/Get
//!
//! Both POST handlers respond with a redirect (303) instead of a rendered
//! body. A client reloading the page it lands on re-issues only the GET,
//! so a reload can never replay the submission — creating an item twice
//! requires submitting the form twice. The create redirect additionally
//! carries `status=true`, which the detail page turns into a one-time
//! "saved" banner.
//!
//! ## Unknown ids
//!
//! Every lookup result is checked. Detail and edit-form render the 404
//! page on a miss, and `ItemNotFound` from an update maps to the same
//! page. Malformed form fields never get this far: the `Form` extractor
//! rejects them upstream with a client error.

use crate::error::PageError;
use crate::pages::Pages;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use item_store::{ItemDraft, ItemId, ItemPatch, StoreClient, StoreError};
use serde::Deserialize;
use tracing::{debug, info};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: StoreClient,
    pub pages: std::sync::Arc<Pages>,
}

/// Builds the application router over the full route surface.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/items", get(list_items))
        .route("/items/add", get(add_form).post(add_item))
        .route("/items/{item_id}", get(item_detail))
        .route("/items/{item_id}/edit", get(edit_form).post(edit_item))
        .with_state(state)
}

/// Query flag appended by the create redirect.
#[derive(Debug, Deserialize)]
struct StatusQuery {
    status: Option<bool>,
}

/// GET /items
async fn list_items(State(state): State<AppState>) -> Result<Response, PageError> {
    let items = state.store.find_all().await?;
    debug!(count = items.len(), "Rendering item list");
    Ok(Html(state.pages.items_list(&items)?).into_response())
}

/// GET /items/{item_id}
async fn item_detail(
    State(state): State<AppState>,
    Path(item_id): Path<u64>,
    Query(query): Query<StatusQuery>,
) -> Result<Response, PageError> {
    let id = ItemId::from(item_id);
    match state.store.find_by_id(id).await? {
        Some(item) => {
            let just_saved = query.status.unwrap_or(false);
            Ok(Html(state.pages.item_detail(&item, just_saved)?).into_response())
        }
        None => not_found_page(&state, id),
    }
}

/// GET /items/add
async fn add_form(State(state): State<AppState>) -> Result<Response, PageError> {
    Ok(Html(state.pages.add_form()?).into_response())
}

/// POST /items/add
///
/// Saves the draft, then redirects to the new item's detail page with the
/// `status=true` flag instead of rendering a body.
async fn add_item(
    State(state): State<AppState>,
    Form(draft): Form<ItemDraft>,
) -> Result<Response, PageError> {
    let item = state.store.save(draft).await?;
    info!(id = %item.id, "Item created, redirecting");
    Ok(Redirect::to(&format!("/items/{}?status=true", item.id)).into_response())
}

/// GET /items/{item_id}/edit
async fn edit_form(
    State(state): State<AppState>,
    Path(item_id): Path<u64>,
) -> Result<Response, PageError> {
    let id = ItemId::from(item_id);
    match state.store.find_by_id(id).await? {
        Some(item) => Ok(Html(state.pages.edit_form(&item)?).into_response()),
        None => not_found_page(&state, id),
    }
}

/// POST /items/{item_id}/edit
///
/// Applies the patch, then redirects back to the detail page (no status
/// flag; the banner is reserved for freshly created items).
async fn edit_item(
    State(state): State<AppState>,
    Path(item_id): Path<u64>,
    Form(patch): Form<ItemPatch>,
) -> Result<Response, PageError> {
    let id = ItemId::from(item_id);
    match state.store.update(id, patch).await {
        Ok(item) => {
            info!(id = %item.id, "Item updated, redirecting");
            Ok(Redirect::to(&format!("/items/{}", item.id)).into_response())
        }
        Err(StoreError::ItemNotFound(id)) => not_found_page(&state, id),
        Err(e) => Err(e.into()),
    }
}

/// Renders the 404 page for an id the store does not know.
fn not_found_page(state: &AppState, id: ItemId) -> Result<Response, PageError> {
    debug!(%id, "Unknown item id");
    Ok((StatusCode::NOT_FOUND, Html(state.pages.not_found(id)?)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use item_store::mock::{create_mock_client, expect_get, expect_update};
    use item_store::Item;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn mock_state(store: StoreClient) -> AppState {
        AppState {
            store,
            pages: Arc::new(Pages::new().unwrap()),
        }
    }

    #[tokio::test]
    async fn test_detail_get_only_reads_the_store() {
        let (client, mut receiver) = create_mock_client(10);
        let app = router(mock_state(client));

        // The GET a client re-issues after the create redirect
        let task = tokio::spawn(async move {
            app.oneshot(
                Request::builder()
                    .uri("/items/1?status=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
        });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, ItemId::from(1));
        responder
            .send(Ok(Some(Item {
                id,
                name: "itemA".to_string(),
                price: 10000,
                quantity: 10,
            })))
            .unwrap();

        let response = task.await.unwrap().unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Reloading the landing page sent a single Get and nothing else:
        // no Save ever reaches the store from this path.
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_edit_post_maps_not_found_to_404() {
        let (client, mut receiver) = create_mock_client(10);
        let app = router(mock_state(client));

        let task = tokio::spawn(async move {
            app.oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items/42/edit")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from("name=ghost&price=1&quantity=1"))
                    .unwrap(),
            )
            .await
        });

        let (id, patch, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, ItemId::from(42));
        assert_eq!(patch.name, "ghost");
        responder.send(Err(StoreError::ItemNotFound(id))).unwrap();

        let response = task.await.unwrap().unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
