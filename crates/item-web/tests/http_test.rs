use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use item_store::{ItemStore, StoreClient};
use item_web::lifecycle::CatalogSystem;
use item_web::pages::Pages;
use item_web::routes::{router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

/// Router over a fresh, empty store.
fn empty_app() -> (Router, StoreClient) {
    let (actor, store) = ItemStore::new(32);
    tokio::spawn(actor.run());
    let app = router(AppState {
        store: store.clone(),
        pages: Arc::new(Pages::new().unwrap()),
    });
    (app, store)
}

/// Router over a store seeded the way the process seeds at startup.
async fn seeded_app() -> (Router, StoreClient) {
    let system = CatalogSystem::start();
    system.seed().await.unwrap();
    let store = system.store.clone();
    let app = router(AppState {
        store: store.clone(),
        pages: Arc::new(Pages::new().unwrap()),
    });
    (app, store)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_list_shows_seeded_items() {
    let (app, _store) = seeded_app().await;

    let response = app.oneshot(get("/items")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("itemA"));
    assert!(body.contains("itemB"));
    assert!(body.contains("/items/add"));
}

#[tokio::test]
async fn test_add_form_renders() {
    let (app, _store) = empty_app();

    let response = app.oneshot(get("/items/add")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(r#"form action="/items/add" method="post""#));
    assert!(body.contains(r#"name="price""#));
}

#[tokio::test]
async fn test_create_follows_post_redirect_get() {
    let (app, store) = empty_app();

    // POST the create form
    let response = app
        .clone()
        .oneshot(post_form("/items/add", "name=itemA&price=10000&quantity=10"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(location, "/items/1?status=true");

    // Following the redirect renders the detail page with the banner
    let response = app.clone().oneshot(get(&location)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("itemA"));
    assert!(body.contains("Item saved."));

    // Reloading the landing page re-issues only the GET: same item, no
    // duplicate submission
    let response = app.clone().oneshot(get(&location)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_detail_without_status_flag_has_no_banner() {
    let (app, _store) = seeded_app().await;

    let response = app.oneshot(get("/items/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(!body.contains("Item saved."));
}

#[tokio::test]
async fn test_detail_unknown_id_renders_404() {
    let (app, _store) = seeded_app().await;

    let response = app.oneshot(get("/items/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_text(response).await;
    assert!(body.contains("No item with id 999"));
}

#[tokio::test]
async fn test_edit_flow_updates_and_redirects_without_status_flag() {
    let (app, store) = seeded_app().await;

    // Edit form is pre-filled with current values
    let response = app.clone().oneshot(get("/items/1/edit")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(r#"value="itemA""#));
    assert!(body.contains(r#"value="10000""#));

    // Applying the edit redirects straight to the detail page
    let response = app
        .clone()
        .oneshot(post_form(
            "/items/1/edit",
            "name=itemA-renamed&price=9999&quantity=5",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(location, "/items/1");

    // The update landed and the id is unchanged
    let item = store
        .find_by_id(item_store::ItemId::from(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(item.name, "itemA-renamed");
    assert_eq!(item.price, 9999);
    assert_eq!(item.quantity, 5);

    // No banner on an edit landing page
    let response = app.clone().oneshot(get("/items/1")).await.unwrap();
    let body = body_text(response).await;
    assert!(body.contains("itemA-renamed"));
    assert!(!body.contains("Item saved."));
}

#[tokio::test]
async fn test_edit_unknown_id_renders_404() {
    let (app, _store) = seeded_app().await;

    let response = app
        .oneshot(post_form("/items/999/edit", "name=ghost&price=1&quantity=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_form_is_rejected_before_the_store() {
    let (app, store) = empty_app();

    // Non-numeric price is a decode failure, not a store concern
    let response = app
        .oneshot(post_form("/items/add", "name=bad&price=abc&quantity=1"))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
    assert!(store.find_all().await.unwrap().is_empty());
}
