//! Handlers backed by a scripted store: every store-side failure must surface as the
//! operation's opaque 500.

use actor_store::mock::MockClient;
use actor_store::FrameworkError;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use catalog_service::api;
use catalog_service::clients::ProductClient;
use catalog_service::model::{Product, ProductFields, ProductId};
use catalog_service::product_actor::{self, ProductError};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(mock: &MockClient<Product>) -> Router {
    api::router(ProductClient::new(mock.client()))
}

async fn call(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn cake() -> Value {
    json!({
        "name": "Red Velvet Cake",
        "description": "Velvety red cake with cream cheese frosting.",
        "price": 22.99,
        "stock": 20,
        "imageUrl": "https://example.com/images/red-velvet-cake.jpg"
    })
}

fn assert_opaque(status: StatusCode, body: &Value, message: &str) {
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], message);
    assert!(body["error"].is_string(), "missing error detail: {body}");
}

#[tokio::test]
async fn test_count_failure_fails_listing() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_count().return_err(FrameworkError::ActorClosed);

    let (status, body) = call(app(&mock), Method::GET, "/products", None).await;
    assert_opaque(status, &body, "Error fetching products");
    assert_eq!(body["error"], "Store error: Actor closed");
    mock.verify();
}

#[tokio::test]
async fn test_page_fetch_failure_fails_listing() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_count().return_ok(3);
    mock.expect_find_many().return_err(FrameworkError::ActorDropped);

    let (status, body) = call(app(&mock), Method::GET, "/products?page=2", None).await;
    assert_opaque(status, &body, "Error fetching products");
    mock.verify();
}

#[tokio::test]
async fn test_store_rejection_fails_create() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_create()
        .return_err(FrameworkError::entity(ProductError::StoreError(
            "duplicate key".to_string(),
        )));

    let (status, body) = call(app(&mock), Method::POST, "/products", Some(cake())).await;
    assert_opaque(status, &body, "Error creating product");
    mock.verify();
}

#[tokio::test]
async fn test_create_returns_store_record() {
    let mut mock = MockClient::<Product>::new();
    let stored = Product::new(
        ProductId(42),
        ProductFields::new(
            "Red Velvet Cake",
            "Velvety red cake with cream cheese frosting.",
            22.99,
            20,
            "https://example.com/images/red-velvet-cake.jpg",
        ),
    );
    mock.expect_create().return_ok(stored);

    let (status, body) = call(app(&mock), Method::POST, "/products", Some(cake())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 42);
    mock.verify();
}

#[tokio::test]
async fn test_store_outage_fails_update_and_delete() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_update(ProductId(5))
        .return_err(FrameworkError::ActorClosed);
    mock.expect_delete(ProductId(5))
        .return_err(FrameworkError::ActorClosed);

    let (status, body) = call(app(&mock), Method::PUT, "/products/5", Some(cake())).await;
    assert_opaque(status, &body, "Error updating product");

    let (status, body) = call(app(&mock), Method::DELETE, "/products/5", None).await;
    assert_opaque(status, &body, "Error deleting product");
    mock.verify();
}

#[tokio::test]
async fn test_missing_field_never_reaches_the_store() {
    let mock = MockClient::<Product>::new();
    let mut body = cake();
    body.as_object_mut().unwrap().remove("stock");

    let (status, _) = call(app(&mock), Method::POST, "/products", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    mock.verify();
}

#[tokio::test]
async fn test_stopped_store_fails_every_operation() {
    let (actor, client) = product_actor::new(4);
    drop(actor);
    let router = api::router(ProductClient::new(client));

    let (status, body) = call(router.clone(), Method::GET, "/products", None).await;
    assert_opaque(status, &body, "Error fetching products");

    let (status, body) = call(router.clone(), Method::POST, "/products", Some(cake())).await;
    assert_opaque(status, &body, "Error creating product");

    let (status, body) = call(router.clone(), Method::PUT, "/products/1", Some(cake())).await;
    assert_opaque(status, &body, "Error updating product");

    let (status, body) = call(router, Method::DELETE, "/products/1", None).await;
    assert_opaque(status, &body, "Error deleting product");
}
