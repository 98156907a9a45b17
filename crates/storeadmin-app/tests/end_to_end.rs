//! Drives the page controllers against a small in-process storefront API
//! instead of mocks: the full mount / mutate / reload cycle over real HTTP.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{serve, Json, Router};
use dashmap::DashMap;
use serde::Deserialize;

use storeadmin_client::{CreateOrderRequest, StoreApi};
use storeadmin_pages::pages::{CategoriesPage, OrdersPage, ProductEditPage, SubmitOutcome};
use storeadmin_types::domain::category::Category;
use storeadmin_types::domain::order::{Order, OrderStatus, OrderedProduct};
use storeadmin_types::domain::product::{Product, ProductCategory};
use storeadmin_types::ports::feedback::{ConfirmDialog, ConfirmPrompt, Confirmation, Notifier};

#[derive(Clone, Default)]
struct StoreState {
    categories: Arc<DashMap<String, Category>>,
    orders: Arc<DashMap<String, Order>>,
    products: Arc<DashMap<String, Product>>,
}

#[derive(Deserialize)]
struct SaveCategory {
    label: String,
}

#[derive(Deserialize)]
struct SetStatus {
    status: OrderStatus,
}

fn not_found(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": format!("{what} not found") })),
    )
        .into_response()
}

async fn list_categories(State(state): State<StoreState>) -> Json<Vec<Category>> {
    let mut all: Vec<Category> = state.categories.iter().map(|kv| kv.value().clone()).collect();
    all.sort_by(|a, b| a.label.cmp(&b.label));
    Json(all)
}

async fn create_category(
    State(state): State<StoreState>,
    Json(body): Json<SaveCategory>,
) -> Response {
    let category = Category {
        id: uuid::Uuid::new_v4().to_string(),
        label: body.label,
    };
    state.categories.insert(category.id.clone(), category.clone());
    (StatusCode::CREATED, Json(category)).into_response()
}

async fn update_category(
    State(state): State<StoreState>,
    Path(id): Path<String>,
    Json(body): Json<SaveCategory>,
) -> Response {
    match state.categories.get_mut(&id) {
        Some(mut entry) => {
            entry.label = body.label;
            Json(entry.clone()).into_response()
        }
        None => not_found("category"),
    }
}

async fn delete_category(State(state): State<StoreState>, Path(id): Path<String>) -> Response {
    if state.categories.remove(&id).is_some() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found("category")
    }
}

async fn list_orders(State(state): State<StoreState>) -> Json<Vec<Order>> {
    let mut all: Vec<Order> = state.orders.iter().map(|kv| kv.value().clone()).collect();
    all.sort_by(|a, b| a.id.cmp(&b.id));
    Json(all)
}

async fn create_order(
    State(state): State<StoreState>,
    Json(body): Json<CreateOrderRequest>,
) -> Response {
    let order = Order {
        id: uuid::Uuid::new_v4().to_string(),
        customer_name: body.customer_name,
        customer_email: body.customer_email,
        products: body.products,
        total_price: body.total_price,
        status: OrderStatus::Pending,
        paid_at: None,
    };
    state.orders.insert(order.id.clone(), order.clone());
    (StatusCode::CREATED, Json(order)).into_response()
}

async fn update_order(
    State(state): State<StoreState>,
    Path(id): Path<String>,
    Json(body): Json<SetStatus>,
) -> Response {
    match state.orders.get_mut(&id) {
        Some(mut entry) => {
            entry.status = body.status;
            if body.status == OrderStatus::Paid && entry.paid_at.is_none() {
                entry.paid_at = Some(chrono::Utc::now());
            }
            Json(entry.clone()).into_response()
        }
        None => not_found("order"),
    }
}

async fn delete_order(State(state): State<StoreState>, Path(id): Path<String>) -> Response {
    if state.orders.remove(&id).is_some() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found("order")
    }
}

async fn get_product(State(state): State<StoreState>, Path(id): Path<String>) -> Response {
    match state.products.get(&id) {
        Some(entry) => Json(entry.clone()).into_response(),
        // The storefront answers unknown ids with a 200 "null" body.
        None => (
            StatusCode::OK,
            [("content-type", "application/json")],
            "null",
        )
            .into_response(),
    }
}

async fn update_product(
    State(state): State<StoreState>,
    Path(id): Path<String>,
    Json(body): Json<storeadmin_client::UpdateProductRequest>,
) -> Response {
    match state.products.get_mut(&id) {
        Some(mut entry) => {
            entry.name = body.name;
            entry.description = body.description;
            entry.price = body.price;
            entry.category = body.category;
            Json(entry.clone()).into_response()
        }
        None => not_found("product"),
    }
}

fn router(state: StoreState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories", post(create_category))
        .route("/categories/{id}", put(update_category))
        .route("/categories/{id}", delete(delete_category))
        .route("/orders", get(list_orders))
        .route("/orders", post(create_order))
        .route("/orders/{id}", put(update_order))
        .route("/orders/{id}", delete(delete_order))
        .route("/products/{id}", get(get_product))
        .route("/products/{id}", put(update_product))
        .with_state(state)
}

async fn start_store(state: StoreState) -> String {
    // Binding before spawning means the port accepts connections as soon as
    // the address is returned.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(state);
    tokio::spawn(async move {
        serve(listener, app.into_make_service()).await.unwrap();
    });
    format!("http://{addr}/")
}

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push(message.into());
    }
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("error: {message}"));
    }
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.into());
    }
}

struct AlwaysConfirm;

#[async_trait::async_trait]
impl ConfirmDialog for AlwaysConfirm {
    async fn confirm(&self, _: &ConfirmPrompt) -> Confirmation {
        Confirmation::Confirmed
    }
}

#[tokio::test]
async fn category_lifecycle_over_http() {
    let state = StoreState::default();
    let addr = start_store(state).await;
    let api = StoreApi::new(&addr).unwrap();

    let notifier = Arc::new(RecordingNotifier::default());
    let mut page = CategoriesPage::new(api.categories(), notifier.clone(), Arc::new(AlwaysConfirm));

    page.mount().await;
    assert!(page.categories().is_empty());
    assert!(page.view().body.is_empty());

    page.set_label("Games");
    page.submit_new().await;
    assert_eq!(page.categories().len(), 1);
    assert_eq!(page.categories()[0].label, "Games");

    let id = page.categories()[0].id.clone();
    page.rename(&id, "Retro Games").await;
    assert_eq!(page.categories()[0].label, "Retro Games");

    page.remove(&id).await;
    assert!(page.categories().is_empty());
    assert!(page.view().body.is_empty());

    assert_eq!(
        notifier.messages.lock().unwrap().as_slice(),
        [
            "New category has been added",
            "Category has been updated",
            "Category has been removed"
        ]
    );
}

#[tokio::test]
async fn order_status_and_delete_over_http() {
    let state = StoreState::default();
    // Seed one order that already left "pending".
    let paid = Order {
        id: "seed-paid".into(),
        customer_name: "Alice".into(),
        customer_email: "alice@example.com".into(),
        products: vec![OrderedProduct {
            name: "Game Pass".into(),
            price: Some(15.0),
        }],
        total_price: 15.0,
        status: OrderStatus::Paid,
        paid_at: Some(chrono::Utc::now()),
    };
    state.orders.insert(paid.id.clone(), paid);
    let addr = start_store(state).await;
    let api = StoreApi::new(&addr).unwrap();

    // A freshly created order comes back pending and deletable.
    let created = api
        .orders()
        .create(&CreateOrderRequest {
            customer_name: "Bob".into(),
            customer_email: "bob@example.com".into(),
            products: vec![OrderedProduct {
                name: "Console".into(),
                price: Some(499.0),
            }],
            total_price: 499.0,
        })
        .await
        .unwrap();
    assert_eq!(created.status, OrderStatus::Pending);

    let notifier = Arc::new(RecordingNotifier::default());
    let mut page = OrdersPage::new(api.orders(), notifier.clone(), Arc::new(AlwaysConfirm));
    page.mount().await;
    assert_eq!(page.orders().len(), 2);

    page.set_status("seed-paid", OrderStatus::Completed).await;
    let seeded = page
        .orders()
        .iter()
        .find(|o| o.id == "seed-paid")
        .unwrap();
    assert_eq!(seeded.status, OrderStatus::Completed);
    // paid_at survives the status change.
    assert!(seeded.paid_at.is_some());

    // Pending orders cannot be transitioned, only deleted.
    page.set_status(&created.id, OrderStatus::Completed).await;
    let pending = page
        .orders()
        .iter()
        .find(|o| o.id == created.id)
        .unwrap();
    assert_eq!(pending.status, OrderStatus::Pending);

    page.remove(&created.id).await;
    assert_eq!(page.orders().len(), 1);
    assert_eq!(
        notifier.messages.lock().unwrap().as_slice(),
        ["Order has been removed"]
    );
}

#[tokio::test]
async fn product_edit_over_http() {
    let state = StoreState::default();
    state.products.insert(
        "p1".into(),
        Product {
            id: "p1".into(),
            name: "DualSense".into(),
            description: "Wireless controller".into(),
            price: 69.0,
            category: ProductCategory::Accessories,
        },
    );
    let addr = start_store(state).await;
    let api = StoreApi::new(&addr).unwrap();

    let notifier = Arc::new(RecordingNotifier::default());
    let mut page = ProductEditPage::new(api.products(), notifier.clone(), "p1");
    page.mount().await;
    assert!(!page.is_not_found());

    page.set_price(59.0);
    page.set_category(ProductCategory::Accessories);
    assert_eq!(page.submit().await, SubmitOutcome::Saved);

    let stored = api.products().get("p1").await.unwrap().unwrap();
    assert_eq!(stored.price, 59.0);
    assert_eq!(
        notifier.messages.lock().unwrap().as_slice(),
        ["Product has been updated"]
    );
}

#[tokio::test]
async fn unknown_product_is_terminal_not_found() {
    let addr = start_store(StoreState::default()).await;
    let api = StoreApi::new(&addr).unwrap();

    let mut page = ProductEditPage::new(
        api.products(),
        Arc::new(RecordingNotifier::default()),
        "no-such-id",
    );
    page.mount().await;
    assert!(page.is_not_found());
    assert_eq!(page.submit().await, SubmitOutcome::Rejected);
}
