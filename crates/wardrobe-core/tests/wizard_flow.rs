//! Wizard and inventory wired together over real HTTP, the way the front end
//! drives them.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use wardrobe_core::views::{
    AddItemWizard, InventoryOptions, InventoryView, NoticeLevel, SubmitOutcome, WizardEvent, SUCCESS_MESSAGE,
};
use wardrobe_core::{ApiConfig, DraftField, HttpGarmentApi, ImageFile};

/// Garments stored by the fake backend, as JSON records
type Store = Arc<Mutex<Vec<Value>>>;

async fn list(State(store): State<Store>) -> Json<Value> {
    Json(Value::Array(store.lock().unwrap().clone()))
}

async fn upload(State(store): State<Store>, mut multipart: Multipart) -> StatusCode {
    let mut record = serde_json::Map::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            field.bytes().await.unwrap();
            record.insert("image".to_string(), json!(format!("/media/{}", file_name)));
            continue;
        }
        let text = field.text().await.unwrap();
        // The category arrives as text but is stored as an id
        let value = match name.as_str() {
            "category" => json!(text.parse::<u32>().unwrap()),
            _ => json!(text),
        };
        record.insert(name, value);
    }

    let mut store = store.lock().unwrap();
    let id = store.len() + 1;
    let category_name = match record.get("category").and_then(Value::as_u64) {
        Some(2) => "Bottoms",
        _ => "Tops",
    };
    record.insert("id".to_string(), json!(id));
    record.insert("category_name".to_string(), json!(category_name));
    store.push(Value::Object(record));
    StatusCode::CREATED
}

async fn serve(fail_uploads: bool) -> (HttpGarmentApi, Store) {
    let store = Store::default();
    let uploads = if fail_uploads {
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database is locked") })
    } else {
        post(upload)
    };
    let app = Router::new()
        .route("/api/garments/", get(list))
        .route("/api/garments-api/", uploads)
        .with_state(store.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let api = HttpGarmentApi::new(ApiConfig::deployed(format!("http://{}/api", addr))).unwrap();
    (api, store)
}

fn fill_wizard(wizard: &mut AddItemWizard) {
    wizard.open();
    wizard.set_image(ImageFile::new("jeans.jpg", "", vec![0xff, 0xd8]));
    wizard.next();
    wizard.set_field(DraftField::Name, "Vintage Jeans");
    wizard.set_field(DraftField::Category, "Bottom");
    wizard.set_field(DraftField::Color, "blue");
    wizard.set_field(DraftField::Size, "L");
    wizard.set_field(DraftField::Price, "89.99");
    wizard.next();
    wizard.set_field(DraftField::Description, "Faded");
    wizard.next();
}

#[tokio::test]
async fn test_added_item_shows_up_after_refresh() {
    let (api, store) = serve(false).await;
    let mut inventory = InventoryView::new(InventoryOptions::default());
    inventory.refresh(&api).await;
    assert!(inventory.items().is_empty());

    let mut wizard = AddItemWizard::new();
    let added = Rc::new(Cell::new(false));
    let flag = added.clone();
    wizard.subscribe(move |event| {
        if *event == WizardEvent::ItemAdded {
            flag.set(true);
        }
    });

    fill_wizard(&mut wizard);
    let outcome = wizard.submit(&api).await;
    assert_eq!(outcome, SubmitOutcome::Saved);
    let notice = outcome.notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, SUCCESS_MESSAGE);
    assert!(!wizard.is_open());

    assert!(added.get());
    inventory.refresh(&api).await;

    assert_eq!(store.lock().unwrap().len(), 1);
    assert_eq!(inventory.items().len(), 1);
    let item = &inventory.items()[0];
    assert_eq!(item.name, "Vintage Jeans");
    assert_eq!(item.price, 89.99);
    assert_eq!(item.size, "L");
    assert_eq!(item.image.as_deref(), Some("/media/jeans.jpg"));

    inventory.select_category("Bottoms");
    assert_eq!(inventory.filtered_items().len(), 1);
}

#[tokio::test]
async fn test_server_error_keeps_draft_for_retry() {
    let (api, _) = serve(true).await;
    let mut wizard = AddItemWizard::new();
    fill_wizard(&mut wizard);
    let before = wizard.draft().clone();

    let outcome = wizard.submit(&api).await;

    match &outcome {
        SubmitOutcome::Failed(detail) => assert!(detail.contains("database is locked")),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(outcome.notice().unwrap().level, NoticeLevel::Error);
    assert!(wizard.is_open());
    assert_eq!(wizard.draft(), &before);
    assert!(!wizard.is_submitting());
}
