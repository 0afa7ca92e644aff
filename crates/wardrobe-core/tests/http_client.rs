//! End-to-end checks of the reqwest client against a local axum backend.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use wardrobe_core::{
    ApiConfig, ApiError, DraftField, DraftItem, GarmentApi, HttpGarmentApi, ImageFile, NewGarment, Size,
};

/// One multipart part as the backend saw it
#[derive(Debug, Clone)]
struct ReceivedPart {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

type Received = Arc<Mutex<Vec<ReceivedPart>>>;

async fn serve(app: Router) -> HttpGarmentApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    HttpGarmentApi::new(ApiConfig::deployed(format!("http://{}/api", addr))).unwrap()
}

async fn record_upload(State(received): State<Received>, mut multipart: Multipart) -> StatusCode {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let part = ReceivedPart {
            name: field.name().unwrap_or_default().to_string(),
            file_name: field.file_name().map(str::to_string),
            content_type: field.content_type().map(str::to_string),
            data: field.bytes().await.unwrap().to_vec(),
        };
        received.lock().unwrap().push(part);
    }
    StatusCode::CREATED
}

async fn echo_created(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let created = json!({
        "id": 42,
        "name": body["name"],
        "category": body["category"],
        "category_name": "Tops",
        "color": body["color"],
        "size": body["size"],
        "price": format!("{:.2}", body["price"].as_f64().unwrap_or_default()),
        "brand": body["brand"],
        "created_at": "2024-05-01T12:00:00Z",
        "updated_at": "2024-05-01T12:00:00Z"
    });
    (StatusCode::CREATED, Json(created))
}

fn backend(received: Received) -> Router {
    Router::new()
        .route("/api/hello/", get(|| async { Json(json!({ "message": "Hello from Django!" })) }))
        .route("/api/status/", get(|| async { Json(json!({ "status": "ok", "garments": 2 })) }))
        .route(
            "/api/garments/",
            get(|| async {
                Json(json!([
                    {
                        "id": 1,
                        "name": "Oxford",
                        "type": "shirt",
                        "category": 1,
                        "category_name": "Tops",
                        "color": "blue",
                        "size": "M",
                        "price": "40.00",
                        "is_favorite": true,
                        "times_worn": 3,
                        "last_worn": "2024-04-30",
                        "created_at": "2024-01-01T00:00:00Z",
                        "updated_at": "2024-01-02T00:00:00Z"
                    },
                    {
                        "id": 2,
                        "name": "Chinos",
                        "category_name": "Bottoms",
                        "color": "khaki",
                        "size": "32",
                        "price": 59.5
                    }
                ]))
            })
            .post(echo_created),
        )
        .route("/api/garments-api/", post(record_upload))
        .with_state(received)
}

fn draft_upload(image: Option<ImageFile>) -> wardrobe_core::GarmentUpload {
    let mut draft = DraftItem::default();
    draft.set_field(DraftField::Name, "Shirt");
    draft.set_field(DraftField::Category, "Top");
    draft.set_field(DraftField::Color, "white");
    draft.set_field(DraftField::Material, "cotton");
    draft.set_field(DraftField::Price, "19.99");
    draft.image = image;
    draft.validate().unwrap()
}

#[tokio::test]
async fn test_probes() {
    let api = serve(backend(Received::default())).await;

    let hello = api.test_connection().await.unwrap();
    assert_eq!(hello.message, "Hello from Django!");

    let status = api.get_status().await.unwrap();
    assert_eq!(status["status"], "ok");
}

#[tokio::test]
async fn test_get_garments_decodes_string_prices() {
    let api = serve(backend(Received::default())).await;

    let garments = api.get_garments().await.unwrap();

    assert_eq!(garments.len(), 2);
    assert_eq!(garments[0].price, 40.0);
    assert_eq!(garments[0].garment_type.as_deref(), Some("shirt"));
    assert_eq!(garments[0].times_worn, Some(3));
    assert!(garments[0].created_at.is_some());
    assert_eq!(garments[1].price, 59.5);
    assert_eq!(garments[1].size, "32");
}

#[tokio::test]
async fn test_upload_sends_documented_multipart_fields() {
    let received = Received::default();
    let api = serve(backend(received.clone())).await;
    let image = ImageFile::new("shirt.png", "image/png", vec![0x89, b'P', b'N', b'G']);

    api.upload_garment(&draft_upload(Some(image))).await.unwrap();

    let parts = received.lock().unwrap().clone();
    let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["name", "description", "color", "size", "price", "brand", "category", "image"]
    );

    let text = |name: &str| {
        let part = parts.iter().find(|p| p.name == name).unwrap();
        String::from_utf8(part.data.clone()).unwrap()
    };
    assert_eq!(text("name"), "Shirt");
    assert_eq!(text("size"), "M");
    assert_eq!(text("price"), "19.99");
    assert_eq!(text("category"), "1");
    assert_eq!(text("description"), "");

    let image = parts.iter().find(|p| p.name == "image").unwrap();
    assert_eq!(image.file_name.as_deref(), Some("shirt.png"));
    assert_eq!(image.content_type.as_deref(), Some("image/png"));
    assert_eq!(image.data, vec![0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn test_upload_without_image_has_no_image_part() {
    let received = Received::default();
    let api = serve(backend(received.clone())).await;

    api.upload_garment(&draft_upload(None)).await.unwrap();

    let parts = received.lock().unwrap();
    assert_eq!(parts.len(), 7);
    assert!(parts.iter().all(|p| p.name != "image" && p.file_name.is_none()));
}

#[tokio::test]
async fn test_create_garment_posts_json() {
    let api = serve(backend(Received::default())).await;
    let new_garment = NewGarment {
        name: "Polo".to_string(),
        description: None,
        category: 1,
        color: "navy".to_string(),
        size: Size::Large,
        price: 54.99,
        brand: Some("Acme".to_string()),
    };

    let created = api.create_garment(&new_garment).await.unwrap();

    assert_eq!(created.id, 42);
    assert_eq!(created.name, "Polo");
    assert_eq!(created.size, "L");
    assert_eq!(created.price, 54.99);
    assert_eq!(created.brand.as_deref(), Some("Acme"));
}

#[tokio::test]
async fn test_non_success_status_carries_body() {
    let app = Router::new().route(
        "/api/garments-api/",
        post(|| async { (StatusCode::BAD_REQUEST, "price: not a number") }),
    );
    let api = serve(app).await;

    let err = api.upload_garment(&draft_upload(None)).await.unwrap_err();

    match &err {
        ApiError::Status { status, body } => {
            assert_eq!(*status, 400);
            assert_eq!(body, "price: not a number");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let app = Router::new().route("/api/hello/", get(|| async { "not json" }));
    let api = serve(app).await;

    let err = api.test_connection().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = HttpGarmentApi::new(ApiConfig::deployed(format!("http://{}/api", addr))).unwrap();

    let err = api.get_garments().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let app = Router::new().route(
        "/api/garments/",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!([]))
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let config = ApiConfig {
        timeout_secs: 1,
        ..ApiConfig::deployed(format!("http://{}/api", addr))
    };
    let api = HttpGarmentApi::new(config).unwrap();

    let started = Instant::now();
    let err = api.get_garments().await.unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(4));
}
