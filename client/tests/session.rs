use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use client::backend::http::Http;
use client::Session;
use models::RecipeResponse;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Clone, Debug)]
struct Part {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

type Received = Arc<Mutex<Vec<Part>>>;

fn tortilla() -> RecipeResponse {
    serde_json::from_str(
        r#"{"name":"Tortilla","recipe":["Beat eggs","Fry"],"ingredients":[{"name":"Eggs","img_url":"x","price":1.2}]}"#,
    )
    .unwrap()
}

fn red_png() -> Vec<u8> {
    let image = image::RgbImage::from_pixel(10, 10, image::Rgb([255, 0, 0]));
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
    bytes.into_inner()
}

async fn write_red_png(test: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("client-{test}-{}.png", std::process::id()));
    tokio::fs::write(&path, red_png()).await.unwrap();
    path
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{address}")
}

async fn record(
    State(received): State<Received>,
    mut multipart: Multipart,
) -> Json<RecipeResponse> {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.unwrap().to_vec();

        received.lock().unwrap().push(Part {
            name,
            file_name,
            content_type,
            bytes,
        });
    }

    Json(tortilla())
}

#[tokio::test]
async fn red_png_round_trip() {
    let received = Received::default();
    let router = Router::new()
        .route("/", post(record))
        .with_state(received.clone());

    let session = Session::new(Http::new(serve(router).await));
    let path = write_red_png("round-trip").await;

    session.select(&[&path]).await.unwrap();
    session.submit().await.unwrap();
    tokio::fs::remove_file(&path).await.unwrap();

    let state = session.state();
    assert_eq!(state.response, Some(tortilla()));
    assert_eq!(state.submission.error, None);
    assert_eq!(state.total_price(), 1.2);
    assert!(!state.submission.in_flight);
    assert_eq!(state.submission.progress_label(), "");

    let parts = received.lock().unwrap().clone();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "image");
    assert_eq!(parts[0].file_name.as_deref(), Some("uploaded-image.png"));
    assert_eq!(parts[0].content_type.as_deref(), Some("image/png"));
    assert_eq!(parts[0].bytes, red_png());
}

#[tokio::test]
async fn only_first_file_is_used() {
    let first = write_red_png("first").await;
    let second = std::env::temp_dir().join(format!("client-second-{}.txt", std::process::id()));
    tokio::fs::write(&second, b"not an image").await.unwrap();

    let session = Session::new(Http::new("http://127.0.0.1:9"));
    session.select(&[&first, &second]).await.unwrap();

    tokio::fs::remove_file(&first).await.unwrap();
    tokio::fs::remove_file(&second).await.unwrap();

    let image = session.state().image.unwrap();
    assert_eq!(image.blob().unwrap().mime, "image/png");
}

#[tokio::test]
async fn server_error_shows_example() {
    let router = Router::new().route(
        "/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model crashed") }),
    );

    let session = Session::new(Http::new(serve(router).await));
    let path = write_red_png("server-error").await;

    session.select(&[&path]).await.unwrap();
    session.submit().await.unwrap();
    tokio::fs::remove_file(&path).await.unwrap();

    let state = session.state();
    assert_eq!(state.response, Some(models::example()));
    assert_eq!(
        state.submission.error.as_deref(),
        Some("Failed to upload image: Server returned 500 Internal Server Error")
    );
    assert!(!state.submission.in_flight);
}

#[tokio::test]
async fn malformed_body_shows_example() {
    let router = Router::new().route("/", post(|| async { "definitely not json" }));

    let session = Session::new(Http::new(serve(router).await));
    let path = write_red_png("malformed").await;

    session.select(&[&path]).await.unwrap();
    session.submit().await.unwrap();
    tokio::fs::remove_file(&path).await.unwrap();

    let state = session.state();
    assert_eq!(state.response, Some(models::example()));
    assert!(state.submission.error.unwrap().starts_with("Failed to upload image: JSON"));
}

#[tokio::test]
async fn connection_refused_shows_example() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let session = Session::new(Http::new(format!("http://{address}")));
    let path = write_red_png("refused").await;

    session.select(&[&path]).await.unwrap();
    session.submit().await.unwrap();
    tokio::fs::remove_file(&path).await.unwrap();

    let state = session.state();
    assert_eq!(state.response, Some(models::example()));
    assert!(state
        .submission
        .error
        .as_ref()
        .unwrap()
        .starts_with("Failed to upload image: HTTP request failed"));
    assert!(!state.submission.in_flight);
    assert_eq!(state.submission.progress_label(), "");
}
