use crate::{AppError, Result};
use axum::extract::{DefaultBodyLimit, Multipart};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

/// Multipart field the image is expected in.
const IMAGE_FIELD: &str = "image";

/// Largest accepted upload. Phone photos easily exceed the 2 MiB axum default.
pub const MAX_UPLOAD_SIZE: usize = 32 * 1024 * 1024;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MultipartError(err) => err.status(),
            AppError::MissingImage => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, format!("Error: {}", self)).into_response()
    }
}

#[instrument(skip_all)]
async fn analyze(mut multipart: Multipart) -> Result<Json<models::RecipeResponse>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let image = field.bytes().await?;

        debug!(
            "received {:?} with {} bytes of {:?}",
            file_name,
            image.len(),
            content_type
        );

        return Ok(Json(models::example()));
    }

    warn!("upload without image");
    Err(AppError::MissingImage)
}

pub fn router() -> Router {
    // The app may be served from anywhere during development.
    let cors = CorsLayer::permissive();
    let trace = TraceLayer::new_for_http();

    Router::new()
        .route("/", post(analyze))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
        .layer(trace)
        .layer(cors)
}

/// Start the web server.
#[instrument]
pub async fn run(address: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(address).await?;
    info!("Listening on {address}");

    axum::serve(listener, router()).await?;

    Ok(())
}
