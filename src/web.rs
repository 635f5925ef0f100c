// src/web.rs

//! The browser form: four inputs, a "Process" button, and the report text.

use crate::config::ConfigBuilder;
use crate::constants::MISSING_FIELDS_MESSAGE;
use crate::errors::{ConfigError, Error};
use crate::output::render_report;
use crate::report::{LogSink, OperationReport};
use crate::run;
use axum::{
    extract::Json,
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    routing::post,
    Router,
};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

// --- Request / Response Structs ---
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ProcessRequest {
    /// Path where the files will be extracted.
    #[serde(default)]
    pub extraction_folder: String,
    /// Path of the template archive.
    #[serde(default)]
    pub template_zip: String,
    /// Process name that replaces the template name.
    #[serde(default)]
    pub process_name: String,
    /// Path where the final archive is stored.
    #[serde(default)]
    pub destination_folder: String,
}

#[derive(Serialize, Debug)]
pub struct ProcessResponse {
    pub report: OperationReport,
    /// The report as the console adapter prints it.
    pub rendered: String,
}

// --- Server Startup ---
pub fn create_router() -> Router {
    Router::new()
        .route("/api/process", post(process_handler))
        .fallback(static_handler)
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server(port: u16, open_browser: bool) -> anyhow::Result<()> {
    let app = create_router();

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let url = format!("http://{}", addr);

    println!("Template rebrand form running at {}", url);
    tracing::info!("Listening on {}", addr);

    if open_browser {
        if let Err(e) = open::that(&url) {
            log::warn!("Could not open the browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// --- Handlers ---

async fn static_handler(uri: Uri) -> impl IntoResponse {
    let mut path = uri.path().trim_start_matches('/').to_string();
    if path.is_empty() {
        path = "index.html".to_string();
    }
    match Assets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

async fn process_handler(Json(req): Json<ProcessRequest>) -> impl IntoResponse {
    log::debug!("Process request: {:?}", req);

    let result = tokio::task::spawn_blocking(move || {
        let config = ConfigBuilder::new()
            .extraction_dir(req.extraction_folder)
            .template_archive(req.template_zip)
            .replacement(req.process_name)
            .destination_dir(req.destination_folder)
            .build()
            .map_err(|e| match e {
                Error::Config(ConfigError::MissingField(_)) => MISSING_FIELDS_MESSAGE.to_string(),
                other => format!("Error: {}", other),
            })?;

        let report = run(&config, &LogSink).map_err(|e| {
            log::error!("Unexpected error: {}", e);
            format!("Error: {}", e)
        })?;
        let rendered = render_report(&report);
        Ok::<ProcessResponse, String>(ProcessResponse { report, rendered })
    })
    .await;

    match result {
        Ok(Ok(response)) => (StatusCode::OK, Json(response)).into_response(),
        Ok(Err(msg)) => (StatusCode::BAD_REQUEST, msg).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
