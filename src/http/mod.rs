mod content_type;

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use jiff::Timestamp;
use mapping::Serializer;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::signal::unix::{SignalKind, signal};
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use self::content_type::ActivityStreamsJson;
use crate::config::{Config, RenderConfig};
use crate::fixture::Fixture;

#[derive(Clone)]
struct AppState {
    serializer: Arc<Serializer>,
    render: RenderConfig,
    fixture_dir: PathBuf,
}

impl AppState {
    fn new(config: &Config) -> AppState {
        AppState {
            serializer: Arc::new(config.serializer()),
            render: config.render.clone(),
            fixture_dir: config.server.fixture_dir.clone(),
        }
    }
}

pub(crate) async fn serve(config: &Config) -> Result<()> {
    let app = Router::new()
        .route("/objects/{name}", get(get_object))
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(config));
    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.server.http_port)).await?;

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    let shutdown = async move {
        tokio::select! {
            _ = sigterm.recv() => {
                info!(target: "lifecycle", "Received the terminate signal; stopping");
            }
            _ = sigint.recv() => {
                info!(target: "lifecycle", "Received the interrupt signal; stopping");
            }
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn get_object(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ActivityStreamsJson<Value>, StatusCode> {
    if !is_fixture_name(&name) {
        return Err(StatusCode::NOT_FOUND);
    }
    let path = state.fixture_dir.join(format!("{name}.json"));
    let text = match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            debug!(target: "http", %name, "no such fixture");
            return Err(StatusCode::NOT_FOUND);
        }
        Err(error) => return Err(ise(error.into())),
    };
    let fixture = Fixture::from_json(&text).map_err(ise)?;
    let options = state.render.options(Timestamp::now());
    let document = fixture
        .render(&state.serializer, None, &options)
        .map_err(|error| ise(error.into()))?;
    Ok(ActivityStreamsJson(Json(document.into_value())))
}

fn is_fixture_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn ise(error: anyhow::Error) -> StatusCode {
    warn!(target: "http", "{error:#}");
    StatusCode::INTERNAL_SERVER_ERROR
}
