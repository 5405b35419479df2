use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::Result;
use crate::compliment::current_timestamp;
use crate::server::AppState;
use crate::storage::ComplimentStore;

/// Liveness banner served at `/`
pub const BANNER: &str = "Compliment API is Live! Spread kindness responsibly.";

/// Placeholder compliment returned while the store is empty
pub const EMPTY_STATE_MESSAGE: &str = "No compliments yet! Be the first to spread some kindness.";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ComplimentResponse {
    pub name: String,
    pub compliment: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: &str) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Map a storage failure to a generic 500. The cause goes to the log, never
/// to the client.
fn internal_error(err: crate::Error, message: &str) -> HandlerError {
    tracing::error!("{} {}", message, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Run `f` against a store opened for this request only
///
/// The connection lives inside the blocking closure and closes on drop on
/// every exit path, success or error.
async fn with_store<T, F>(state: &AppState, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&ComplimentStore) -> Result<T> + Send + 'static,
{
    let path = state.database_path.clone();
    tokio::task::spawn_blocking(move || {
        let store = ComplimentStore::open(&path)?;
        f(&store)
    })
    .await?
}

pub async fn handle_index() -> &'static str {
    BANNER
}

/// `GET /compliment` - the most recently submitted compliment
///
/// An empty store is a normal state, not an error: it answers 200 with the
/// fixed empty-state message.
pub async fn handle_latest_compliment(
    State(state): State<Arc<AppState>>,
) -> std::result::Result<Json<ComplimentResponse>, HandlerError> {
    let latest = with_store(&state, |store| store.latest_compliment())
        .await
        .map_err(|e| internal_error(e, "Could not fetch the latest compliment."))?;

    match latest {
        Some(row) => Ok(Json(ComplimentResponse {
            name: row.name,
            compliment: row.compliment,
        })),
        None => Ok(Json(ComplimentResponse {
            name: String::new(),
            compliment: EMPTY_STATE_MESSAGE.to_string(),
        })),
    }
}

/// `POST /compliment` - store a new compliment
///
/// The raw body is parsed by hand so a malformed body becomes a 400 in the
/// same error shape as every other failure. Both fields must be present,
/// strings, and non-empty. The timestamp is assigned here, server-side.
pub async fn handle_add_compliment(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> std::result::Result<(StatusCode, Json<MessageResponse>), HandlerError> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|_| bad_request("Request body must be valid JSON."))?;

    let name = payload.get("name").and_then(Value::as_str).unwrap_or("");
    let compliment = payload
        .get("compliment")
        .and_then(Value::as_str)
        .unwrap_or("");
    if name.is_empty() || compliment.is_empty() {
        return Err(bad_request("Name and compliment are required."));
    }

    let name = name.to_string();
    let compliment = compliment.to_string();
    with_store(&state, move |store| {
        store.insert_compliment(&name, &compliment, &current_timestamp())
    })
    .await
    .map_err(|e| internal_error(e, "Could not save the compliment."))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Compliment added! Spread the love!".to_string(),
        }),
    ))
}
