use axum::{
    Router,
    routing::get,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod routes;

/// Server state
///
/// Only the database path is shared. Handlers open a connection scoped to
/// each request rather than holding one here.
pub struct AppState {
    pub database_path: PathBuf,
}

pub async fn start_server(host: &str, port: u16, database_path: PathBuf) -> anyhow::Result<()> {
    let state = Arc::new(AppState { database_path });

    let app = Router::new()
        .route("/", get(routes::handle_index))
        .route(
            "/compliment",
            get(routes::handle_latest_compliment).post(routes::handle_add_compliment),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Starting server on {}", addr);
    println!("💌 Compliment API running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
