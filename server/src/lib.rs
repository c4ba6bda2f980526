//! HTTP front end for session-scoped todo lists.
//!
//! # Overview
//! An axum router over `todo-core`. A session middleware rehydrates the
//! caller's lists from the in-memory store before each handler runs and
//! writes them back afterwards; handlers only see live entities.

pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod store;
pub mod validation;

use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing::info;

pub use config::ServerConfig;
pub use error::AppError;
pub use session::SessionHandle;
pub use store::MemoryStore;

/// State shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub config: Arc<ServerConfig>,
}

/// Router with default configuration and an empty store.
pub fn app() -> Router {
    app_with(ServerConfig::default(), MemoryStore::new())
}

pub fn app_with(config: ServerConfig, store: MemoryStore) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(routes::index))
        .route("/lists", get(routes::list_lists).post(routes::create_list))
        .route("/lists/{list_id}", get(routes::show_list))
        .route(
            "/lists/{list_id}/edit",
            get(routes::show_list).post(routes::rename_list),
        )
        .route("/lists/{list_id}/destroy", post(routes::destroy_list))
        .route("/lists/{list_id}/complete_all", post(routes::complete_all))
        .route("/lists/{list_id}/todos", post(routes::add_todo))
        .route(
            "/lists/{list_id}/todos/{todo_id}/toggle",
            post(routes::toggle_todo),
        )
        .route(
            "/lists/{list_id}/todos/{todo_id}/destroy",
            post(routes::destroy_todo),
        )
        .layer(middleware::from_fn_with_state(state, session::load_session))
        .layer(middleware::from_fn(log_request))
}

pub async fn run(listener: TcpListener, config: ServerConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(config, MemoryStore::new())).await
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let response = next.run(req).await;
    info!(%method, %path, status = response.status().as_u16(), "request");
    response
}
