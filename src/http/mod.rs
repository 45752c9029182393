pub mod handlers;

use axum::Router;
use axum::routing::{get, post};

use crate::db::Database;

/// Shared handler state. The store handle is constructed in `main` and
/// injected here rather than living in a global.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// Assemble the application router over the given store.
pub fn build_router(db: Database) -> Router {
    Router::new()
        .route("/clientes", post(handlers::create_client))
        .route(
            "/clientes/{national_id}",
            get(handlers::get_client)
                .put(handlers::update_client)
                .delete(handlers::delete_client),
        )
        .route("/simulacion", post(handlers::simulate_mortgage))
        .with_state(AppState { db })
}
