use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{auth::AppState, handlers};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/users", get(handlers::list_users))
        .route("/send", post(handlers::send_message))
        .route("/messages", get(handlers::get_messages))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
