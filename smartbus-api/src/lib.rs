use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod allocate;
pub mod bookings;
pub mod error;
pub mod feedback;
pub mod health;
pub mod histories;
pub mod state;
pub mod upstream;

pub use state::AppState;

fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(allocate::routes())
        .merge(histories::routes())
        .merge(bookings::routes())
        .merge(feedback::routes())
}

/// Every route is served at the root, where the allocator calls back, and under `/v1`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .merge(routes())
        .nest(&format!("/{}", smartbus_shared::API_VERSION), routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
