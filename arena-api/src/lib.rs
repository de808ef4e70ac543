use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod admin;
pub mod availability;
pub mod courts;
pub mod error;
pub mod health;
pub mod pages;
pub mod reservations;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let mut router = Router::new()
        .merge(pages::routes())
        .merge(health::routes())
        .merge(courts::routes())
        .merge(availability::routes())
        .merge(reservations::routes());

    if state.admin_token.is_some() {
        router = router.merge(admin::routes(&state));
    } else {
        tracing::debug!("No admin token configured, /add_quadra is disabled");
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
