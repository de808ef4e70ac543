use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{Html, Response},
    routing::get,
    Router,
};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Admin Authentication Middleware
// ============================================================================

async fn admin_auth_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let expected = state
        .admin_token
        .as_deref()
        .ok_or_else(|| AppError::Unauthorized("Acesso negado.".to_string()))?;

    let token = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Acesso negado.".to_string()))?;

    if token != expected {
        tracing::warn!("Rejected admin request with invalid token");
        return Err(AppError::Unauthorized("Acesso negado.".to_string()));
    }

    Ok(next.run(req).await)
}

// ============================================================================
// Handlers
// ============================================================================

/// Only mounted when an admin token is configured.
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/add_quadra", get(seed_court))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_auth_middleware))
}

/// GET /add_quadra
async fn seed_court(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let outcome = state.courts.ensure_default_court().await?;
    Ok(Html(format!("<h1>{}</h1>", outcome.message())))
}
