//! services/api/src/web/middleware.rs
//!
//! Authentication middleware for protecting routes.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

use crate::web::state::AppState;

/// Middleware that resolves the bearer session token through the identity
/// provider and injects the resulting [`repetiteur_core::domain::Actor`] into
/// the request extensions.
///
/// If the token is missing, unknown, expired, or belongs to a deactivated
/// account, returns 401 Unauthorized.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let actor = state.identity.resolve(token).await.map_err(|e| {
        warn!("session resolution failed: {e}");
        StatusCode::UNAUTHORIZED
    })?;

    req.extensions_mut().insert(actor);
    Ok(next.run(req).await)
}
