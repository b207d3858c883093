use crate::model_router::ChatRouter;
use crate::models::ErrorResponse;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct AppState {
    pub router: Arc<ChatRouter>,
    pub default_model: String,
    pub token: Option<String>,
}

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(ErrorResponse::new(message))).into_response()
}

/// Guards every route but `/health` when a service token is configured.
/// Passes when either `Authorization: Bearer <token>` or the `apikey`
/// header carries the token.
pub async fn require_authorization(
    State(app_state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    if request.uri().path() == "/health" {
        return Ok(next.run(request).await);
    }

    let Some(expected) = app_state.token.as_deref() else {
        return Ok(next.run(request).await);
    };

    let headers = request.headers();
    let bearer = headers
        .get("Authorization")
        .and_then(|hv| hv.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer ").map(|t| t.trim()));
    let apikey = headers.get("apikey").and_then(|hv| hv.to_str().ok());

    if bearer.is_none() && apikey.is_none() {
        info!("Missing Authorization header");
        return Err(unauthorized("Authorization header is required"));
    }
    // Browser clients send a user session JWT as Bearer next to the service key.
    if bearer != Some(expected) && apikey != Some(expected) {
        info!("Invalid token provided");
        return Err(unauthorized("Invalid authentication token"));
    }
    debug!("Token validation successful");

    Ok(next.run(request).await)
}
