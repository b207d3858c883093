use crate::auth::{self, AppState};
use crate::models::{ChatRequest, ErrorResponse};
use crate::request_id::{self, RequestId};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info};

pub fn build_app(app_state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/health", get(health))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth::require_authorization,
        ))
        .layer(middleware::from_fn(request_id::inject_request_id))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn health() -> &'static str {
    "OK"
}

/// Single failure boundary: every outcome leaves as `{message, model}` or `{error}`.
#[axum_macros::debug_handler]
pub async fn chat(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            info!("Rejected chat request: {}", rejection.body_text());
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(rejection.body_text())),
            )
                .into_response();
        }
    };

    let model = request
        .model
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| state.default_model.clone());
    debug!("Chat request for '{}' with {} turns", model, request.messages.len());

    match state.router.route(&model, &request.messages, &request_id).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            error!("Chat error: {}", e);
            e.into_response()
        }
    }
}
