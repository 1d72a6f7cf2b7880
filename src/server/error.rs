use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{ IntoResponse, Response };
use axum::Json;
use log::error;

use crate::error::{ AuthError, ChatError, HistoryError };
use crate::models::api::{ AuthResponse, ErrorResponse };

/// Domain failures mapped onto the HTTP responses the front-end expects.
/// Auth endpoints answer with `{success, message}`, everything else with `{error}`.
#[derive(Debug)]
pub enum ApiError {
    Auth(AuthError),
    Chat(ChatError),
    History(HistoryError),
    /// Unreadable body on the register/login endpoints.
    AuthBody(JsonRejection),
    /// Unreadable body on the chat endpoint.
    ChatBody(JsonRejection),
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        ApiError::Auth(e)
    }
}

impl From<ChatError> for ApiError {
    fn from(e: ChatError) -> Self {
        ApiError::Chat(e)
    }
}

impl From<HistoryError> for ApiError {
    fn from(e: HistoryError) -> Self {
        ApiError::History(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Auth(e) => {
                let status = match &e {
                    AuthError::InvalidInput | AuthError::AlreadyExists => StatusCode::BAD_REQUEST,
                    AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                    AuthError::Store(inner) => {
                        error!("Store failure during auth request: {}", inner);
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, Json(AuthResponse { success: false, message: e.to_string() })).into_response()
            }
            ApiError::Chat(e) => {
                let status = match &e {
                    ChatError::InvalidInput => StatusCode::BAD_REQUEST,
                    ChatError::NotRegistered => StatusCode::FORBIDDEN,
                    ChatError::GatewayUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    ChatError::Store(inner) => {
                        error!("Store failure during chat request: {}", inner);
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, Json(ErrorResponse { error: e.to_string() })).into_response()
            }
            ApiError::AuthBody(rejection) =>
                (
                    rejection.status(),
                    Json(AuthResponse { success: false, message: rejection.body_text() }),
                ).into_response(),
            ApiError::ChatBody(rejection) =>
                (rejection.status(), Json(ErrorResponse { error: rejection.body_text() })).into_response(),
            ApiError::History(e) =>
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error: e.to_string() })).into_response(),
        }
    }
}
