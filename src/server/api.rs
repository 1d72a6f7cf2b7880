use crate::config::TrackerConfig;
use crate::gateway::ChatGateway;
use crate::history::HistoryReader;
use crate::models::api::{ AuthResponse, ChatReply, ChatRequest, CredentialsRequest };
use crate::models::chat::{ ChatMessage, ConversationSummary };
use crate::server::error::ApiError;
use crate::store::UserStore;
use crate::tracker::ConversationTracker;
use std::path::PathBuf;
use std::sync::Arc;
use axum::{
    routing::{ get, post },
    Router,
    Json,
    extract::{ rejection::JsonRejection, State, Path },
};
use tower_http::cors::{ Any, CorsLayer };
use tower_http::services::ServeFile;
use log::info;

#[derive(Clone)]
pub struct AppState {
    store: Arc<UserStore>,
    tracker: Arc<ConversationTracker>,
    history: Arc<HistoryReader>,
    index_path: PathBuf,
}

impl AppState {
    pub fn new(
        store: Arc<UserStore>,
        gateway: Arc<dyn ChatGateway>,
        tracker_config: TrackerConfig,
        index_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            tracker: Arc::new(ConversationTracker::new(store.clone(), gateway, tracker_config)),
            history: Arc::new(HistoryReader::new(store.clone())),
            store,
            index_path: index_path.into(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route_service("/", ServeFile::new(&state.index_path))
        .route("/api/register", post(register_handler))
        .route("/api/login", post(login_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/history/{username}", get(history_handler))
        .route("/api/conversation/{username}/{conversation_id}", get(conversation_handler))
        .layer(cors)
        .with_state(state)
}

async fn register_handler(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(req) = body.map_err(ApiError::AuthBody)?;
    state.store.register(&req.username, &req.password).await?;
    Ok(Json(AuthResponse {
        success: true,
        message: "Registration successful, please log in".into(),
    }))
}

async fn login_handler(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(req) = body.map_err(ApiError::AuthBody)?;
    state.store.authenticate(&req.username, &req.password).await?;
    info!("User '{}' logged in", req.username.trim());
    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".into(),
    }))
}

async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(req) = body.map_err(ApiError::ChatBody)?;
    let reply = state.tracker
        .handle_chat(&req.username, &req.query, req.conversation_id.as_deref()).await?;
    Ok(Json(reply))
}

async fn history_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Json<Vec<ConversationSummary>> {
    Json(state.history.list_conversations(&username).await)
}

async fn conversation_handler(
    State(state): State<AppState>,
    Path((username, conversation_id)): Path<(String, String)>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let messages = state.history.get_conversation(&username, &conversation_id).await?;
    Ok(Json(messages))
}
