use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize users: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("user file is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username and password must not be empty")]
    InvalidInput,
    #[error("username already exists")]
    AlreadyExists,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("username and query must not be empty")]
    InvalidInput,
    #[error("user is not registered")]
    NotRegistered,
    #[error("failed to create conversation: {0}")]
    GatewayUnavailable(#[source] GatewayError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("user does not exist")]
    UserNotFound,
    #[error("conversation does not exist")]
    ConversationNotFound,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("gateway returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("gateway response could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("gateway response did not contain a conversation_id")]
    MissingConversationId,
    #[error("gateway answer was empty or had no result")]
    EmptyAnswer,
    #[error("invalid gateway configuration: {0}")]
    InvalidConfig(String),
}
