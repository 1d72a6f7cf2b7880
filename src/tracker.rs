use crate::config::TrackerConfig;
use crate::error::ChatError;
use crate::gateway::ChatGateway;
use crate::models::api::ChatReply;
use crate::store::UserStore;
use log::{ error, info, warn };
use std::sync::Arc;

/// Routes chat requests to a remote conversation and records each exchange
/// under the requesting user's account.
pub struct ConversationTracker {
    store: Arc<UserStore>,
    gateway: Arc<dyn ChatGateway>,
    config: TrackerConfig,
}

impl ConversationTracker {
    pub fn new(store: Arc<UserStore>, gateway: Arc<dyn ChatGateway>, config: TrackerConfig) -> Self {
        Self { store, gateway, config }
    }

    pub async fn handle_chat(
        &self,
        username: &str,
        query: &str,
        conversation_id: Option<&str>
    ) -> Result<ChatReply, ChatError> {
        let username = username.trim();
        let query = query.trim();
        if username.is_empty() || query.is_empty() {
            return Err(ChatError::InvalidInput);
        }
        if !self.store.contains_user(username).await {
            return Err(ChatError::NotRegistered);
        }

        let conversation_id = match conversation_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => {
                let id = self.gateway.create_conversation().await.map_err(|e| {
                    error!("Failed to create conversation for '{}': {}", username, e);
                    ChatError::GatewayUnavailable(e)
                })?;
                info!("Started conversation {} for '{}'", id, username);
                id
            }
        };

        let reply = match self.gateway.query(query, &conversation_id).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Gateway answer unusable for conversation {}: {}", conversation_id, e);
                self.config.empty_answer_placeholder.clone()
            }
        };

        // The gateway call above can take a while, so the document is re-read
        // under the store lock instead of reusing an earlier snapshot.
        self.store.update(|users| {
            let account = users.get_mut(username).ok_or(ChatError::NotRegistered)?;
            account
                .conversation_or_insert(&conversation_id, query)
                .push_exchange(query, &reply);
            Ok::<_, ChatError>(())
        }).await?;

        Ok(ChatReply { reply, conversation_id })
    }
}
