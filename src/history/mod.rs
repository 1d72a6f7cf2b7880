use crate::error::HistoryError;
use crate::models::chat::{ ChatMessage, ConversationSummary };
use crate::store::UserStore;
use std::sync::Arc;

/// Read-only views over stored conversations.
pub struct HistoryReader {
    store: Arc<UserStore>,
}

impl HistoryReader {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    /// Summaries of the user's conversations in the order they were started.
    /// Unknown users simply have no history.
    pub async fn list_conversations(&self, username: &str) -> Vec<ConversationSummary> {
        match self.store.account(username).await {
            Some(account) => account.conversations.iter().map(ConversationSummary::from).collect(),
            None => Vec::new(),
        }
    }

    pub async fn get_conversation(
        &self,
        username: &str,
        conversation_id: &str
    ) -> Result<Vec<ChatMessage>, HistoryError> {
        let account = self.store.account(username).await.ok_or(HistoryError::UserNotFound)?;
        account
            .conversation(conversation_id)
            .map(|c| c.messages.clone())
            .ok_or(HistoryError::ConversationNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::models::account::{ Account, Users };

    async fn seeded() -> (tempfile::TempDir, HistoryReader) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(UserStore::new(&StoreConfig { path: dir.path().join("users.json") }));

        let mut account = Account::new("pw");
        account.conversation_or_insert("b", "second thread").push_exchange("second thread", "ok");
        account.conversation_or_insert("a", "first?").push_exchange("first?", "yes");
        let mut users = Users::new();
        users.insert("alice".into(), account);
        users.insert("bob".into(), Account::new("pw"));
        store.save(&users).await.unwrap();

        (dir, HistoryReader::new(store))
    }

    #[tokio::test]
    async fn lists_in_stored_order() {
        let (_dir, history) = seeded().await;

        let list = history.list_conversations("alice").await;
        assert_eq!(list, vec![
            ConversationSummary { conversation_id: "b".into(), first_question: "second thread".into() },
            ConversationSummary { conversation_id: "a".into(), first_question: "first?".into() },
        ]);
        assert!(history.list_conversations("bob").await.is_empty());
        assert!(history.list_conversations("nobody").await.is_empty());
    }

    #[tokio::test]
    async fn fetches_messages_or_reports_not_found() {
        let (_dir, history) = seeded().await;

        let messages = history.get_conversation("alice", "a").await.unwrap();
        assert_eq!(messages, vec![ChatMessage::user("first?"), ChatMessage::bot("yes")]);

        assert_eq!(history.get_conversation("nobody", "a").await, Err(HistoryError::UserNotFound));
        assert_eq!(
            history.get_conversation("alice", "zzz").await,
            Err(HistoryError::ConversationNotFound)
        );
    }
}
