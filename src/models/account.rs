use serde::{ Serialize, Deserialize };
use std::collections::BTreeMap;
use crate::models::chat::Conversation;

/// The persisted document: username to account. Sorted so the file on disk
/// keeps a stable key order between saves.
pub type Users = BTreeMap<String, Account>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub password: String,
    #[serde(default)]
    pub conversations: Vec<Conversation>,
}

impl Account {
    pub fn new(password: &str) -> Self {
        Self {
            password: password.to_string(),
            conversations: Vec::new(),
        }
    }

    pub fn conversation(&self, conversation_id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.conversation_id == conversation_id)
    }

    /// Returns the conversation with this id, creating it with `first_question`
    /// at the end of the list when it does not exist yet.
    pub fn conversation_or_insert(
        &mut self,
        conversation_id: &str,
        first_question: &str
    ) -> &mut Conversation {
        let idx = match self.conversations.iter().position(|c| c.conversation_id == conversation_id) {
            Some(idx) => idx,
            None => {
                self.conversations.push(Conversation::new(conversation_id, first_question));
                self.conversations.len() - 1
            }
        };
        &mut self.conversations[idx]
    }
}
