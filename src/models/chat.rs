use serde::{ Serialize, Deserialize };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self { role: Role::Bot, content: content.into() }
    }
}

/// One thread with the remote gateway. `first_question` is fixed when the
/// conversation is created and never rewritten.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub conversation_id: String,
    pub first_question: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(conversation_id: &str, first_question: &str) -> Self {
        Self {
            conversation_id: conversation_id.to_string(),
            first_question: first_question.to_string(),
            messages: Vec::new(),
        }
    }

    /// Appends a user turn followed by the bot's reply.
    pub fn push_exchange(&mut self, query: &str, reply: &str) {
        self.messages.push(ChatMessage::user(query));
        self.messages.push(ChatMessage::bot(reply));
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub conversation_id: String,
    pub first_question: String,
}

impl From<&Conversation> for ConversationSummary {
    fn from(conversation: &Conversation) -> Self {
        Self {
            conversation_id: conversation.conversation_id.clone(),
            first_question: conversation.first_question.clone(),
        }
    }
}
