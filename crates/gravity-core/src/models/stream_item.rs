use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::{Message, MessageType};

/// Channel a stream item originates from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Email,
    Whatsapp,
    Slack,
    Teams,
    Calendar,
    Task,
    Youtube,
    Linkedin,
    Twitter,
}

impl Source {
    /// Social feeds support the "summarize" command
    pub fn is_social(&self) -> bool {
        matches!(self, Self::Youtube | Self::Linkedin | Self::Twitter)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank, lower comes first
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Lenient query-string parsing: unknown values are treated as absent
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: None,
            avatar: None,
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_avatar(mut self, avatar: &str) -> Self {
        self.avatar = Some(avatar.to_string());
        self
    }
}

/// One unified-inbox entry: a conversation, event or content piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamItem {
    pub id: String,
    pub title: String,
    pub source: Source,
    pub priority: Priority,
    pub unread: bool,
    pub snippet: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub participants: Vec<User>,
    /// Append-only, in send order
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl StreamItem {
    /// Mark as read. Returns true if the item was unread before.
    pub fn mark_read(&mut self) -> bool {
        std::mem::replace(&mut self.unread, false)
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn find_message(&self, message_id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == message_id)
    }

    pub fn find_message_mut(&mut self, message_id: &str) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == message_id)
    }

    /// Messages carrying calendar event details
    pub fn event_messages_mut(&mut self) -> impl Iterator<Item = &mut Message> {
        self.messages
            .iter_mut()
            .filter(|m| m.kind == MessageType::Event && m.event_details.is_some())
    }
}
