use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::insight::AIInsight;
use super::stream_item::User;
use crate::constants::MESSAGE_ID_PREFIX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The inbox owner
    User,
    /// Another participant
    Other,
    /// Synthesized by Gravity itself (confirmations, summaries, notifications)
    System,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Text,
    Event,
    Social,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub name: String,
    /// MIME type
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
    pub url: String,
}

/// Calendar event payload. Times are display strings such as "2:00 PM".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub attendees: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Youtube,
    Linkedin,
    Twitter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialContent {
    pub id: String,
    pub platform: SocialPlatform,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub stats: SocialStats,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_info: Option<User>,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_details: Option<CalendarEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_content: Option<SocialContent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ai_insights: Vec<AIInsight>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Rich HTML body shown in the full-context view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_content: Option<String>,
}

impl Message {
    fn text(sender: Sender, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: super::generate_id(MESSAGE_ID_PREFIX),
            sender,
            sender_info: None,
            content: content.into(),
            timestamp: now,
            kind: MessageType::Text,
            event_details: None,
            social_content: None,
            ai_insights: Vec::new(),
            attachments: Vec::new(),
            full_content: None,
        }
    }

    /// A text message typed by the inbox owner
    pub fn from_user(content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::text(Sender::User, content, now)
    }

    /// A text message synthesized by Gravity
    pub fn from_system(content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::text(Sender::System, content, now)
    }

    pub fn with_insight(mut self, insight: AIInsight) -> Self {
        self.ai_insights.push(insight);
        self
    }

    pub fn insight_mut(&mut self, insight_id: &str) -> Option<&mut AIInsight> {
        self.ai_insights.iter_mut().find(|i| i.id == insight_id)
    }

    /// First insight flagged as a draft reply
    pub fn draft_insight(&self) -> Option<&AIInsight> {
        self.ai_insights.iter().find(|i| i.is_draft)
    }

    pub fn draft_insight_mut(&mut self) -> Option<&mut AIInsight> {
        self.ai_insights.iter_mut().find(|i| i.is_draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InsightType;

    #[test]
    fn test_message_wire_format() {
        let now = Utc::now();
        let message = Message::from_user("Sounds good", now);
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["sender"], "user");
        assert_eq!(json["type"], "text");
        assert_eq!(json["content"], "Sounds good");
        assert!(json["id"].as_str().unwrap().starts_with("msg-"));
        // Optional fields are omitted entirely
        assert!(json.get("aiInsights").is_none());
        assert!(json.get("eventDetails").is_none());
        assert!(json.get("senderInfo").is_none());
    }

    #[test]
    fn test_message_parses_camel_case_payloads() {
        let json = r#"{
            "id": "msg-2-1",
            "sender": "system",
            "content": "Upcoming meeting",
            "timestamp": "2025-01-01T14:00:00Z",
            "type": "event",
            "eventDetails": {
                "id": "event-1",
                "title": "Product Sync",
                "startTime": "2:00 PM",
                "endTime": "3:00 PM",
                "meetingLink": "https://zoom.us/j/123456789"
            },
            "aiInsights": [
                {"id": "insight-1", "type": "draft", "label": "Draft", "content": "Hi", "isDraft": true}
            ]
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.kind, MessageType::Event);
        let event = message.event_details.as_ref().unwrap();
        assert_eq!(event.start_time, "2:00 PM");
        assert!(event.attendees.is_empty());
        assert_eq!(event.meeting_link.as_deref(), Some("https://zoom.us/j/123456789"));
        assert_eq!(message.draft_insight().unwrap().kind, InsightType::Draft);
    }

    #[test]
    fn test_attachment_type_field() {
        let attachment = Attachment {
            id: "att-1".to_string(),
            name: "report.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 2456000,
            url: "/files/report.pdf".to_string(),
        };
        let json = serde_json::to_value(&attachment).unwrap();
        assert_eq!(json["type"], "application/pdf");
        assert_eq!(json["size"], 2456000);
    }
}
