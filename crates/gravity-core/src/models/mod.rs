pub mod filter;
pub mod insight;
pub mod message;
pub mod stream_item;

pub use filter::StreamFilter;
pub use insight::{AIInsight, InsightType};
pub use message::{
    Attachment, CalendarEvent, Message, MessageType, Sender, SocialContent, SocialPlatform,
    SocialStats,
};
pub use stream_item::{Priority, Source, StreamItem, User};

/// Generate a prefixed unique id for synthesized entities (`msg-<uuid>`)
pub(crate) fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}
