use gravity_core::models::{Priority, Source, StreamFilter, StreamItem};
use gravity_core::ClientStore;
use serde::Serialize;

/// One ranked row of the inbox view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxRow {
    pub id: String,
    pub title: String,
    pub source: Source,
    pub priority: Priority,
    pub unread: bool,
    pub message_count: usize,
}

impl From<&StreamItem> for InboxRow {
    fn from(item: &StreamItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            source: item.source,
            priority: item.priority,
            unread: item.unread,
            message_count: item.messages.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxSummary {
    pub filter: StreamFilter,
    pub unread_count: usize,
    pub items: Vec<InboxRow>,
}

/// Snapshot of what the inbox shows for the store's active filter
pub fn summarize(store: &ClientStore) -> InboxSummary {
    InboxSummary {
        filter: store.filter(),
        unread_count: store.unread_count(),
        items: store
            .filtered_items()
            .into_iter()
            .map(InboxRow::from)
            .collect(),
    }
}
