use chrono::{DateTime, Utc};

use crate::engine::{self, DraftRotation};
use crate::models::{Message, StreamFilter, StreamItem};

/// Client-side mirror of the stream for optimistic updates.
///
/// Every mutation goes through the same `engine` functions the server uses,
/// so a local update and the server's answer agree. Mutations naming an
/// unknown item, message or insight are no-ops.
pub struct ClientStore {
    items: Vec<StreamItem>,
    selected_item_id: Option<String>,
    filter: StreamFilter,
    /// Message shown in the full-context view: (item id, message id)
    context_message: Option<(String, String)>,
    drafts: DraftRotation,
}

impl ClientStore {
    pub fn new(items: Vec<StreamItem>, drafts: DraftRotation) -> Self {
        Self {
            items,
            selected_item_id: None,
            filter: StreamFilter::All,
            context_message: None,
            drafts,
        }
    }

    fn item_mut(&mut self, item_id: &str) -> Option<&mut StreamItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }

    // ===== Getters =====

    pub fn items(&self) -> &[StreamItem] {
        &self.items
    }

    pub fn filter(&self) -> StreamFilter {
        self.filter
    }

    pub fn selected_item_id(&self) -> Option<&str> {
        self.selected_item_id.as_deref()
    }

    pub fn get_item(&self, item_id: &str) -> Option<&StreamItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn selected_item(&self) -> Option<&StreamItem> {
        self.selected_item_id.as_deref().and_then(|id| self.get_item(id))
    }

    /// Items for the active filter, ranked
    pub fn filtered_items(&self) -> Vec<&StreamItem> {
        engine::rank_items(&self.items, self.filter, None)
    }

    pub fn unread_count(&self) -> usize {
        engine::unread_count(&self.items)
    }

    pub fn context_message(&self) -> Option<&Message> {
        let (item_id, message_id) = self.context_message.as_ref()?;
        self.get_item(item_id)?.find_message(message_id)
    }

    // ===== Mutations =====

    pub fn set_filter(&mut self, filter: StreamFilter) {
        self.filter = filter;
    }

    /// Select an item (or clear the selection). Viewing marks it read.
    pub fn select_item(&mut self, item_id: Option<&str>) {
        self.selected_item_id = item_id.map(str::to_string);
        if let Some(id) = item_id {
            self.mark_as_read(id);
        }
    }

    pub fn mark_as_read(&mut self, item_id: &str) {
        if let Some(item) = self.item_mut(item_id) {
            item.mark_read();
        }
    }

    /// Append a user message and any follow-ups. Returns the number of
    /// messages appended, 0 for an unknown item.
    pub fn send_message(&mut self, item_id: &str, content: &str, now: DateTime<Utc>) -> usize {
        match self.item_mut(item_id) {
            Some(item) => engine::send_message(item, content, now),
            None => 0,
        }
    }

    pub fn update_event_time(&mut self, item_id: &str, message_id: &str, start: &str, end: &str) {
        if let Some(item) = self.item_mut(item_id) {
            engine::update_event_time(item, message_id, start, end);
        }
    }

    pub fn refine_draft(&mut self, item_id: &str, message_id: &str, insight_id: &str, refinement: &str) {
        if let Some(insight) = self
            .item_mut(item_id)
            .and_then(|item| item.find_message_mut(message_id))
            .and_then(|message| message.insight_mut(insight_id))
        {
            insight.content = engine::refine_draft(&insight.content, refinement);
        }
    }

    pub fn regenerate_draft(&mut self, item_id: &str, message_id: &str, insight_id: &str) {
        let Some(insight) = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .and_then(|item| item.find_message_mut(message_id))
            .and_then(|message| message.insight_mut(insight_id))
        else {
            return;
        };
        insight.content = self.drafts.next_draft().to_string();
    }

    pub fn open_context(&mut self, item_id: &str, message_id: &str) {
        self.context_message = Some((item_id.to_string(), message_id.to_string()));
    }

    pub fn close_context(&mut self) {
        self.context_message = None;
    }

    // ===== Server sync =====

    /// Replace the whole mirror with a fresh server snapshot. The selection
    /// survives only if the selected item is still present.
    pub fn replace_items(&mut self, items: Vec<StreamItem>) {
        self.items = items;
        if let Some(id) = self.selected_item_id.clone() {
            if self.get_item(&id).is_none() {
                self.selected_item_id = None;
            }
        }
    }

    /// Apply an authoritative server copy of one item, appending it if new
    pub fn upsert_item(&mut self, item: StreamItem) {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::drafts::REGENERATED_DRAFTS;
    use crate::mock_data;
    use crate::models::Sender;

    fn store() -> ClientStore {
        ClientStore::new(mock_data::stream_items(Utc::now()), DraftRotation::new(7))
    }

    #[test]
    fn test_select_marks_read() {
        let mut store = store();
        let unread = store.unread_count();
        assert!(store.get_item("item-1").unwrap().unread);

        store.select_item(Some("item-1"));

        assert_eq!(store.selected_item().unwrap().id, "item-1");
        assert!(!store.get_item("item-1").unwrap().unread);
        assert_eq!(store.unread_count(), unread - 1);

        // Idempotent
        store.mark_as_read("item-1");
        assert_eq!(store.unread_count(), unread - 1);

        store.select_item(None);
        assert!(store.selected_item().is_none());
    }

    #[test]
    fn test_filtered_items_follow_filter() {
        let mut store = store();
        assert_eq!(store.filtered_items().len(), 10);

        store.set_filter(StreamFilter::Unread);
        store.select_item(Some("item-3"));
        let unread = store.filtered_items();
        assert!(unread.iter().all(|i| i.unread));
        assert!(unread.iter().all(|i| i.id != "item-3"));
    }

    #[test]
    fn test_send_message_matches_engine() {
        let mut store = store();
        assert_eq!(store.send_message("item-2", "reschedule to 4pm", Utc::now()), 2);
        let item = store.get_item("item-2").unwrap();
        let last = item.messages.last().unwrap();
        assert_eq!(last.sender, Sender::System);

        assert_eq!(store.send_message("item-404", "hello", Utc::now()), 0);
    }

    #[test]
    fn test_refine_and_regenerate_target_one_insight() {
        let mut store = store();
        store.refine_draft("item-1", "msg-1-1", "insight-1", "keep it brief");
        let content = |store: &ClientStore| {
            store.get_item("item-1").unwrap().messages[0].ai_insights[0]
                .content
                .clone()
        };
        assert_eq!(content(&store), "Got it, will review. Thanks!");

        store.regenerate_draft("item-1", "msg-1-1", "insight-1");
        assert!(REGENERATED_DRAFTS.contains(&content(&store).as_str()));

        // Unknown insight leaves everything alone
        let before = store.items().to_vec();
        store.refine_draft("item-1", "msg-1-1", "insight-999", "formal");
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_blank_refinement_leaves_draft_alone() {
        let mut store = store();
        let before = store.items().to_vec();
        store.refine_draft("item-1", "msg-1-1", "insight-1", "");
        store.refine_draft("item-1", "msg-1-1", "insight-1", "   ");
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_context_message_lookup() {
        let mut store = store();
        store.open_context("item-9", "msg-9-1");
        assert!(store.context_message().unwrap().full_content.is_some());
        store.close_context();
        assert!(store.context_message().is_none());
    }

    #[test]
    fn test_replace_and_upsert() {
        let mut store = store();
        store.select_item(Some("item-4"));

        let mut fresh = mock_data::stream_items(Utc::now());
        fresh.retain(|i| i.id != "item-4");
        store.replace_items(fresh);
        assert!(store.selected_item_id().is_none());
        assert_eq!(store.items().len(), 9);

        let mut updated = store.get_item("item-1").unwrap().clone();
        updated.unread = false;
        store.upsert_item(updated);
        assert!(!store.get_item("item-1").unwrap().unread);
        assert_eq!(store.items().len(), 9);
    }
}
