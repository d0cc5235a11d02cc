use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, SecondsFormat, Utc};
use std::cmp::{Ordering, Reverse};

use crate::constants::{DEFAULT_STREAM_LIMIT, MAX_STREAM_LIMIT};
use crate::models::{Priority, StreamFilter, StreamItem};

/// Priority rank ascending, then newest first
fn sort_key(item: &StreamItem) -> (u8, Reverse<DateTime<Utc>>) {
    (item.priority.rank(), Reverse(item.timestamp))
}

fn compare(a: &StreamItem, b: &StreamItem) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Filter and order the stream. `sort_by` is stable, so equal keys keep
/// their collection order.
pub fn rank_items<'a>(
    items: &'a [StreamItem],
    filter: StreamFilter,
    priority: Option<Priority>,
) -> Vec<&'a StreamItem> {
    let mut ranked: Vec<&StreamItem> = items
        .iter()
        .filter(|item| filter.matches(item))
        .filter(|item| priority.map_or(true, |p| item.priority == p))
        .collect();
    ranked.sort_by(|a, b| compare(a, b));
    ranked
}

pub fn unread_count(items: &[StreamItem]) -> usize {
    items.iter().filter(|item| item.unread).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default: usize,
    pub max: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default: DEFAULT_STREAM_LIMIT,
            max: MAX_STREAM_LIMIT,
        }
    }
}

impl PageLimits {
    /// Missing or zero means default; anything above max is clamped
    pub fn clamp(&self, requested: Option<usize>) -> usize {
        match requested {
            None | Some(0) => self.default.min(self.max).max(1),
            Some(n) => n.min(self.max).max(1),
        }
    }
}

/// One page of the ranked stream
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub items: Vec<&'a StreamItem>,
    /// Cursor for the next page, None on the last page
    pub cursor: Option<String>,
    pub has_more: bool,
    /// Size of the ranked subset before paging
    pub total_count: usize,
}

/// Sort position of the last item on a page. It outlives the item's
/// membership in the filtered set, so a page still resumes in place after
/// its anchor was marked read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorKey {
    pub rank: u8,
    pub timestamp: DateTime<Utc>,
    pub id: String,
}

impl CursorKey {
    pub fn of(item: &StreamItem) -> Self {
        Self {
            rank: item.priority.rank(),
            timestamp: item.timestamp,
            id: item.id.clone(),
        }
    }

    /// True if `item` ranks strictly after this position
    fn precedes(&self, item: &StreamItem) -> bool {
        sort_key(item) > (self.rank, Reverse(self.timestamp))
    }
}

/// `rank|timestamp|id`, URL-safe base64. The id goes last since it may
/// contain the separator.
pub fn encode_cursor(key: &CursorKey) -> String {
    let raw = format!(
        "{}|{}|{}",
        key.rank,
        key.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
        key.id
    );
    URL_SAFE_NO_PAD.encode(raw.as_bytes())
}

pub fn decode_cursor(cursor: &str) -> Option<CursorKey> {
    let bytes = URL_SAFE_NO_PAD.decode(cursor.trim()).ok()?;
    let raw = String::from_utf8(bytes).ok()?;
    let mut parts = raw.splitn(3, '|');
    let rank = parts.next()?.parse().ok()?;
    let timestamp = DateTime::parse_from_rfc3339(parts.next()?)
        .ok()?
        .with_timezone(&Utc);
    let id = parts.next()?.to_string();
    Some(CursorKey {
        rank,
        timestamp,
        id,
    })
}

/// Slice a ranked stream into a page starting right after the position named
/// by `cursor`. If the anchor item is still ranked the page resumes behind
/// it; otherwise at the first item sorting strictly after its key. A cursor
/// that does not decode restarts from the first item.
pub fn paginate<'a>(ranked: Vec<&'a StreamItem>, limit: usize, cursor: Option<&str>) -> Page<'a> {
    let total_count = ranked.len();
    let start = match cursor.and_then(decode_cursor) {
        None => 0,
        Some(key) => match ranked.iter().position(|item| item.id == key.id) {
            Some(pos) => pos + 1,
            None => ranked
                .iter()
                .position(|item| key.precedes(item))
                .unwrap_or(total_count),
        },
    };

    let limit = limit.max(1);
    let end = (start + limit).min(total_count);
    let has_more = end < total_count;
    let items: Vec<&StreamItem> = ranked[start..end].to_vec();
    let cursor = if has_more {
        items.last().map(|item| encode_cursor(&CursorKey::of(item)))
    } else {
        None
    };

    Page {
        items,
        cursor,
        has_more,
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;
    use chrono::Utc;

    fn ids<'a>(items: &[&'a StreamItem]) -> Vec<&'a str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_unread_filter_returns_only_unread() {
        let items = mock_data::stream_items(Utc::now());
        let ranked = rank_items(&items, StreamFilter::Unread, None);
        assert!(!ranked.is_empty());
        assert!(ranked.iter().all(|i| i.unread));
        assert_eq!(ranked.len(), unread_count(&items));
    }

    #[test]
    fn test_ordering_is_priority_then_newest_first() {
        let items = mock_data::stream_items(Utc::now());
        let ranked = rank_items(&items, StreamFilter::All, None);
        assert_eq!(ranked.len(), items.len());
        for pair in ranked.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.priority.rank() <= b.priority.rank());
            if a.priority == b.priority {
                assert!(a.timestamp >= b.timestamp);
            }
        }
        // The calendar item sits in the future, so it leads the high bucket
        assert_eq!(ranked[0].id, "item-2");
        assert_eq!(
            ids(&ranked),
            vec![
                "item-2", "item-3", "item-1", "item-9", "item-8", "item-5", "item-6", "item-4",
                "item-7", "item-10"
            ]
        );
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let now = Utc::now();
        let mut items = mock_data::stream_items(now);
        for item in items.iter_mut() {
            item.timestamp = now;
            item.priority = Priority::Medium;
        }
        let ranked = rank_items(&items, StreamFilter::All, None);
        let expected: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids(&ranked), expected);
    }

    #[test]
    fn test_priority_param_combines_with_filter() {
        let items = mock_data::stream_items(Utc::now());
        let ranked = rank_items(&items, StreamFilter::Unread, Some(Priority::Medium));
        assert_eq!(ids(&ranked), vec!["item-8", "item-5", "item-6"]);

        let high = rank_items(&items, StreamFilter::High, None);
        assert!(high.iter().all(|i| i.priority == Priority::High));
        assert_eq!(high.len(), 4);
    }

    #[test]
    fn test_paging_visits_every_item_once() {
        let items = mock_data::stream_items(Utc::now());
        let all = ids(&rank_items(&items, StreamFilter::All, None));

        let mut visited = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let page = paginate(rank_items(&items, StreamFilter::All, None), 3, cursor.as_deref());
            assert_eq!(page.total_count, items.len());
            visited.extend(ids(&page.items));
            if !page.has_more {
                assert!(page.cursor.is_none());
                break;
            }
            cursor = page.cursor;
        }
        assert_eq!(visited, all);
    }

    #[test]
    fn test_bad_cursor_restarts_from_beginning() {
        let items = mock_data::stream_items(Utc::now());
        let first = paginate(rank_items(&items, StreamFilter::All, None), 2, Some("!!not-base64!!"));
        assert_eq!(ids(&first.items), vec!["item-2", "item-3"]);

        // Bare ids are not positions
        let legacy = URL_SAFE_NO_PAD.encode("item-3");
        let page = paginate(rank_items(&items, StreamFilter::All, None), 2, Some(&legacy));
        assert_eq!(ids(&page.items), vec!["item-2", "item-3"]);
    }

    #[test]
    fn test_unknown_anchor_resumes_by_key() {
        let items = mock_data::stream_items(Utc::now());
        let item_1 = items.iter().find(|i| i.id == "item-1").unwrap();
        let vanished = CursorKey {
            id: "item-999".to_string(),
            ..CursorKey::of(item_1)
        };
        let page = paginate(
            rank_items(&items, StreamFilter::All, None),
            2,
            Some(&encode_cursor(&vanished)),
        );
        // item-1 itself sorts equal, not after
        assert_eq!(ids(&page.items), vec!["item-9", "item-8"]);
    }

    #[test]
    fn test_anchor_marked_read_between_pages() {
        let mut items = mock_data::stream_items(Utc::now());
        let first = paginate(rank_items(&items, StreamFilter::Unread, None), 3, None);
        let first_ids: Vec<String> = first.items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(first_ids, vec!["item-2", "item-3", "item-1"]);
        let cursor = first.cursor.unwrap();

        items.iter_mut().find(|i| i.id == "item-1").unwrap().mark_read();

        let mut seen = first_ids.clone();
        let mut cursor = Some(cursor);
        while let Some(c) = cursor.take() {
            let page = paginate(rank_items(&items, StreamFilter::Unread, None), 3, Some(&c));
            seen.extend(page.items.iter().map(|i| i.id.clone()));
            cursor = page.cursor;
        }
        assert_eq!(
            seen,
            vec!["item-2", "item-3", "item-1", "item-9", "item-8", "item-5", "item-6"]
        );
    }

    #[test]
    fn test_cursor_round_trip() {
        let items = mock_data::stream_items(Utc::now());
        let key = CursorKey::of(&items[6]);
        assert_eq!(decode_cursor(&encode_cursor(&key)), Some(key));

        let piped = CursorKey {
            id: "item|with|pipes".to_string(),
            ..CursorKey::of(&items[0])
        };
        assert_eq!(decode_cursor(&encode_cursor(&piped)), Some(piped));
    }

    #[test]
    fn test_limits_clamp() {
        let limits = PageLimits::default();
        assert_eq!(limits.clamp(None), 20);
        assert_eq!(limits.clamp(Some(0)), 20);
        assert_eq!(limits.clamp(Some(5)), 5);
        assert_eq!(limits.clamp(Some(500)), 100);
    }
}
