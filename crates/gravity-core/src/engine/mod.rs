//! Pure stream logic shared by the server handlers and the client store.

pub mod commands;
pub mod drafts;
pub mod ranking;

pub use commands::{interpret, send_message, update_event_time, Command, EventWindow};
pub use drafts::{refine_draft, DraftRotation, Tone};
pub use ranking::{paginate, rank_items, unread_count, Page, PageLimits};
