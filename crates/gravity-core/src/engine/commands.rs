//! Natural-language commands typed into a stream item's reply box.
//!
//! Two commands are understood: "reschedule ... 4pm" on calendar
//! items and "summarize" on social items. Anything else is a plain message.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::models::{AIInsight, Message, Source, StreamItem};

/// Hour followed by an explicit am/pm marker: "4pm", "11 AM", "4:00 PM".
/// The marker must end a word, so "2 amazing" is not a time.
static RESCHEDULE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(?::00)?\s*(am|pm)\b").expect("Invalid reschedule time regex")
});

const KEY_POINTS_LABEL: &str = "📊 Key Points";

const DETAILED_SUMMARY: &str = "Based on my analysis, here are the most important points:\n\n1. The main argument centers around emerging technology trends\n2. Several actionable insights are provided\n3. The conclusion suggests further reading on related topics\n\nWould you like me to extract any specific information?";

/// A one-hour meeting slot in 12-hour display form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventWindow {
    pub start_time: String,
    pub end_time: String,
}

impl EventWindow {
    /// Build a slot from a 12-hour clock hour. Returns None outside 1..=12.
    pub fn from_hour(hour: u32, pm: bool) -> Option<Self> {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let hour_24 = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        let start = NaiveTime::from_hms_opt(hour_24, 0, 0)?;
        // NaiveTime addition wraps at midnight
        let end = start + Duration::hours(1);
        Some(Self {
            start_time: start.format("%-I:%M %p").to_string(),
            end_time: end.format("%-I:%M %p").to_string(),
        })
    }

    /// First valid "<hour> am|pm" mention in free text
    pub fn parse(content: &str) -> Option<Self> {
        RESCHEDULE_TIME.captures_iter(content).find_map(|caps| {
            let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
            let pm = caps.get(2)?.as_str().eq_ignore_ascii_case("pm");
            Self::from_hour(hour, pm)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Reschedule(EventWindow),
    Summarize(Source),
}

/// Decide which command, if any, a user message triggers on an item of `source`
pub fn interpret(source: Source, content: &str) -> Option<Command> {
    let lower = content.to_lowercase();

    if source == Source::Calendar && lower.contains("reschedule") {
        return EventWindow::parse(&lower).map(Command::Reschedule);
    }

    if source.is_social() && lower.contains("summarize") {
        return Some(Command::Summarize(source));
    }

    None
}

fn summary_text(source: Source) -> &'static str {
    match source {
        Source::Youtube => "📺 **Video Summary**\n\nThis video discusses the latest trends in AI development, focusing on three key areas:\n\n• Large language models and their applications\n• Edge computing and on-device AI\n• Ethical considerations in AI deployment",
        Source::Linkedin => "💼 **Post Summary**\n\nThe author shares insights on professional growth:\n\n• Importance of continuous learning\n• Building meaningful connections\n• Embracing change in the workplace",
        Source::Twitter => "🐦 **Thread Summary**\n\nKey takeaways from this thread:\n\n• Market trends for Q4\n• Predictions for the upcoming quarter\n• Industry expert opinions",
        _ => "Summary not available for this content type.",
    }
}

/// Messages Gravity appends in response to a command
pub fn follow_ups(command: &Command, now: DateTime<Utc>) -> Vec<Message> {
    match command {
        Command::Reschedule(window) => vec![Message::from_system(
            format!(
                "✓ I've updated the meeting time to {}. Notifications have been sent to all attendees.",
                window.start_time
            ),
            now,
        )],
        Command::Summarize(source) => vec![Message::from_system(summary_text(*source), now)
            .with_insight(AIInsight::analysis(KEY_POINTS_LABEL, DETAILED_SUMMARY))],
    }
}

fn apply_window(item: &mut StreamItem, window: &EventWindow) {
    for message in item.event_messages_mut() {
        if let Some(event) = message.event_details.as_mut() {
            event.start_time = window.start_time.clone();
            event.end_time = window.end_time.clone();
        }
    }
}

/// Append a user message, then run the command interpreter over it.
/// Returns the number of messages appended (always at least one).
pub fn send_message(item: &mut StreamItem, content: &str, now: DateTime<Utc>) -> usize {
    item.push_message(Message::from_user(content, now));

    let Some(command) = interpret(item.source, content) else {
        return 1;
    };

    tracing::debug!(item_id = %item.id, ?command, "Interpreted message as command");

    if let Command::Reschedule(window) = &command {
        apply_window(item, window);
    }

    let replies = follow_ups(&command, now);
    let appended = 1 + replies.len();
    item.messages.extend(replies);
    appended
}

/// Set the event times of one message directly. Returns false if the message
/// does not exist or carries no event.
pub fn update_event_time(item: &mut StreamItem, message_id: &str, start: &str, end: &str) -> bool {
    let Some(event) = item
        .find_message_mut(message_id)
        .and_then(|m| m.event_details.as_mut())
    else {
        return false;
    };
    event.start_time = start.to_string();
    event.end_time = end.to_string();
    true
}
