//! Seed dataset for the mock backend and the offline client store.
//!
//! Timestamps are relative to the `now` passed in so repeated runs (and tests)
//! see the same relative layout: items minutes to hours in the past, one
//! calendar event slightly in the future.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    AIInsight, Attachment, CalendarEvent, InsightType, Message, MessageType, Priority, Sender,
    SocialContent, SocialPlatform, SocialStats, Source, StreamItem, User,
};

fn minutes_ago(now: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    now - Duration::minutes(minutes)
}

fn insight(id: &str, kind: InsightType, label: &str, content: &str) -> AIInsight {
    AIInsight {
        id: id.to_string(),
        kind,
        label: label.to_string(),
        content: content.to_string(),
        is_draft: kind == InsightType::Draft,
    }
}

fn attachment(id: &str, name: &str, mime_type: &str, size: u64, url: &str) -> Attachment {
    Attachment {
        id: id.to_string(),
        name: name.to_string(),
        mime_type: mime_type.to_string(),
        size,
        url: url.to_string(),
    }
}

/// Message from another participant
fn from_other(id: &str, sender: User, content: &str, timestamp: DateTime<Utc>) -> Message {
    Message {
        id: id.to_string(),
        sender: Sender::Other,
        sender_info: Some(sender),
        content: content.to_string(),
        timestamp,
        kind: MessageType::Text,
        event_details: None,
        social_content: None,
        ai_insights: Vec::new(),
        attachments: Vec::new(),
        full_content: None,
    }
}

/// System notification wrapping an event or social payload
fn notification(id: &str, kind: MessageType, content: &str, timestamp: DateTime<Utc>) -> Message {
    Message {
        id: id.to_string(),
        sender: Sender::System,
        sender_info: None,
        content: content.to_string(),
        timestamp,
        kind,
        event_details: None,
        social_content: None,
        ai_insights: Vec::new(),
        attachments: Vec::new(),
        full_content: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    title: &str,
    source: Source,
    priority: Priority,
    unread: bool,
    snippet: &str,
    timestamp: DateTime<Utc>,
    participants: Vec<User>,
    messages: Vec<Message>,
) -> StreamItem {
    StreamItem {
        id: id.to_string(),
        title: title.to_string(),
        source,
        priority,
        unread,
        snippet: snippet.to_string(),
        timestamp,
        participants,
        messages,
    }
}

/// Build the full mock stream
pub fn stream_items(now: DateTime<Utc>) -> Vec<StreamItem> {
    vec![
        revenue_report(now),
        product_sync(now),
        deployment_issue(now),
        family_group(now),
        ai_trends_video(now),
        connection_request(now),
        trending_thread(now),
        design_review(now),
        auth_bug(now),
        newsletter(now),
    ]
}

fn revenue_report(now: DateTime<Utc>) -> StreamItem {
    let ts = minutes_ago(now, 30);
    let sarah = User::new("user-1", "Sarah Chen").with_email("sarah.chen@company.com");

    let mut message = from_other(
        "msg-1-1",
        sarah.clone(),
        "Hi,\n\nPlease review the attached Q4 projections before tomorrow's board meeting. We need your sign-off on the marketing budget allocation.\n\nThe key highlights:\n• Revenue up 23% YoY\n• Customer acquisition cost down 15%\n• New market expansion on track\n\nLet me know if you have any questions.\n\nBest,\nSarah",
        ts,
    );
    message.attachments = vec![
        attachment("att-1", "Q4_Revenue_Report.pdf", "application/pdf", 2_456_000, "/files/q4-report.pdf"),
        attachment("att-2", "Budget_Allocation.xlsx", "application/xlsx", 156_000, "/files/budget.xlsx"),
    ];
    message.ai_insights = vec![insight(
        "insight-1",
        InsightType::Draft,
        "✨ Draft Available",
        "Hi Sarah,\n\nThank you for the comprehensive report. I've reviewed the Q4 projections and the numbers look solid. I approve the marketing budget allocation as proposed.\n\nA few notes:\n• Great work on reducing CAC\n• Let's discuss the new market expansion timeline in tomorrow's meeting\n\nBest regards",
    )];
    message.full_content = Some(
        "<!DOCTYPE html><html><body style=\"font-family: Arial, sans-serif;\"><p>Hi,</p><p>Please review the attached Q4 projections before tomorrow's board meeting. We need your sign-off on the marketing budget allocation.</p><p><strong>The key highlights:</strong></p><ul><li>Revenue up 23% YoY</li><li>Customer acquisition cost down 15%</li><li>New market expansion on track</li></ul><p>Let me know if you have any questions.</p><p>Best,<br>Sarah</p></body></html>".to_string(),
    );

    item(
        "item-1",
        "Q4 Revenue Report - Action Required",
        Source::Email,
        Priority::High,
        true,
        "Please review the attached Q4 projections before tomorrow's board meeting...",
        ts,
        vec![sarah.with_avatar("/avatars/sarah.jpg")],
        vec![message],
    )
}

fn product_sync(now: DateTime<Utc>) -> StreamItem {
    // Starts in 15 minutes
    let ts = minutes_ago(now, -15);
    let attendees = vec![
        User::new("user-2", "Mike Johnson"),
        User::new("user-3", "Emily Davis"),
        User::new("user-4", "Alex Kim"),
    ];

    let mut message = notification("msg-2-1", MessageType::Event, "Upcoming meeting", ts);
    message.event_details = Some(CalendarEvent {
        id: "event-1".to_string(),
        title: "Product Sync".to_string(),
        start_time: "2:00 PM".to_string(),
        end_time: "3:00 PM".to_string(),
        attendees: attendees.clone(),
        location: Some("Conference Room A / Zoom".to_string()),
        meeting_link: Some("https://zoom.us/j/123456789".to_string()),
        description: Some(
            "Weekly sync to discuss product roadmap, current sprint progress, and blockers."
                .to_string(),
        ),
    });

    let participants = attendees
        .into_iter()
        .zip(["/avatars/mike.jpg", "/avatars/emily.jpg", "/avatars/alex.jpg"])
        .map(|(user, avatar)| user.with_avatar(avatar))
        .collect();

    item(
        "item-2",
        "Product Sync - Starting in 15 minutes",
        Source::Calendar,
        Priority::High,
        true,
        "Weekly product team sync with engineering leads",
        ts,
        participants,
        vec![message],
    )
}

fn deployment_issue(now: DateTime<Utc>) -> StreamItem {
    let bot = User::new("user-5", "DevOps Bot");

    let mut alert = from_other(
        "msg-3-1",
        bot.clone(),
        "🚨 @channel Production deployment failed.\n\nError: Database migration timeout\nBuild: #4521\nCommit: abc123f\n\nRolling back to previous version...",
        minutes_ago(now, 5),
    );
    alert.ai_insights = vec![insight(
        "insight-2",
        InsightType::Analysis,
        "⚠️ Risk Detected",
        "This deployment failure appears to be related to the new user authentication migration. The timeout suggests the migration script may need optimization for the production dataset size.\n\nRecommended actions:\n1. Check migration logs in CloudWatch\n2. Review the authentication table indexes\n3. Consider batched migration approach",
    )];
    let reply = from_other(
        "msg-3-2",
        User::new("user-6", "John Developer"),
        "On it! Checking the logs now.",
        minutes_ago(now, 3),
    );

    item(
        "item-3",
        "#engineering - Deployment Issue",
        Source::Slack,
        Priority::High,
        true,
        "@channel Production deployment failed. Rolling back...",
        minutes_ago(now, 5),
        vec![bot],
        vec![alert, reply],
    )
}

fn family_group(now: DateTime<Utc>) -> StreamItem {
    let mom = User::new("user-7", "Mom");
    let sister = User::new("user-9", "Sister");

    item(
        "item-4",
        "Family Group",
        Source::Whatsapp,
        Priority::Low,
        false,
        "Mom: Don't forget dinner on Sunday!",
        minutes_ago(now, 120),
        vec![mom.clone(), User::new("user-8", "Dad"), sister.clone()],
        vec![
            from_other(
                "msg-4-1",
                mom,
                "Don't forget dinner on Sunday! We're having your favorite 🍝",
                minutes_ago(now, 120),
            ),
            from_other("msg-4-2", sister, "I'll bring dessert!", minutes_ago(now, 90)),
        ],
    )
}

fn ai_trends_video(now: DateTime<Utc>) -> StreamItem {
    let ts = minutes_ago(now, 240);

    let mut message =
        notification("msg-5-1", MessageType::Social, "New video from a channel you follow", ts);
    message.social_content = Some(SocialContent {
        id: "yt-1".to_string(),
        platform: SocialPlatform::Youtube,
        author: "TechInsider".to_string(),
        author_avatar: Some("/avatars/techinsider.jpg".to_string()),
        thumbnail: Some("https://picsum.photos/seed/aitrends/640/360".to_string()),
        title: Some("The Future of AI: What's Coming in 2025".to_string()),
        description: Some(
            "In this video, we explore the emerging trends in artificial intelligence, from large language models to autonomous systems. What does the future hold?"
                .to_string(),
        ),
        stats: SocialStats {
            views: Some(245_000),
            likes: Some(12_400),
            comments: Some(892),
            shares: None,
        },
        url: "https://youtube.com/watch?v=example123".to_string(),
    });
    message.ai_insights = vec![insight(
        "insight-3",
        InsightType::Suggestion,
        "💡 Quick Summary Available",
        "This 18-minute video covers:\n\n1. **LLM Evolution** - How models are becoming more efficient\n2. **Edge AI** - On-device processing trends\n3. **AI Regulation** - Upcoming policy changes\n4. **Industry Impact** - Which sectors will transform first\n\nKey takeaway: The presenter predicts a shift toward specialized AI agents by mid-2025.",
    )];

    item(
        "item-5",
        "New AI Trends 2025 - Must Watch",
        Source::Youtube,
        Priority::Medium,
        true,
        "The Future of AI: What's Coming Next",
        ts,
        vec![User::new("channel-1", "TechInsider")],
        vec![message],
    )
}

fn connection_request(now: DateTime<Utc>) -> StreamItem {
    let ts = minutes_ago(now, 360);

    let mut message = notification("msg-6-1", MessageType::Social, "New connection request", ts);
    message.social_content = Some(SocialContent {
        id: "li-post-1".to_string(),
        platform: SocialPlatform::Linkedin,
        author: "Jane Smith".to_string(),
        author_avatar: Some("/avatars/jane.jpg".to_string()),
        thumbnail: None,
        title: Some("VP of Engineering at TechCorp".to_string()),
        description: Some(
            "Hi! I came across your profile and was impressed by your work on distributed systems. I'd love to connect and discuss potential collaboration opportunities."
                .to_string(),
        ),
        stats: SocialStats {
            views: Some(0),
            ..SocialStats::default()
        },
        url: "https://linkedin.com/in/janesmith".to_string(),
    });
    message.ai_insights = vec![insight(
        "insight-4",
        InsightType::Draft,
        "✨ Draft Response",
        "Hi Jane,\n\nThank you for reaching out! I'd be happy to connect. Your work at TechCorp on cloud infrastructure looks fascinating.\n\nI'd love to learn more about your team's approach to distributed systems. Would you be open to a brief call next week?\n\nBest regards",
    )];

    item(
        "item-6",
        "Connection Request - Jane Smith",
        Source::Linkedin,
        Priority::Medium,
        true,
        "VP of Engineering at TechCorp wants to connect",
        ts,
        vec![User::new("li-1", "Jane Smith").with_email("jane.smith@techcorp.com")],
        vec![message],
    )
}

fn trending_thread(now: DateTime<Utc>) -> StreamItem {
    let ts = minutes_ago(now, 480);

    let mut message = notification(
        "msg-7-1",
        MessageType::Social,
        "Trending thread from someone you follow",
        ts,
    );
    message.social_content = Some(SocialContent {
        id: "tw-post-1".to_string(),
        platform: SocialPlatform::Twitter,
        author: "@venturecap".to_string(),
        author_avatar: Some("/avatars/venturecap.jpg".to_string()),
        thumbnail: None,
        title: Some("The state of startup funding in 2025".to_string()),
        description: Some(
            "🧵 Thread: After analyzing 500+ Series A rounds this year, here's what I've learned about the current funding landscape...\n\n1/ Valuations are finally normalizing after the 2021 peak..."
                .to_string(),
        ),
        stats: SocialStats {
            views: None,
            likes: Some(4_500),
            comments: Some(234),
            shares: Some(1_200),
        },
        url: "https://twitter.com/venturecap/status/123456789".to_string(),
    });

    item(
        "item-7",
        "Trending in Tech",
        Source::Twitter,
        Priority::Low,
        false,
        "Thread about startup funding trends going viral",
        ts,
        vec![User::new("tw-1", "@venturecap")],
        vec![message],
    )
}

fn design_review(now: DateTime<Utc>) -> StreamItem {
    let ts = minutes_ago(now, 45);
    let lisa = User::new("user-10", "Lisa Designer");

    let mut message = from_other(
        "msg-8-1",
        lisa.clone(),
        "Hey! The new dashboard mockups are ready for review. I've incorporated the feedback from last week's session.\n\nMain changes:\n• Simplified navigation\n• New color scheme for better accessibility\n• Added quick action buttons\n\nLet me know your thoughts!",
        ts,
    );
    message.attachments = vec![attachment(
        "att-3",
        "Dashboard_v2_Mockups.fig",
        "application/figma",
        8_900_000,
        "/files/dashboard.fig",
    )];
    message.ai_insights = vec![insight(
        "insight-5",
        InsightType::Draft,
        "✨ Draft Available",
        "Hi Lisa,\n\nThese look great! The simplified navigation is a big improvement. I especially like the new color scheme.\n\nA few thoughts:\n• Can we make the quick action buttons more prominent?\n• The spacing on the sidebar looks a bit tight\n\nOverall, excellent work! Let's sync tomorrow to discuss.\n\nThanks!",
    )];

    item(
        "item-8",
        "Design Review - New Dashboard",
        Source::Teams,
        Priority::Medium,
        true,
        "The new dashboard mockups are ready for review",
        ts,
        vec![lisa],
        vec![message],
    )
}

fn auth_bug(now: DateTime<Utc>) -> StreamItem {
    let ts = minutes_ago(now, 60);
    let qa = User::new("user-11", "QA Team");

    let mut message = from_other(
        "msg-9-1",
        qa.clone(),
        "**Bug Report: JIRA-1234**\n\n**Priority:** Critical\n**Status:** In Progress\n**Assignee:** You\n\n**Description:**\nUsers are unable to login using SSO. The authentication flow fails at the callback step.\n\n**Steps to Reproduce:**\n1. Click 'Login with SSO'\n2. Enter credentials\n3. Observe error on callback\n\n**Expected:** Successful login\n**Actual:** 500 error on callback",
        ts,
    );
    message.ai_insights = vec![insight(
        "insight-6",
        InsightType::Analysis,
        "🔍 Analysis",
        "Based on similar issues in the codebase, this could be related to:\n\n1. **Token expiration** - The SSO token might be expiring before callback\n2. **Redirect URL mismatch** - Check the OAuth config\n3. **Recent changes** - Last commit to auth module was 2 days ago\n\nRecommended: Check the auth middleware logs first.",
    )];
    message.full_content = Some(
        "<div class=\"jira-ticket\"><h1>JIRA-1234: Fix authentication bug</h1><div class=\"field\"><label>Priority:</label><span class=\"critical\">Critical</span></div><div class=\"field\"><label>Status:</label><span>In Progress</span></div><div class=\"description\"><h2>Description</h2><p>Users are unable to login using SSO. The authentication flow fails at the callback step with a 500 error.</p></div></div>".to_string(),
    );

    item(
        "item-9",
        "JIRA-1234: Fix authentication bug",
        Source::Task,
        Priority::High,
        true,
        "Critical: Users unable to login with SSO",
        ts,
        vec![qa],
        vec![message],
    )
}

fn newsletter(now: DateTime<Utc>) -> StreamItem {
    let ts = minutes_ago(now, 720);
    let digest = User::new("newsletter-1", "Tech Digest");

    item(
        "item-10",
        "Weekly Newsletter - Tech Digest",
        Source::Email,
        Priority::Low,
        false,
        "This week: AI breakthroughs, startup news, and more...",
        ts,
        vec![digest.clone()],
        vec![from_other(
            "msg-10-1",
            digest,
            "📰 **This Week in Tech**\n\n• OpenAI announces GPT-5 preview\n• Apple's new AR glasses revealed\n• Bitcoin hits new all-time high\n• SpaceX Starship successful landing\n\nRead the full digest →",
            ts,
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let items = stream_items(Utc::now());
        let ids: HashSet<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
        assert_eq!(items.len(), 10);
    }

    #[test]
    fn test_every_source_is_represented() {
        let items = stream_items(Utc::now());
        let sources: HashSet<_> = items.iter().map(|i| i.source).collect();
        assert_eq!(sources.len(), 9);
    }

    #[test]
    fn test_calendar_item_has_event_details() {
        let now = Utc::now();
        let items = stream_items(now);
        let calendar = items.iter().find(|i| i.source == Source::Calendar).unwrap();
        let event = calendar.messages[0].event_details.as_ref().unwrap();
        assert_eq!(event.start_time, "2:00 PM");
        assert_eq!(event.end_time, "3:00 PM");
        assert!(calendar.timestamp > now);
    }

    #[test]
    fn test_messages_are_append_ordered() {
        for item in stream_items(Utc::now()) {
            for pair in item.messages.windows(2) {
                assert!(pair[0].timestamp <= pair[1].timestamp, "{} out of order", item.id);
            }
        }
    }
}
