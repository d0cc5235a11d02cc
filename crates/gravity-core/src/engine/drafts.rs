use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::models::Message;

/// Draft used when a message carries no draft insight
pub const DEFAULT_DRAFT: &str =
    "Thank you for reaching out. I'll review this and get back to you shortly.";

const FORMAL_DRAFT: &str = "Dear colleague,\n\nThank you for bringing this to my attention. I will thoroughly review the matter and provide you with a comprehensive response at my earliest convenience.\n\nBest regards";
const FRIENDLY_DRAFT: &str =
    "Hey! Thanks for the heads up 👍 I'll take a look and get back to you soon!";
const BRIEF_DRAFT: &str = "Got it, will review. Thanks!";
const POLITE_RESCHEDULE_DRAFT: &str = "I'm afraid I can't make it at the original time. Would 4 PM work for you instead? I'd really appreciate your flexibility.";

/// Candidates for "regenerate draft"
pub const REGENERATED_DRAFTS: [&str; 3] = [
    "Thank you for your message. I've reviewed the details and wanted to follow up with my thoughts. Let me know if you'd like to discuss further.",
    "I appreciate you reaching out. After careful consideration, I'd like to propose we schedule a quick call to align on next steps.",
    "Thanks for sharing this with me. I have a few questions before proceeding - would you have time for a brief sync this week?",
];

/// Keyword bucket a refinement instruction falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Formal,
    Friendly,
    Brief,
    PoliteReschedule,
}

impl Tone {
    /// Buckets in match priority order, with their trigger keywords
    const BUCKETS: [(Tone, &'static [&'static str]); 4] = [
        (Tone::Formal, &["formal", "professional"]),
        (Tone::Friendly, &["friendly", "casual"]),
        (Tone::Brief, &["short", "brief"]),
        (Tone::PoliteReschedule, &["polite", "4 pm", "4pm"]),
    ];

    /// First bucket whose keyword appears in the instruction
    pub fn classify(refinement: &str) -> Option<Self> {
        let lower = refinement.to_lowercase();
        Self::BUCKETS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(tone, _)| *tone)
    }

    pub fn template(&self) -> &'static str {
        match self {
            Self::Formal => FORMAL_DRAFT,
            Self::Friendly => FRIENDLY_DRAFT,
            Self::Brief => BRIEF_DRAFT,
            Self::PoliteReschedule => POLITE_RESCHEDULE_DRAFT,
        }
    }
}

/// Rewrite `current` according to `refinement`. Unrecognised instructions
/// keep the draft and append a feedback note; a blank one returns it as is.
pub fn refine_draft(current: &str, refinement: &str) -> String {
    let refinement = refinement.trim();
    if refinement.is_empty() {
        return current.to_string();
    }
    match Tone::classify(refinement) {
        Some(tone) => tone.template().to_string(),
        None => format!("{}\n\n[Updated based on your feedback: \"{}\"]", current, refinement),
    }
}

/// Draft text currently attached to a message
pub fn current_draft(message: Option<&Message>) -> &str {
    message
        .and_then(|m| m.draft_insight())
        .map(|insight| insight.content.as_str())
        .unwrap_or(DEFAULT_DRAFT)
}

/// Seeded picker over `REGENERATED_DRAFTS`
pub struct DraftRotation {
    rng: StdRng,
}

impl DraftRotation {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn next_draft(&mut self) -> &'static str {
        REGENERATED_DRAFTS[self.rng.gen_range(0..REGENERATED_DRAFTS.len())]
    }
}
