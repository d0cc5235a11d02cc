use serde::{Deserialize, Serialize};

use crate::constants::INSIGHT_ID_PREFIX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Suggestion,
    Analysis,
    Draft,
}

/// AI-generated suggestion, analysis or draft reply attached to a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AIInsight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub label: String,
    pub content: String,
    pub is_draft: bool,
}

impl AIInsight {
    pub fn analysis(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: super::generate_id(INSIGHT_ID_PREFIX),
            kind: InsightType::Analysis,
            label: label.into(),
            content: content.into(),
            is_draft: false,
        }
    }
}
