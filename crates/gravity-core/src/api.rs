//! Request and response bodies of the HTTP API, shared by server and client.

use serde::{Deserialize, Serialize};

use crate::models::StreamItem;

/// `{data: T}` wrapper used by every item-returning endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamMeta {
    pub cursor: Option<String>,
    pub has_more: bool,
    pub total_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamResponse {
    pub data: Vec<StreamItem>,
    pub meta: StreamMeta,
}

/// Query string of `GET /stream`. Values stay strings so that malformed
/// input degrades to defaults instead of failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refinement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftResponse {
    pub draft: String,
    /// RFC 3339
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_meta_camel_case() {
        let meta = StreamMeta {
            cursor: None,
            has_more: false,
            total_count: 3,
        };
        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            serde_json::json!({"cursor": null, "hasMore": false, "totalCount": 3})
        );
    }

    #[test]
    fn test_draft_request_refinement_optional() {
        let req: DraftRequest = serde_json::from_str(r#"{"messageId": "msg-1-1"}"#).unwrap();
        assert_eq!(req.message_id.as_deref(), Some("msg-1-1"));
        assert!(req.refinement.is_none());
    }
}
