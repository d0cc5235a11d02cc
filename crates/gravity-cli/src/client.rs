use anyhow::{Context, Result};
use gravity_core::api::{
    DataEnvelope, DraftRequest, DraftResponse, ErrorResponse, HealthResponse, SendMessageRequest,
    StreamQuery, StreamResponse,
};
use gravity_core::models::StreamItem;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Page size used when walking the whole stream
const FETCH_ALL_PAGE_SIZE: usize = 100;

/// Non-2xx reply from the server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Server returned {status}: {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND.as_u16()
    }
}

/// HTTP client for the `/api` surface
#[derive(Debug, Clone)]
pub struct GravityClient {
    http: reqwest::Client,
    base_url: String,
}

impl GravityClient {
    /// `server` is the origin, e.g. `http://127.0.0.1:3001`
    pub fn new(server: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: format!("{}/api", server.trim_end_matches('/')),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.context("Failed to reach server")?;
        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .context("Failed to decode server response")
    }

    pub async fn stream(&self, query: &StreamQuery) -> Result<StreamResponse> {
        self.send(self.request(Method::GET, "/stream").query(query))
            .await
    }

    /// Walk every page of the stream for `filter`, in ranked order
    pub async fn fetch_all(&self, filter: Option<&str>) -> Result<Vec<StreamItem>> {
        let mut items = Vec::new();
        let mut query = StreamQuery {
            filter: filter.map(str::to_string),
            limit: Some(FETCH_ALL_PAGE_SIZE.to_string()),
            ..StreamQuery::default()
        };
        loop {
            let page = self.stream(&query).await?;
            items.extend(page.data);
            match page.meta.cursor {
                Some(cursor) if page.meta.has_more => query.cursor = Some(cursor),
                _ => break,
            }
        }
        tracing::debug!(count = items.len(), "Fetched full stream");
        Ok(items)
    }

    pub async fn get_item(&self, item_id: &str) -> Result<StreamItem> {
        let envelope: DataEnvelope<StreamItem> = self
            .send(self.request(Method::GET, &format!("/stream/{}", item_id)))
            .await?;
        Ok(envelope.data)
    }

    pub async fn mark_read(&self, item_id: &str) -> Result<StreamItem> {
        let envelope: DataEnvelope<StreamItem> = self
            .send(self.request(Method::PATCH, &format!("/stream/{}/read", item_id)))
            .await?;
        Ok(envelope.data)
    }

    pub async fn send_message(&self, item_id: &str, content: &str) -> Result<StreamItem> {
        let body = SendMessageRequest {
            content: content.to_string(),
        };
        let envelope: DataEnvelope<StreamItem> = self
            .send(
                self.request(Method::POST, &format!("/messages/{}", item_id))
                    .json(&body),
            )
            .await?;
        Ok(envelope.data)
    }

    pub async fn draft(
        &self,
        item_id: &str,
        message_id: &str,
        refinement: Option<&str>,
    ) -> Result<DraftResponse> {
        let body = DraftRequest {
            message_id: Some(message_id.to_string()),
            refinement: refinement.map(str::to_string),
        };
        self.send(
            self.request(Method::POST, &format!("/messages/{}/draft", item_id))
                .json(&body),
        )
        .await
    }

    pub async fn regenerate(&self, item_id: &str, message_id: &str) -> Result<DraftResponse> {
        let body = DraftRequest {
            message_id: Some(message_id.to_string()),
            refinement: None,
        };
        self.send(
            self.request(Method::POST, &format!("/messages/{}/draft/regenerate", item_id))
                .json(&body),
        )
        .await
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        self.send(self.request(Method::GET, "/health")).await
    }
}

/// Turn a non-2xx response into an `ApiError`, keeping the server's message
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.error)
        .unwrap_or(text);
    Err(ApiError {
        status: status.as_u16(),
        message,
    }
    .into())
}
