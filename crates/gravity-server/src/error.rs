use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gravity_core::api::ErrorResponse;
use gravity_core::constants::ITEM_NOT_FOUND;
use gravity_core::GravityError;
use thiserror::Error;

/// Handler error rendered as `{error}` with a matching status code
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] GravityError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(GravityError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            Self::Domain(GravityError::NotFound(_)) => ITEM_NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Request failed");
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(GravityError::NotFound("item-404".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Item not found");
        assert_eq!(err.to_string(), "Item not found: item-404");
    }
}
