use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use holonet_core::catalog::ValidationError;
use holonet_core::storage::{repository_error_to_status_code, RepositoryError};

/// Failures detected by the handlers themselves, before or after storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The body was not valid JSON or did not match the request schema.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    /// A list endpoint found no rows.
    #[error("not found")]
    EmptyCollection,
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    msg: String,
    status_code: u16,
}

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.downcast_ref::<ValidationError>().is_some() {
            StatusCode::BAD_REQUEST
        } else if let Some(request_error) = self.0.downcast_ref::<RequestError>() {
            match request_error {
                RequestError::MalformedBody(_) => StatusCode::BAD_REQUEST,
                RequestError::EmptyCollection => StatusCode::NOT_FOUND,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, status = status_code.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self.0, status = status_code.as_u16(), "Request rejected");
        }

        let body = ErrorBody {
            msg: self.0.to_string(),
            status_code: status_code.as_u16(),
        };

        (status_code, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: impl Into<anyhow::Error>) -> (StatusCode, serde_json::Value) {
        let response = AppError::from(err).into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_renders_message_and_code() {
        let (status, body) = render(RepositoryError::not_found("user", 9)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["msg"], "user with id 9 not found");
        assert_eq!(body["status_code"], 404);
    }

    #[tokio::test]
    async fn test_duplicate_is_conflict() {
        let (status, _) = render(RepositoryError::AlreadyExists {
            entity_type: "user",
            key: "user.email".to_string(),
        })
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let (status, body) = render(ValidationError::EmptyField { field: "email" }).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "email cannot be empty");
    }

    #[tokio::test]
    async fn test_empty_collection_is_plain_not_found() {
        let (status, body) = render(RequestError::EmptyCollection).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["msg"], "not found");
    }

    #[tokio::test]
    async fn test_unknown_error_is_internal() {
        let (status, body) = render(anyhow::anyhow!("boom")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status_code"], 500);
    }
}
