use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Request-level failures of the auth endpoints.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration against an email that already has a row.
    #[error("user already exists")]
    EmailTaken,
    /// Unknown email or wrong password; the response does not say which.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// Pool, query or hashing failure. Details go to the log, the client
    /// gets a constant body.
    #[error(transparent)]
    Database(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::EmailTaken => (StatusCode::BAD_REQUEST, "User already exists"),
            AuthError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, "Invalid email or password")
            }
            AuthError::Database(e) => {
                error!(error = %e, "auth request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn rendered(err: AuthError) -> (StatusCode, serde_json::Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn email_taken_renders_400_with_message() {
        let (status, body) = rendered(AuthError::EmailTaken).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User already exists");
    }

    #[tokio::test]
    async fn invalid_credentials_renders_400_with_message() {
        let (status, body) = rendered(AuthError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn database_failure_renders_500_without_detail() {
        let (status, body) = rendered(AuthError::Database(anyhow::anyhow!(
            "connection refused (127.0.0.1:5432)"
        )))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Server error");
        // the underlying cause must not reach the wire
        assert!(!body.to_string().contains("connection refused"));
    }
}
