use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body was not valid JSON; rejected before reaching storage.
    #[error("invalid JSON body: {0}")]
    MalformedInput(String),
    #[error("failed to read data")]
    Load(#[source] ServiceError),
    #[error("failed to save data")]
    Save(#[source] ServiceError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedInput(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedInput(_) => StatusCode::BAD_REQUEST,
            Self::Load(_) | Self::Save(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text sent to the client. Backend details stay in the logs, except the
    /// reason a write was refused for lack of storage.
    fn public_message(&self) -> String {
        match self {
            Self::Save(e @ ServiceError::StorageUnavailable(_)) => format!("{}: {}", self, e),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::MalformedInput(msg) => warn!(event = "malformed_input", error = %msg, "rejected request body"),
            Self::Load(e) => error!(event = "load_failed", error = %e, "read error"),
            Self::Save(e) => error!(event = "save_failed", error = %e, "save error"),
        }
        (status, Json(serde_json::json!({"error": self.public_message()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError::MalformedInput("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Load(ServiceError::Io("disk".into())).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ApiError::Save(ServiceError::unavailable("not configured")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn backend_details_not_exposed() {
        let e = ApiError::Load(ServiceError::Db("password authentication failed".into()));
        assert_eq!(e.public_message(), "failed to read data");

        let e = ApiError::Save(ServiceError::unavailable("DATABASE_URL is not configured"));
        assert_eq!(
            e.public_message(),
            "failed to save data: storage unavailable: DATABASE_URL is not configured"
        );
    }
}
