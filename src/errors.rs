use crate::data_access::Category;
use crate::models::UserId;
use axum::http::StatusCode;
use std::path::PathBuf;
use tracing::error;

/// Failure to produce a record from the data source.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read data source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch data source {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("data source is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed {category} record for user {user_id}: {reason}")]
    Malformed {
        category: Category,
        user_id: UserId,
        reason: String,
    },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        let status = match &err {
            DataError::Io { .. } | DataError::Http { .. } | DataError::Parse(_) => {
                StatusCode::BAD_GATEWAY
            }
            DataError::Malformed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!(error = %err, "data source failure");
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
