use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    /// Rejected before any store call.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("blocking task failed: {0}")]
    Blocking(#[from] actix_web::error::BlockingError),

    #[error("invalid username or password")]
    Unauthorized,
}

impl AssetError {
    pub fn validation(message: impl Into<String>) -> Self {
        AssetError::Validation(message.into())
    }
}

impl ResponseError for AssetError {
    fn status_code(&self) -> StatusCode {
        match self {
            AssetError::Validation(_) => StatusCode::BAD_REQUEST,
            AssetError::Unauthorized => StatusCode::UNAUTHORIZED,
            AssetError::Persistence(_) | AssetError::Storage(_) | AssetError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_class() {
        assert_eq!(
            AssetError::validation("name must not be empty").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AssetError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        let db = AssetError::from(rusqlite::Error::InvalidQuery);
        assert_eq!(db.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn message_is_human_readable() {
        let err = AssetError::validation("department must not be empty");
        assert_eq!(
            err.to_string(),
            "validation failed: department must not be empty"
        );
    }
}
