use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use std::fmt::Debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    ServerError,
    RidesNotFoundError,
}

#[derive(Debug)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self.code {
            ErrorCode::ValidationError => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::RidesNotFoundError => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "error_code": self.code,
            "message": self.message,
        }));

        (status, body).into_response()
    }
}

pub fn validation_error(message: &str) -> Error {
    Error {
        code: ErrorCode::ValidationError,
        message: message.into(),
    }
}

pub fn rides_not_found_error() -> Error {
    Error {
        code: ErrorCode::RidesNotFoundError,
        message: "Could not find any rides".into(),
    }
}

pub fn server_error() -> Error {
    Error {
        code: ErrorCode::ServerError,
        message: "Unknown error".into(),
    }
}

// Detail is logged here and never reaches the client.
pub fn database_error<T: Debug>(err: T) -> Error {
    tracing::error!(error = ?err, "database error");
    server_error()
}
