//! Error types.
//!
//! Storage failures surface as [`StoreError`]. Handlers convert every failure
//! into an [`ApiError`], which renders the `{err, msg}` JSON envelope with one
//! of the numeric [`ErrorCode`]s.

use axum::response::{IntoResponse, Response};
use axum::Json;
use sled::transaction::TransactionError;

use crate::models::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Sled(#[from] sled::Error),

    #[error("corrupt note record: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("stored path is not valid UTF-8")]
    InvalidPath,
}

/// Store transactions abort only on a record that fails to (de)serialize.
impl From<TransactionError<serde_json::Error>> for StoreError {
    fn from(err: TransactionError<serde_json::Error>) -> Self {
        match err {
            TransactionError::Storage(e) => StoreError::Sled(e),
            TransactionError::Abort(e) => StoreError::Corrupt(e),
        }
    }
}

/// Numeric failure codes sent to the client. Each code names one failure cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SaveFailed = 10001,
    PasswordMismatch = 10002,
    PasswordSetFailed = 10003,
    SettingFailed = 10004,
    AppPasswordMismatch = 10005,
}

impl ErrorCode {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn default_message(self) -> &'static str {
        match self {
            ErrorCode::SaveFailed => "KV insert fail!",
            ErrorCode::PasswordMismatch => "Password auth failed!",
            ErrorCode::PasswordSetFailed => "Password setting failed!",
            ErrorCode::SettingFailed => "Update Setting failed!",
            ErrorCode::AppPasswordMismatch => "App password auth failed!",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{} ({})", .msg, .code.code())]
pub struct ApiError {
    pub code: ErrorCode,
    pub msg: String,
}

impl ApiError {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            msg: code.default_message().to_string(),
        }
    }

    pub fn with_message(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }

    /// Log a storage failure and turn it into the given code.
    pub fn storage(code: ErrorCode, err: StoreError) -> Self {
        tracing::error!(error = %err, code = code.code(), "storage operation failed");
        Self::new(code)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Json(ApiResponse {
            err: self.code.code(),
            data: None,
            msg: Some(self.msg),
        })
        .into_response()
    }
}
