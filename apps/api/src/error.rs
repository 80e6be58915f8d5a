//! # API エラー定義
//!
//! API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! エラー応答は常に `{"error": "<message>"}` 形式。
//! 5xx の場合はレスポンスを返す前に原因をログに出力する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todos_domain::DomainError;
use todos_infra::InfraError;
use todos_shared::ErrorResponse;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 不正なリクエスト（ID の形式不正、ボディのパース失敗）
    #[error("{0}")]
    BadRequest(String),

    /// Todo が見つからない
    #[error("Todo not found")]
    TodoNotFound,

    /// データベースエラー
    #[error(transparent)]
    Database(#[from] InfraError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl ApiError {
    /// 対応する HTTP ステータスコード
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::TodoNotFound => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::TodoNotFound => ErrorResponse::todo_not_found(),
            ApiError::Database(e) => {
                tracing::error!(
                    error.category = "infrastructure",
                    error.kind = "database",
                    span_trace = %e.span_trace(),
                    "データベースエラー: {}",
                    e
                );
                ErrorResponse::new(e.to_string())
            }
            ApiError::BadRequest(msg) => ErrorResponse::new(msg.clone()),
        };

        (status, Json(body)).into_response()
    }
}
