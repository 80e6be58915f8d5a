//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス `{ "error": "<message>" }` を提供する。
//!
//! ## 設計
//!
//! - 既存クライアントが読むキーは `error` のみ。追加フィールドは持たない
//! - 一覧取得・作成の失敗時も同じ形で返す（操作ごとに形を変えない）
//! - axum の `IntoResponse` 変換は API 層の責務

use serde::{Deserialize, Serialize};

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// 404 で返す固定メッセージ
    pub fn todo_not_found() -> Self {
        Self::new("Todo not found")
    }
}
