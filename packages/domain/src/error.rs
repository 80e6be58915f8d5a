//! # ドメイン層エラー定義
//!
//! 入力値がドメインの制約を満たさない場合のエラー型。
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `InvalidId` | 400 Bad Request | 識別子の形式が不正 |
//!
//! エラーメッセージはそのままクライアントへ返るため英語で定義する。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 識別子が `ObjectId`（24 桁の 16 進数）として解釈できない
    #[error("invalid todo id: {0}")]
    InvalidId(String),
}
