//! # Todos 共有ユーティリティ
//!
//! 全クレートから利用されるレスポンス型と Observability 基盤を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は API 層の責務）
//! - トレーシング関連は `observability` feature で有効化する

pub mod api_response;
pub mod error_response;
pub mod health;
pub mod observability;

pub use api_response::SuccessResponse;
pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
