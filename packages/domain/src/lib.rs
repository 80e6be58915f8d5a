//! # Todos ドメイン層
//!
//! Todo レコードのドメインモデルを定義する。
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//!   ↘     ↘
//!     shared
//! ```
//!
//! ドメイン層はインフラ層に依存しない。MongoDB の識別子形式（`ObjectId`）だけは
//! `bson` クレートの型をそのまま借りる。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層エラー定義
//! - [`todo`] - Todo エンティティと識別子

pub mod error;
pub mod todo;

pub use error::DomainError;
