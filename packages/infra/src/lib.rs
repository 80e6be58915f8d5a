//! # Todos インフラ層
//!
//! MongoDB との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: MongoDB クライアントの作成と疎通確認
//! - **リポジトリ実装**: `todos` コレクションに対する CRUD
//!
//! 接続プールはドライバが内部で管理する。ここではクライアントを起動時に一度だけ
//! 作成し、`Collection` ハンドルを全リクエストで共有する。
//!
//! ## モジュール構成
//!
//! - [`db`] - MongoDB 接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと MongoDB 実装
//! - `mock` - テスト用インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todos_infra::{db, repository::MongoTodoRepository};
//!
//! let client = db::create_client("mongodb://localhost:27017").await?;
//! let database = client.database("golang_db");
//! db::ping(&database).await?;
//! let repository = MongoTodoRepository::new(&database);
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
