//! # リポジトリ
//!
//! ドメインエンティティの永続化を担当する。
//!
//! - [`TodoRepository`] - `todos` コレクションに対する CRUD
//!
//! ハンドラ・ユースケースはトレイトにのみ依存し、テストではインメモリ実装
//! （`mock::MockTodoRepository`）に差し替える。

pub mod todo_repository;

pub use todo_repository::{MongoTodoRepository, TodoRepository};
