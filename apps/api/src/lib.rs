//! # Todos API サーバー
//!
//! `todos` コレクションに対する CRUD を HTTP で公開する。
//!
//! ```text
//! HTTP リクエスト → router → handler → usecase → repository → MongoDB
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーターとミドルウェアの組み立て
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`extract`] - リクエストボディの抽出（不正な JSON を 400 に変換）
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ハンドラから呼ばれる CRUD ロジック
//!
//! ## 依存関係
//!
//! - `todos_domain`: Todo エンティティ、識別子
//! - `todos_infra`: MongoDB 接続、リポジトリ
//! - `todos_shared`: レスポンス型、Observability

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod usecase;
