//! # MongoDB 接続管理
//!
//! クライアントの作成と疎通確認を行う。
//!
//! ## 設計方針
//!
//! - **クライアントは 1 つ**: 起動時に一度だけ作成し、以降は `Database` / `Collection`
//!   ハンドルを共有する。ハンドルは `Clone + Send + Sync` で、接続プールはドライバが持つ
//! - **起動時の疎通確認**: 接続文字列のパースだけでは接続できるか分からないため、
//!   `ping` コマンドで確認してから HTTP サーバーを起動する
//! - **タイムアウト・リトライはドライバ任せ**: このサービス側では設定しない

use async_trait::async_trait;
use bson::doc;
use mongodb::{Client, Database, options::ClientOptions};

use crate::error::InfraError;

/// Todo を格納するコレクション名
pub const TODO_COLLECTION: &str = "todos";

/// MongoDB クライアントを作成する
///
/// # 引数
///
/// * `uri` - 接続文字列（`mongodb://...` または `mongodb+srv://...`）
///
/// # エラー
///
/// - 接続文字列の形式が不正
/// - `mongodb+srv` の DNS 解決に失敗
pub async fn create_client(uri: &str) -> Result<Client, InfraError> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some("todos".to_string());

    Ok(Client::with_options(options)?)
}

/// `ping` コマンドでサーバーとの疎通を確認する
pub async fn ping(database: &Database) -> Result<(), InfraError> {
    database.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

/// データベースの疎通確認
///
/// Readiness Check から使用する。テストではモック実装に差し替える。
#[async_trait]
pub trait DatabaseHealthCheck: Send + Sync {
    async fn ping(&self) -> Result<(), InfraError>;
}

/// MongoDB 実装の DatabaseHealthCheck
#[derive(Debug, Clone)]
pub struct MongoHealthCheck {
    database: Database,
}

impl MongoHealthCheck {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl DatabaseHealthCheck for MongoHealthCheck {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn ping(&self) -> Result<(), InfraError> {
        ping(&self.database).await
    }
}
