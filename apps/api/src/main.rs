//! # Todos API サーバー
//!
//! MongoDB の `todos` コレクションを HTTP で CRUD する単一プロセスのサービス。
//!
//! ## 起動シーケンス
//!
//! 1. トレーシングの初期化
//! 2. 環境変数から設定を読み込む
//! 3. MongoDB クライアントの作成と `ping` による疎通確認（失敗したら起動しない）
//! 4. ルーターの構築
//! 5. HTTP サーバーの起動
//! 6. SIGINT / SIGTERM で新規受付を止め、処理中のリクエストを待ってからクライアントを閉じる
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! MONGODB_URI=mongodb://localhost:27017 cargo run -p todos-api
//!
//! # JSON ログ
//! LOG_FORMAT=json MONGODB_URI=mongodb://... cargo run -p todos-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use todos_api::{
    app_builder::build_app,
    config::ApiConfig,
    handler::{ReadinessState, TodoState},
    usecase::TodoUseCaseImpl,
};
use todos_infra::{
    db::{self, MongoHealthCheck},
    repository::{MongoTodoRepository, TodoRepository},
};
use todos_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("todos-api");
    let service_name = tracing_config.service_name.clone();
    init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = %service_name).entered();

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        database = %config.database_name,
        "todos-api サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let client = db::create_client(&config.mongodb_uri)
        .await
        .context("MongoDB クライアントの作成に失敗しました")?;
    let database = client.database(&config.database_name);
    db::ping(&database)
        .await
        .context("MongoDB への接続に失敗しました")?;
    tracing::info!("MongoDB に接続しました");

    let todo_repository: Arc<dyn TodoRepository> = Arc::new(MongoTodoRepository::new(&database));
    let todo_state = Arc::new(TodoState {
        usecase: TodoUseCaseImpl::new(todo_repository),
    });
    let readiness_state = Arc::new(ReadinessState {
        database: Arc::new(MongoHealthCheck::new(database)),
    });

    let app = build_app(todo_state, readiness_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("todos-api サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("MongoDB クライアントを終了します");
    client.shutdown().await;
    tracing::info!("todos-api サーバーを停止しました");

    Ok(())
}

/// SIGINT（Ctrl+C）または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl+C ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
