//! # ルーター構築
//!
//! State を受け取り、ルーティングとミドルウェアを組み立てる。
//! `main` と統合テストの両方から呼ばれる。

use std::sync::Arc;

use axum::{Router, routing::get};
use todos_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    ReadinessState,
    TodoState,
    create_todo,
    delete_todo,
    get_todo,
    health_check,
    list_todos,
    readiness_check,
    update_todo,
};

/// ルーターを構築する
pub fn build_app(todo_state: Arc<TodoState>, readiness_state: Arc<ReadinessState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(
            Router::new()
                .route("/api/todos", get(list_todos).post(create_todo))
                .route(
                    "/api/todos/{id}",
                    get(get_todo).patch(update_todo).delete(delete_todo),
                )
                .with_state(todo_state),
        )
        // Request ID レイヤー（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: request_id を含むスパンを作り、全ログに注入
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
