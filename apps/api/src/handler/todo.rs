//! # Todo ハンドラ
//!
//! `todos` コレクションに対する CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/todos` - 全件取得
//! - `GET /api/todos/{id}` - 1 件取得
//! - `POST /api/todos` - 作成
//! - `PATCH /api/todos/{id}` - 更新（`body` と `done` を置き換え）
//! - `DELETE /api/todos/{id}` - 削除
//!
//! パスの `id` は 24 桁の 16 進文字列。形式不正は [`TodoIdPath`] がデータストアに
//! 問い合わせる前に 400 を返す。

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use todos_domain::todo::{NewTodo, Todo, TodoChanges};
use todos_shared::SuccessResponse;

use crate::{
    error::ApiError,
    extract::{TodoIdPath, ValidatedJson},
    usecase::TodoUseCaseImpl,
};

/// Todo API の共有状態
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成リクエスト
///
/// クライアントが `_id` を送ってきても無視する。
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub body: String,
    #[serde(default)]
    pub done: bool,
}

/// Todo 更新リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub body: String,
    pub done: bool,
}

/// Todo DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoDto {
    #[serde(rename = "_id")]
    pub id:   String,
    pub body: String,
    pub done: bool,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id:   todo.id().to_string(),
            body: todo.body().to_string(),
            done: todo.done(),
        }
    }
}

// --- ハンドラ ---

/// GET /api/todos
///
/// 全件を返す。0 件の場合は空配列。
#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, ApiError> {
    let todos = state.usecase.list_todos().await?;

    let items: Vec<TodoDto> = todos.iter().map(TodoDto::from).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// GET /api/todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: Todo
/// - `400 Bad Request`: ID の形式不正
/// - `404 Not Found`: Todo が見つからない
#[tracing::instrument(skip_all, fields(todo_id = %id))]
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    TodoIdPath(id): TodoIdPath,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state.usecase.get_todo(&id).await?;

    Ok((StatusCode::OK, Json(TodoDto::from(&todo))))
}

/// POST /api/todos
///
/// ## レスポンス
///
/// - `201 Created`: 採番された `_id` を含む Todo
/// - `400 Bad Request`: ボディのパース失敗
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    ValidatedJson(req): ValidatedJson<CreateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state
        .usecase
        .create_todo(NewTodo::new(req.body, req.done))
        .await?;

    tracing::info!(todo_id = %todo.id(), "Todo を作成しました");

    Ok((StatusCode::CREATED, Json(TodoDto::from(&todo))))
}

/// PATCH /api/todos/{id}
///
/// `body` と `done` の両方を置き換える。対象が存在しなくても `200 OK` を返す。
///
/// ## レスポンス
///
/// - `200 OK`: `{"success": true}`
/// - `400 Bad Request`: ID の形式不正、ボディのパース失敗
#[tracing::instrument(skip_all, fields(todo_id = %id))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    TodoIdPath(id): TodoIdPath,
    ValidatedJson(req): ValidatedJson<UpdateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .usecase
        .update_todo(&id, TodoChanges::new(req.body, req.done))
        .await?;

    Ok((StatusCode::OK, Json(SuccessResponse::new())))
}

/// DELETE /api/todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: `{"success": true}`
/// - `400 Bad Request`: ID の形式不正
/// - `404 Not Found`: Todo が見つからない
#[tracing::instrument(skip_all, fields(todo_id = %id))]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    TodoIdPath(id): TodoIdPath,
) -> Result<impl IntoResponse, ApiError> {
    state.usecase.delete_todo(&id).await?;

    tracing::info!(todo_id = %id, "Todo を削除しました");

    Ok((StatusCode::OK, Json(SuccessResponse::new())))
}
