//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 操作 = 1 コマンド**: どの操作もデータストアへの呼び出しは 1 回。
//!   トランザクションや複数ドキュメントにまたがる原子性は使わない
//! - **件数は呼び出し側で解釈する**: 更新・削除でマッチ件数が 0 でもエラーにはせず、
//!   `bool` で返す。404 にするかどうかはユースケース層が決める
//! - **並び順は指定しない**: 一覧はデータストアの自然順のまま返す
//!
//! ## ドキュメント形状
//!
//! ```text
//! { _id: ObjectId, body: string, done: bool }
//! ```

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::{Deserialize, Deserializer, Serialize};
use todos_domain::todo::{NewTodo, Todo, TodoChanges, TodoId};

use crate::{db::TODO_COLLECTION, error::InfraError};

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 全件を取得する（空のフィルタで検索）
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で 1 件取得する
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError>;

    /// 新規作成し、データストアが採番した ID を返す
    async fn insert(&self, todo: &NewTodo) -> Result<TodoId, InfraError>;

    /// `body` と `done` を更新する
    ///
    /// 対象が存在した場合は `true`、存在しなかった場合は `false` を返す。
    async fn update(&self, id: &TodoId, changes: &TodoChanges) -> Result<bool, InfraError>;

    /// 削除する
    ///
    /// 1 件削除した場合は `true`、対象が存在しなかった場合は `false` を返す。
    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError>;
}

/// `todos` コレクションのドキュメント
///
/// 他のクライアントが書き込んだドキュメントで `body` / `done` が欠けている、
/// または `null` の場合は既定値（`""` / `false`）として読む。
#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id:   Option<ObjectId>,
    #[serde(default, deserialize_with = "null_as_default")]
    body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    done: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl TodoDocument {
    fn from_new(todo: &NewTodo) -> Self {
        Self {
            id:   None,
            body: todo.body().to_string(),
            done: todo.done(),
        }
    }

    fn into_entity(self) -> Result<Todo, InfraError> {
        let id = self
            .id
            .ok_or_else(|| InfraError::unexpected("stored todo has no _id"))?;
        Ok(Todo::from_db(TodoId::from_object_id(id), self.body, self.done))
    }
}

/// MongoDB 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct MongoTodoRepository {
    collection: Collection<TodoDocument>,
}

impl MongoTodoRepository {
    /// `todos` コレクションを対象とするリポジトリを作成する
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(TODO_COLLECTION),
        }
    }
}

#[async_trait]
impl TodoRepository for MongoTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut todos = Vec::new();
        while cursor.advance().await? {
            let document = cursor.deserialize_current()?;
            todos.push(document.into_entity()?);
        }

        Ok(todos)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        let document = self
            .collection
            .find_one(doc! { "_id": *id.as_object_id() })
            .await?;

        document.map(TodoDocument::into_entity).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, todo: &NewTodo) -> Result<TodoId, InfraError> {
        let result = self
            .collection
            .insert_one(TodoDocument::from_new(todo))
            .await?;

        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            InfraError::unexpected(format!(
                "inserted _id is not an ObjectId: {}",
                result.inserted_id
            ))
        })?;

        Ok(TodoId::from_object_id(oid))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: &TodoId, changes: &TodoChanges) -> Result<bool, InfraError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": *id.as_object_id() },
                doc! { "$set": { "body": changes.body(), "done": changes.done() } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": *id.as_object_id() })
            .await?;

        Ok(result.deleted_count > 0)
    }
}
