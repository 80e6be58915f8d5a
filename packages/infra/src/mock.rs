//! # テスト用モック
//!
//! ハンドラ・ユースケーステストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todos-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use todos_domain::todo::{NewTodo, Todo, TodoChanges, TodoId};

use crate::{db::DatabaseHealthCheck, error::InfraError, repository::TodoRepository};

// ===== MockTodoRepository =====

/// インメモリの TodoRepository
///
/// 挿入順を保持する。`failing()` で作成すると全操作がデータベースエラーを返す。
/// `calls()` でデータストアへの呼び出し回数を確認できる。
#[derive(Clone, Default)]
pub struct MockTodoRepository {
    todos: Arc<Mutex<Vec<Todo>>>,
    calls: Arc<AtomicUsize>,
    fail:  bool,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全操作が失敗するリポジトリを作成する
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// 事前データを追加する（呼び出し回数には数えない）
    pub fn add_todo(&self, todo: Todo) {
        self.todos.lock().unwrap().push(todo);
    }

    /// 現在保持している Todo のスナップショット
    pub fn snapshot(&self) -> Vec<Todo> {
        self.todos.lock().unwrap().clone()
    }

    /// リポジトリ操作が呼ばれた回数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), InfraError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(InfraError::unexpected("mock datastore unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        self.record_call()?;
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        self.record_call()?;
        Ok(self
            .todos
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn insert(&self, todo: &NewTodo) -> Result<TodoId, InfraError> {
        self.record_call()?;
        let id = TodoId::new();
        self.todos.lock().unwrap().push(todo.clone().into_todo(id));
        Ok(id)
    }

    async fn update(&self, id: &TodoId, changes: &TodoChanges) -> Result<bool, InfraError> {
        self.record_call()?;
        let mut todos = self.todos.lock().unwrap();
        match todos.iter_mut().find(|t| t.id() == id) {
            Some(todo) => {
                *todo = todo.clone().apply(changes.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError> {
        self.record_call()?;
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| t.id() != id);
        Ok(todos.len() < before)
    }
}

// ===== MockDatabaseHealthCheck =====

/// 結果を固定できる DatabaseHealthCheck
#[derive(Debug, Clone, Copy)]
pub struct MockDatabaseHealthCheck {
    healthy: bool,
}

impl MockDatabaseHealthCheck {
    pub fn healthy() -> Self {
        Self { healthy: true }
    }

    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl DatabaseHealthCheck for MockDatabaseHealthCheck {
    async fn ping(&self) -> Result<(), InfraError> {
        if self.healthy {
            Ok(())
        } else {
            Err(InfraError::unexpected("mock ping failed"))
        }
    }
}
