//! Todo の CRUD ユースケース

use std::sync::Arc;

use todos_domain::todo::{NewTodo, Todo, TodoChanges, TodoId};
use todos_infra::repository::TodoRepository;

use crate::error::ApiError;

/// Todo の CRUD ユースケース
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    /// 全件を取得する（並び順はデータストアの自然順）
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let todos = self.todo_repository.find_all().await?;
        Ok(todos)
    }

    /// ID 指定で 1 件取得する
    pub async fn get_todo(&self, id: &TodoId) -> Result<Todo, ApiError> {
        self.todo_repository
            .find_by_id(id)
            .await?
            .ok_or(ApiError::TodoNotFound)
    }

    /// 作成し、採番された ID を含む Todo を返す
    pub async fn create_todo(&self, new_todo: NewTodo) -> Result<Todo, ApiError> {
        let id = self.todo_repository.insert(&new_todo).await?;
        Ok(new_todo.into_todo(id))
    }

    /// `body` と `done` を置き換える
    ///
    /// 対象が存在しなくてもエラーにしない（新規作成もしない）。
    pub async fn update_todo(&self, id: &TodoId, changes: TodoChanges) -> Result<(), ApiError> {
        let matched = self.todo_repository.update(id, &changes).await?;
        if !matched {
            tracing::debug!(todo_id = %id, "更新対象の Todo が存在しない");
        }
        Ok(())
    }

    /// 削除する。対象が存在しなければ `TodoNotFound`
    pub async fn delete_todo(&self, id: &TodoId) -> Result<(), ApiError> {
        let deleted = self.todo_repository.delete(id).await?;
        if !deleted {
            return Err(ApiError::TodoNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use todos_infra::mock::MockTodoRepository;

    use super::*;

    fn sut(repo: &MockTodoRepository) -> TodoUseCaseImpl {
        TodoUseCaseImpl::new(Arc::new(repo.clone()))
    }

    #[tokio::test]
    async fn test_作成したtodoは採番されたidで取得できる() {
        let repo = MockTodoRepository::new();
        let usecase = sut(&repo);

        let created = usecase
            .create_todo(NewTodo::new("牛乳を買う", false))
            .await
            .unwrap();
        let fetched = usecase.get_todo(created.id()).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.body(), "牛乳を買う");
        assert!(!fetched.done());
    }

    #[tokio::test]
    async fn test_存在しないidの取得はtodo_not_found() {
        let repo = MockTodoRepository::new();

        let result = sut(&repo).get_todo(&TodoId::new()).await;

        assert!(matches!(result, Err(ApiError::TodoNotFound)));
    }

    #[tokio::test]
    async fn test_更新でbodyとdoneが置き換わりidは変わらない() {
        let repo = MockTodoRepository::new();
        let existing = Todo::from_db(TodoId::new(), "a".to_string(), false);
        repo.add_todo(existing.clone());

        sut(&repo)
            .update_todo(existing.id(), TodoChanges::new("b", true))
            .await
            .unwrap();

        assert_eq!(
            repo.snapshot(),
            vec![Todo::from_db(*existing.id(), "b".to_string(), true)]
        );
    }

    #[tokio::test]
    async fn test_存在しないidの更新は成功扱いで何も作らない() {
        let repo = MockTodoRepository::new();

        let result = sut(&repo)
            .update_todo(&TodoId::new(), TodoChanges::new("x", true))
            .await;

        assert!(result.is_ok());
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_削除後は取得も再削除もtodo_not_found() {
        let repo = MockTodoRepository::new();
        let existing = Todo::from_db(TodoId::new(), "a".to_string(), false);
        repo.add_todo(existing.clone());
        let usecase = sut(&repo);

        usecase.delete_todo(existing.id()).await.unwrap();

        assert!(matches!(
            usecase.get_todo(existing.id()).await,
            Err(ApiError::TodoNotFound)
        ));
        assert!(matches!(
            usecase.delete_todo(existing.id()).await,
            Err(ApiError::TodoNotFound)
        ));
    }

    #[tokio::test]
    async fn test_リポジトリの失敗はdatabaseエラーになる() {
        let repo = MockTodoRepository::failing();

        let result = sut(&repo).list_todos().await;

        assert!(matches!(result, Err(ApiError::Database(_))));
        assert_eq!(repo.calls(), 1);
    }
}
