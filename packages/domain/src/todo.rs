//! # Todo エンティティ
//!
//! サービスが扱う唯一の永続エンティティ。フィールドは `id`, `body`, `done` の 3 つ。
//!
//! ## ライフサイクル
//!
//! - 作成: [`NewTodo`] を永続化すると、データストアが [`TodoId`] を採番する
//! - 参照: 一覧取得 / ID 指定取得
//! - 更新: [`TodoChanges`] で `body` と `done` を置き換える（`id` は不変）
//! - 削除: 物理削除（論理削除はしない）
//!
//! ## 使用例
//!
//! ```rust
//! use todos_domain::todo::{NewTodo, TodoChanges, TodoId};
//!
//! let new_todo = NewTodo::new("牛乳を買う", false);
//! let todo = new_todo.into_todo(TodoId::new());
//!
//! let todo = todo.apply(TodoChanges::new("牛乳を買う", true));
//! assert!(todo.done());
//! ```

use std::fmt;

use bson::oid::ObjectId;

use crate::DomainError;

/// Todo の一意識別子
///
/// MongoDB の `ObjectId` をラップした Newtype。外部表現は 24 桁の小文字 16 進数。
/// クライアントから受け取るのはパスパラメータのみで、採番は常にデータストア側で行う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(ObjectId);

impl TodoId {
    /// 新しい ID を生成する
    ///
    /// 通常はデータストアが採番するため、テストやモック実装で使用する。
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// 16 進数文字列から ID を復元する
    ///
    /// データストアへ問い合わせる前に、パスパラメータの形式をここで検証する。
    ///
    /// ```rust
    /// use todos_domain::todo::TodoId;
    ///
    /// assert!(TodoId::parse("65f1c2a9e4b0a1b2c3d4e5f6").is_ok());
    /// assert!(TodoId::parse("not-an-id").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        ObjectId::parse_str(value)
            .map(Self)
            .map_err(|_| DomainError::InvalidId(value.to_string()))
    }

    /// 既存の `ObjectId` から ID を作成する
    pub fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    /// 内部の `ObjectId` 参照を取得する
    pub fn as_object_id(&self) -> &ObjectId {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// 永続化済みの Todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:   TodoId,
    body: String,
    done: bool,
}

impl Todo {
    /// データストアから読み込んだ値で復元する
    pub fn from_db(id: TodoId, body: String, done: bool) -> Self {
        Self { id, body, done }
    }

    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn done(&self) -> bool {
        self.done
    }

    /// 変更内容を適用した Todo を返す
    ///
    /// `id` は変更されない。
    pub fn apply(self, changes: TodoChanges) -> Self {
        Self {
            id:   self.id,
            body: changes.body,
            done: changes.done,
        }
    }
}

/// 作成前の Todo（ID 未採番）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    body: String,
    done: bool,
}

impl NewTodo {
    pub fn new(body: impl Into<String>, done: bool) -> Self {
        Self {
            body: body.into(),
            done,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn done(&self) -> bool {
        self.done
    }

    /// 採番された ID を付与して永続化済みの Todo にする
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            body: self.body,
            done: self.done,
        }
    }
}

/// 更新内容
///
/// 部分更新だが、対象フィールドは常に `body` と `done` の両方。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    body: String,
    done: bool,
}

impl TodoChanges {
    pub fn new(body: impl Into<String>, done: bool) -> Self {
        Self {
            body: body.into(),
            done,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_parseで16進数24桁を受け付ける() {
        let id = TodoId::parse("65f1c2a9e4b0a1b2c3d4e5f6").unwrap();
        assert_eq!(id.to_string(), "65f1c2a9e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn test_parseは大文字の16進数を小文字で表示する() {
        let id = TodoId::parse("65F1C2A9E4B0A1B2C3D4E5F6").unwrap();
        assert_eq!(id.to_string(), "65f1c2a9e4b0a1b2c3d4e5f6");
    }

    #[rstest]
    #[case::空文字("")]
    #[case::短すぎる("65f1c2a9")]
    #[case::長すぎる("65f1c2a9e4b0a1b2c3d4e5f600")]
    #[case::非16進数("zzzzzzzzzzzzzzzzzzzzzzzz")]
    #[case::uuid("550e8400-e29b-41d4-a716-446655440000")]
    fn test_parseで不正な形式はinvalid_idを返す(#[case] input: &str) {
        let err = TodoId::parse(input).unwrap_err();
        assert_eq!(err, DomainError::InvalidId(input.to_string()));
    }

    #[test]
    fn test_newは毎回異なるidを生成する() {
        assert_ne!(TodoId::new(), TodoId::new());
    }

    #[test]
    fn test_displayとparseで同じidに戻る() {
        let id = TodoId::new();
        assert_eq!(TodoId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_into_todoで採番済みidが付与される() {
        let id = TodoId::new();
        let todo = NewTodo::new("牛乳を買う", false).into_todo(id);

        assert_eq!(todo.id(), &id);
        assert_eq!(todo.body(), "牛乳を買う");
        assert!(!todo.done());
    }

    #[test]
    fn test_applyはbodyとdoneのみを置き換える() {
        let id = TodoId::new();
        let todo = Todo::from_db(id, "before".to_string(), false);

        let updated = todo.apply(TodoChanges::new("after", true));

        assert_eq!(updated, Todo::from_db(id, "after".to_string(), true));
    }
}
