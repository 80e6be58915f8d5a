//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ID の解釈と DTO 変換だけを行う
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # ヘルスチェックハンドラ
//!     └── todo.rs     # Todo CRUD ハンドラ
//! ```

pub mod health;
pub mod todo;

pub use health::{ReadinessState, health_check, readiness_check};
pub use todo::{
    CreateTodoRequest,
    TodoDto,
    TodoState,
    UpdateTodoRequest,
    create_todo,
    delete_todo,
    get_todo,
    list_todos,
    update_todo,
};
