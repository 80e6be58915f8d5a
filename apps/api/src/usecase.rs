//! # ユースケース層
//!
//! ハンドラから呼ばれる操作を実装する。リポジトリの結果を API のエラーに対応付ける。

pub mod todo;

pub use todo::TodoUseCaseImpl;
