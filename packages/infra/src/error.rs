//! # インフラ層エラー定義
//!
//! MongoDB との通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! `From<mongodb::error::Error>` や convenience constructor でエラーを生成すると、
//! その時点のスパン情報（どのリポジトリ操作で失敗したか）が自動的に記録される。
//!
//! メッセージは 500 応答の `error` にそのまま載るため英語で定義する。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// データベースエラー
    ///
    /// 接続失敗、タイムアウト、コマンド実行エラー、BSON デコード失敗など。
    #[error("database error: {0}")]
    Database(#[source] mongodb::error::Error),

    /// 予期しないエラー
    ///
    /// 採番された `_id` が `ObjectId` でない場合など、ドライバは成功を返したが
    /// 結果がこのサービスの前提と合わないもの。
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Unexpected(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

impl From<mongodb::error::Error> for InfraError {
    fn from(source: mongodb::error::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Database(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use pretty_assertions::assert_eq;
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// テスト用に ErrorLayer 付き subscriber を設定する
    fn with_error_layer(f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _guard = tracing::subscriber::set_default(subscriber);
        f();
    }

    fn mongodb_error() -> mongodb::error::Error {
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "接続失敗").into()
    }

    #[test]
    fn test_from_mongodb_errorでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("test_repo", todo_id = "65f1c2a9e4b0a1b2c3d4e5f6");
            let _enter = span.enter();

            let err: InfraError = mongodb_error().into();

            assert!(matches!(err.kind(), InfraErrorKind::Database(_)));
            let trace_str = format!("{}", err.span_trace());
            assert!(
                trace_str.contains("test_repo"),
                "SpanTrace がスパン名を含むこと: {trace_str}",
            );
        });
    }

    #[test]
    fn test_unexpectedでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("test_insert");
            let _enter = span.enter();

            let err = InfraError::unexpected("inserted _id is not an ObjectId");

            assert!(matches!(
                err.kind(),
                InfraErrorKind::Unexpected(msg) if msg == "inserted _id is not an ObjectId"
            ));
            assert!(format!("{}", err.span_trace()).contains("test_insert"));
        });
    }

    #[test]
    fn test_displayがinfra_error_kindのメッセージを出力する() {
        let err = InfraError::unexpected("boom");
        assert_eq!(format!("{err}"), "unexpected error: boom");
    }

    #[test]
    fn test_sourceがinfra_error_kindに委譲する() {
        let err: InfraError = mongodb_error().into();
        assert!(err.source().is_some());

        let err = InfraError::unexpected("boom");
        assert!(err.source().is_none());
    }
}
