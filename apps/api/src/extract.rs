//! # リクエスト抽出
//!
//! axum 標準の `Json` / `Path` は拒否理由ごとに 400 / 415 / 422 を平文で返す。
//! [`ValidatedJson`] と [`TodoIdPath`] はそれらをすべて `ApiError::BadRequest` に揃え、
//! `{"error": ...}` 形式の 400 応答にする。
//!
//! `TodoIdPath` はパス部分から読むため、ボディを読む `ValidatedJson` より先に評価される。
//! ID とボディの両方が不正なら ID のエラーが返る。

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use todos_domain::todo::TodoId;

use crate::error::ApiError;

/// パスパラメータ `{id}` を [`TodoId`] として抽出する
///
/// UTF-8 として不正なパス（`%FF` など）も、24 桁の 16 進数でない値も 400 になる。
/// どちらの場合もデータストアには問い合わせない。
#[derive(Debug, Clone, Copy)]
pub struct TodoIdPath(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(
                    status = %rejection.status(),
                    "パスパラメータを拒否: {}",
                    rejection.body_text()
                );
                ApiError::BadRequest(rejection.body_text())
            })?;

        Ok(Self(TodoId::parse(&raw)?))
    }
}

/// JSON ボディ抽出器
///
/// Content-Type 不正、構文エラー、型不一致、必須フィールド欠落のいずれも 400 になる。
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(
                    status = %rejection.status(),
                    "リクエストボディを拒否: {}",
                    rejection.body_text()
                );
                Err(ApiError::BadRequest(rejection.body_text()))
            }
        }
    }
}
