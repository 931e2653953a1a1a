/*
 * Responsibility
 * - 全メソッド・全パスで受ける唯一の handler
 * - Bearer トークンをそのまま JSON で返す (検証しない、常に 200)
 */
use axum::Json;
use axum::http::StatusCode;

use crate::api::dto::token_response::AccessTokenResponse;
use crate::api::extractors::MaybeBearer;

pub async fn echo_token(
    MaybeBearer(token): MaybeBearer,
) -> (StatusCode, Json<AccessTokenResponse>) {
    // Only presence is logged, never the credential itself.
    tracing::debug!(present = token.is_some(), "bearer token extracted");

    (
        StatusCode::OK,
        Json(AccessTokenResponse::from_bearer(token.as_deref())),
    )
}
