use std::borrow::Cow;
use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::extract_bearer;

/// Handler で、Bearer トークン (あれば) を受け取るための extractor
/// 検証はしない。ヘッダが無い・形式が違う場合も拒否せず None を渡す
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaybeBearer(pub Option<String>);

impl<S> FromRequestParts<S> for MaybeBearer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(extract_bearer(&parts.headers).map(Cow::into_owned)))
    }
}
