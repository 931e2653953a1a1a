/*
 * Responsibility
 * - Authorization ヘッダから Bearer トークンを取り出す純粋関数
 * - HTTP フレームワークに依存しない (HeaderMap のみ)
 */
use std::borrow::Cow;

use axum::http::{HeaderMap, header};

/// Scheme prefix, trailing space included. Matched case-sensitively.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Returns the credential following `Bearer ` in the `Authorization` header.
///
/// The prefix is matched on raw bytes and the remainder is returned verbatim,
/// possibly empty. Bytes above 0x7F (obs-text) are decoded as latin1, one
/// char per byte. A missing header or any other scheme yields `None`.
pub fn extract_bearer(headers: &HeaderMap) -> Option<Cow<'_, str>> {
    let token = headers
        .get(header::AUTHORIZATION)?
        .as_bytes()
        .strip_prefix(BEARER_PREFIX.as_bytes())?;

    Some(match std::str::from_utf8(token) {
        Ok(ascii) if ascii.is_ascii() => Cow::Borrowed(ascii),
        _ => Cow::Owned(token.iter().map(|&b| char::from(b)).collect()),
    })
}
