use serde::Serialize;

/// Placeholder echoed when no usable bearer token was sent.
/// Missing and malformed headers are not distinguished.
pub const NO_TOKEN: &str = "[NONE]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

impl AccessTokenResponse {
    pub fn from_bearer(token: Option<&str>) -> Self {
        Self {
            access_token: token.unwrap_or(NO_TOKEN).to_owned(),
        }
    }
}
