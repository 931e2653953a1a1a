/*
 * Responsibility
 * - URL 構造の定義
 * - ルーティングはしない: 全メソッド・全パスを echo_token に流す
 */
use axum::Router;

use crate::api::handlers::token::echo_token;

pub fn routes() -> Router {
    Router::new().fallback(echo_token)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    async fn send(
        method: Method,
        uri: &str,
        authorization: Option<&str>,
    ) -> (StatusCode, String, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let req = builder.body(Body::empty()).unwrap();

        let res = routes().oneshot(req).await.unwrap();
        let status = res.status();
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap().to_vec();

        (status, content_type, body)
    }

    async fn body_for(authorization: Option<&str>) -> String {
        let (_, _, body) = send(Method::GET, "/", authorization).await;
        String::from_utf8(body).unwrap()
    }

    #[tokio::test]
    async fn echoes_bearer_token() {
        assert_eq!(
            body_for(Some("Bearer abc123")).await,
            r#"{"accessToken":"abc123"}"#
        );
        assert_eq!(
            body_for(Some("Bearer tok-42")).await,
            r#"{"accessToken":"tok-42"}"#
        );
    }

    #[tokio::test]
    async fn missing_header_yields_sentinel() {
        assert_eq!(body_for(None).await, r#"{"accessToken":"[NONE]"}"#);
    }

    #[tokio::test]
    async fn non_conforming_headers_yield_sentinel() {
        for value in ["Basic xyz", "bearer tok", "Bearer", ""] {
            assert_eq!(
                body_for(Some(value)).await,
                r#"{"accessToken":"[NONE]"}"#,
                "authorization: {value:?}"
            );
        }
    }

    #[tokio::test]
    async fn prefix_only_yields_empty_token() {
        assert_eq!(body_for(Some("Bearer ")).await, r#"{"accessToken":""}"#);
    }

    #[tokio::test]
    async fn always_ok_json() {
        for authorization in [None, Some("Bearer x"), Some("Basic y")] {
            let (status, content_type, body) = send(Method::GET, "/", authorization).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(content_type, "application/json");

            let json: Value = serde_json::from_slice(&body).unwrap();
            let object = json.as_object().unwrap();
            assert_eq!(object.len(), 1);
            assert!(object["accessToken"].is_string());
        }
    }

    #[tokio::test]
    async fn method_and_path_do_not_matter() {
        let cases = [
            (Method::GET, "/"),
            (Method::POST, "/anything"),
            (Method::PUT, "/a/b/c?x=1"),
            (Method::DELETE, "/users/42"),
            (Method::PATCH, "/"),
            (Method::OPTIONS, "/preflight"),
        ];

        for (method, uri) in cases {
            let (status, _, body) = send(method.clone(), uri, Some("Bearer same")).await;

            assert_eq!(status, StatusCode::OK, "{method} {uri}");
            assert_eq!(body, br#"{"accessToken":"same"}"#, "{method} {uri}");
        }
    }
}
