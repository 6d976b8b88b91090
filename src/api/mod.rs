//! REST API Bindings
//!
//! Typed wrappers over the backend HTTP API, organized by domain. One bridge
//! function does the fetch; domain modules stay thin.
//!
//! Every authorized call routes 401 through the session teardown path: clear
//! the tab session, land on the login route. The auth endpoints themselves use
//! the raw variants so a failed login or a restore probe cannot tear down the
//! session they are trying to establish.

pub mod auth;
pub mod billing;
pub mod entitlements;
pub mod onboarding;
pub mod pos;
pub mod tasks;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::session::SessionContext;

/// Errors surfaced by API calls
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Backend rejected the request; message is backend-provided when present
    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },
    /// Session missing or expired
    #[error("unauthorized")]
    Unauthorized,
    #[error("network error: {0}")]
    Network(String),
    #[error("bad response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message fit for a toast; backend text when available, generic otherwise
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Http { status, .. } => format!("Request failed ({})", status),
            ApiError::Unauthorized => "Your session has expired".to_string(),
            ApiError::Network(_) => "Could not reach the server".to_string(),
            ApiError::Decode(_) => "Unexpected response from the server".to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Characters escaped in query values
const QUERY_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Percent-encode one query value
pub fn encode_query(value: &str) -> String {
    utf8_percent_encode(value, QUERY_SET).to_string()
}

/// Map a response status + body to the error it represents, if any
fn classify_status(status: u16, body: &str) -> Result<(), ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(ApiError::Http {
        status,
        message: extract_message(body),
    })
}

/// Pull the backend's `message` (or `error`) field out of an error body
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_default()
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Single fetch bridge; no 401 teardown here
async fn send_raw(
    session: SessionContext,
    method: Method,
    path: &str,
    body: Option<String>,
    with_auth: bool,
) -> ApiResult<String> {
    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    let has_body = body.is_some();
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", session.api_base(), path);
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::Network(js_error_message(&e)))?;
    let headers = request.headers();
    let _ = headers.set("Accept", "application/json");
    if has_body {
        let _ = headers.set("Content-Type", "application/json");
    }
    if with_auth {
        if let Some(token) = session.access_token() {
            let _ = headers.set("Authorization", &format!("Bearer {}", token));
        }
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_error_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Decode("fetch did not return a Response".to_string()))?;

    let status = response.status();
    let text = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    classify_status(status, &text)?;
    Ok(text)
}

/// Authorized fetch: any 401 tears the session down before the error
/// propagates
async fn send(
    session: SessionContext,
    method: Method,
    path: &str,
    body: Option<String>,
) -> ApiResult<String> {
    match send_raw(session, method, path, body, true).await {
        Err(ApiError::Unauthorized) => {
            session.expire();
            Err(ApiError::Unauthorized)
        }
        other => other,
    }
}

fn decode<T: DeserializeOwned>(text: String) -> ApiResult<T> {
    let text = if text.trim().is_empty() {
        "null".to_string()
    } else {
        text
    };
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    session: SessionContext,
    path: &str,
) -> ApiResult<T> {
    decode(send(session, Method::Get, path, None).await?)
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    session: SessionContext,
    path: &str,
    body: &B,
) -> ApiResult<T> {
    decode(send(session, Method::Post, path, Some(encode(body)?)).await?)
}

pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
    session: SessionContext,
    path: &str,
    body: &B,
) -> ApiResult<T> {
    decode(send(session, Method::Patch, path, Some(encode(body)?)).await?)
}

pub(crate) async fn delete(session: SessionContext, path: &str) -> ApiResult<()> {
    send(session, Method::Delete, path, None).await?;
    Ok(())
}

/// Unauthorized POST used by login/refresh
pub(crate) async fn post_json_unauthenticated<B: Serialize, T: DeserializeOwned>(
    session: SessionContext,
    path: &str,
    body: &B,
) -> ApiResult<T> {
    decode(send_raw(session, Method::Post, path, Some(encode(body)?), false).await?)
}

/// Authorized GET that skips the 401 teardown; used by the restore probe
pub(crate) async fn get_json_no_teardown<T: DeserializeOwned>(
    session: SessionContext,
    path: &str,
) -> ApiResult<T> {
    decode(send_raw(session, Method::Get, path, None, true).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status_success_range() {
        assert!(classify_status(200, "").is_ok());
        assert!(classify_status(204, "").is_ok());
    }

    #[test]
    fn test_classify_status_unauthorized() {
        assert!(matches!(
            classify_status(401, "{}"),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn test_classify_status_surfaces_backend_message() {
        let err = classify_status(422, r#"{"message":"name is required"}"#).unwrap_err();
        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "name is required");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_user_message_falls_back_to_generic() {
        let err = classify_status(500, "not json").unwrap_err();
        assert_eq!(err.user_message(), "Request failed (500)");
    }

    #[test]
    fn test_extract_message_accepts_error_key() {
        assert_eq!(
            extract_message(r#"{"error":"register is closed"}"#),
            "register is closed"
        );
        assert_eq!(extract_message("[]"), "");
    }

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query("coffee & cake"), "coffee%20%26%20cake");
        assert_eq!(encode_query("plain"), "plain");
    }
}
