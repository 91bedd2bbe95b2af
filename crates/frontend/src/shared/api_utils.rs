//! API utilities for talking to the back office
//!
//! Every call returns `Result<T, ApiError>`. Mutation endpoints answer with
//! `{"message": ...}` on success and `{"error": ...}` on failure; the error text
//! is carried verbatim in [`ApiError::Server`] so pages can toast it.

use contracts::shared::ApiMessage;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Toast shown for network and decoding failures
pub const GENERIC_ERROR: &str = "Error al procesar solicitud";

/// Compile-time override of the API origin, e.g. `http://localhost:5000`
const API_BASE_OVERRIDE: Option<&str> = option_env!("BACKOFFICE_API_BASE");

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("invalid response: {0}")]
    Parse(String),
    /// Non-2xx response; `message` is the body's `error` (or `message`), empty when absent
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Text for an error toast: the server's own words when it sent any
    pub fn toast_text(&self) -> String {
        self.toast_text_or(GENERIC_ERROR)
    }

    /// Like [`toast_text`](Self::toast_text), with an action-specific fallback
    /// for server errors that carry no text
    pub fn toast_text_or(&self, server_fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } if !message.trim().is_empty() => message.clone(),
            ApiError::Server { .. } => server_fallback.to_string(),
            ApiError::Network(_) | ApiError::Parse(_) => GENERIC_ERROR.to_string(),
        }
    }
}

/// Get the base URL for API requests
///
/// The back office serves pages and JSON from the same origin, so this is the
/// page origin unless `BACKOFFICE_API_BASE` was set at build time.
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path like `/sales/12`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Turn a status code and raw body into a typed value or an [`ApiError`]
pub fn decode_body<T: DeserializeOwned>(path: &str, status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        let parsed: ApiMessage = serde_json::from_str(body).unwrap_or_default();
        let message = parsed.error.or(parsed.message).unwrap_or_default();
        return Err(ApiError::Server { status, message });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Parse(format!("{}: {}", path, e)))
}

async fn read_response<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Parse(format!("{}: {}", path, e)))?;
    decode_body(path, status, &body)
}

fn network_error(path: &str, e: gloo_net::Error) -> ApiError {
    let err = ApiError::Network(format!("{}: {}", path, e));
    log::error!("{}", err);
    err
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| network_error(path, e))?;
    read_response(path, response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Parse(format!("{}: {}", path, e)))?
        .send()
        .await
        .map_err(|e| network_error(path, e))?;
    read_response(path, response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Parse(format!("{}: {}", path, e)))?
        .send()
        .await
        .map_err(|e| network_error(path, e))?;
    read_response(path, response).await
}

/// POST without a body, for action endpoints like `mark-delivered`
pub async fn post_action(path: &str) -> Result<ApiMessage, ApiError> {
    let response = Request::post(&api_url(path))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| network_error(path, e))?;
    read_response(path, response).await
}

pub async fn delete(path: &str) -> Result<ApiMessage, ApiError> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| network_error(path, e))?;
    read_response(path, response).await
}

/// Raw bytes of a binary endpoint (PDF labels and receipts)
pub async fn get_bytes(path: &str) -> Result<Vec<u8>, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| network_error(path, e))?;
    if !response.ok() {
        return Err(ApiError::Server {
            status: response.status(),
            message: String::new(),
        });
    }
    response
        .binary()
        .await
        .map_err(|e| ApiError::Parse(format!("{}: {}", path, e)))
}

/// Percent-encode a free-text query parameter
pub fn encode_param(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_text_is_verbatim() {
        let err = decode_body::<ApiMessage>("/sales/3", 400, r#"{"error":"Venta no encontrada"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: "Venta no encontrada".to_string()
            }
        );
        assert_eq!(err.toast_text(), "Venta no encontrada");
    }

    #[test]
    fn test_server_error_without_body_uses_fallback() {
        let err = decode_body::<ApiMessage>("/sales/3", 500, "<html>").unwrap_err();
        assert_eq!(err.toast_text_or("Error al eliminar"), "Error al eliminar");
        assert_eq!(err.toast_text(), GENERIC_ERROR);
    }

    #[test]
    fn test_network_and_parse_errors_are_generic() {
        assert_eq!(ApiError::Network("offline".into()).toast_text_or("x"), GENERIC_ERROR);
        let err = decode_body::<ApiMessage>("/sales", 200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
        assert_eq!(err.toast_text(), GENERIC_ERROR);
    }

    #[test]
    fn test_success_body_decodes() {
        let ok: ApiMessage = decode_body("/sales/3", 200, r#"{"message":"Venta eliminada"}"#).unwrap();
        assert_eq!(ok.message_or(""), "Venta eliminada");
    }

    #[test]
    fn test_encode_param() {
        assert_eq!(encode_param("ana maría"), "ana%20mar%C3%ADa");
    }
}
