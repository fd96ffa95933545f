//! HTTP client for the platform API.
//!
//! Thin wrapper over `gloo_net` that attaches the bearer token from the
//! auth context, funnels every response body through the envelope gateway
//! in `common`, and turns failures into `ApiError` values with a
//! best-effort human-readable message. Nothing here retries or caches;
//! the backend is the single source of truth.

pub mod courses;
pub mod curriculum;

use common::envelope::ShapeError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

const API_BASE: &str = "/api";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network/transport failure).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with an error status; `message` is extracted
    /// from the body when possible, else a generic fallback.
    #[error("{message}")]
    Backend { status: u16, message: String },
    /// The response arrived but matched no known envelope shape.
    #[error("{0}")]
    Shape(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<ShapeError> for ApiError {
    fn from(err: ShapeError) -> Self {
        ApiError::Shape(err.to_string())
    }
}

/// Cheap-to-clone handle carrying the bearer token. One instance is built
/// from the auth session at app start and passed down through props.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    token: String,
}

impl ApiClient {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Authorization", &format!("Bearer {}", self.token))
    }

    /// GET returning the raw JSON body; envelope handling is up to the
    /// typed helpers in the sibling modules.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let builder = Request::get(&join(path)).query(query.iter().map(|(k, v)| (*k, v.as_str())));
        let response = self.authorized(builder).send().await?;
        read_json(response).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.authorized(Request::post(&join(path))).json(body)?;
        read_json(request.send().await?).await
    }

    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.authorized(Request::patch(&join(path))).json(body)?;
        read_json(request.send().await?).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.authorized(Request::delete(&join(path))).send().await?;
        if response.ok() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

fn join(path: &str) -> String {
    format!("{API_BASE}{path}")
}

async fn read_json(response: Response) -> Result<Value, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    let text = response.text().await?;
    if text.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|err| ApiError::Shape(err.to_string()))
}

/// Pulls a displayable message out of an error response body: a `message`
/// or `error` string field when the body is JSON, the raw body when it is
/// short plain text, else the HTTP status line.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let fallback = format!("request failed with status {status}");
    let message = match response.text().await {
        Ok(body) if !body.is_empty() => match serde_json::from_str::<Value>(&body) {
            Ok(json) => json
                .get("message")
                .or_else(|| json.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(fallback),
            Err(_) if body.len() <= 200 => body,
            Err(_) => fallback,
        },
        _ => fallback,
    };
    ApiError::Backend { status, message }
}
