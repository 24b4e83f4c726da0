use reqwest::StatusCode;
use thiserror::Error;

use crate::method::Method;

#[derive(Debug, Error)]
pub enum RpcError {
    // ── Transport errors ─────────────────────────────────────────────────────
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("node at {url} answered with HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("response body is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    // ── Envelope errors ──────────────────────────────────────────────────────
    #[error("RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error("response to `{method}` carries no `result` field")]
    MissingResult { method: Method },

    // ── Schema errors ────────────────────────────────────────────────────────
    #[error("response to `{method}` is missing field `{field}`")]
    MissingField { method: Method, field: String },

    #[error("response to `{method}` has an unexpected shape: {source}")]
    Decode {
        method: Method,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, RpcError>;
