//! JSON-RPC 2.0 request and response envelopes.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, RpcError};
use crate::method::Method;

/// Every request is sent with this id; calls are strictly sequential.
pub const REQUEST_ID: u64 = 1;

/// Request body. Field order is the serialized key order:
/// `{"jsonrpc":"2.0","id":1,"method":"<name>","params":[]}`.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: Method,
    params: &'a [Value],
}

impl<'a> RpcRequest<'a> {
    pub fn new(method: Method, params: &'a [Value]) -> Self {
        Self {
            jsonrpc: "2.0",
            id: REQUEST_ID,
            method,
            params,
        }
    }
}

/// Extract `result` from a response body, turning an `error` object into
/// [`RpcError::Rpc`]. A present-but-null `result` is returned as `null`.
pub fn into_result(method: Method, mut body: Value) -> Result<Value> {
    if let Some(err) = body.get("error").filter(|e| !e.is_null()) {
        return Err(RpcError::Rpc {
            code: err.get("code").and_then(Value::as_i64).unwrap_or_default(),
            message: err
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(|| err.to_string()),
            data: err.get("data").cloned(),
        });
    }

    body.as_object_mut()
        .and_then(|obj| obj.remove("result"))
        .ok_or(RpcError::MissingResult { method })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_envelope_is_fixed() {
        for method in Method::ALL {
            let body = serde_json::to_string(&RpcRequest::new(method, &[])).unwrap();
            assert_eq!(
                body,
                format!(r#"{{"jsonrpc":"2.0","id":1,"method":"{method}","params":[]}}"#)
            );
        }
    }

    #[test]
    fn result_is_extracted() {
        let body = json!({"jsonrpc": "2.0", "id": 1, "result": {"validators": []}});
        let result = into_result(Method::Validators, body).unwrap();
        assert_eq!(result, json!({"validators": []}));
    }

    #[test]
    fn null_result_is_kept() {
        let body = json!({"jsonrpc": "2.0", "id": 1, "result": null});
        assert_eq!(into_result(Method::Syncing, body).unwrap(), Value::Null);
    }

    #[test]
    fn error_object_becomes_rpc_error() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32601, "message": "Method not found", "data": "syncing"}
        });
        match into_result(Method::Syncing, body) {
            Err(RpcError::Rpc { code, message, data }) => {
                assert_eq!(code, -32601);
                assert_eq!(message, "Method not found");
                assert_eq!(data, Some(json!("syncing")));
            }
            other => panic!("expected RPC error, got {other:?}"),
        }
    }

    #[test]
    fn missing_result_is_reported() {
        let body = json!({"jsonrpc": "2.0", "id": 1});
        assert!(matches!(
            into_result(Method::Block, body),
            Err(RpcError::MissingResult { method: Method::Block })
        ));
    }
}
