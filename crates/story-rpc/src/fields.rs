//! Required-field validation for untyped RPC results.
//!
//! Paths are dotted key chains. A segment ending in `[]` names an array whose
//! every element must satisfy the rest of the path, e.g.
//! `validators[].address`. Missing fields are reported with the concrete
//! element index: `validators[3].address`.

use serde_json::Value;

use crate::error::{Result, RpcError};
use crate::method::Method;

/// Check every path in `required` against `value`.
pub fn check_required(method: Method, value: &Value, required: &[&str]) -> Result<()> {
    for path in required {
        let segments: Vec<&str> = path.split('.').collect();
        if let Some(field) = first_missing(value, &segments, "") {
            return Err(RpcError::MissingField { method, field });
        }
    }
    Ok(())
}

fn first_missing(value: &Value, segments: &[&str], prefix: &str) -> Option<String> {
    let (head, rest) = segments.split_first()?;
    let (key, each) = match head.strip_suffix("[]") {
        Some(key) => (key, true),
        None => (*head, false),
    };
    let here = if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    };

    let Some(child) = value.as_object().and_then(|obj| obj.get(key)) else {
        return Some(here);
    };

    if !each {
        return first_missing(child, rest, &here);
    }

    // A non-array here is a type mismatch, left for deserialization to report.
    child.as_array().and_then(|items| {
        items
            .iter()
            .enumerate()
            .find_map(|(i, item)| first_missing(item, rest, &format!("{here}[{i}]")))
    })
}
