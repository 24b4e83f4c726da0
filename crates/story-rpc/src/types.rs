use std::fmt;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::method::Method;

/// A typed `result` payload for one RPC method.
///
/// `REQUIRED` lists the field paths (see [`crate::fields`]) that must be
/// present before the payload is deserialized.
pub trait NodeResponse: DeserializeOwned {
    const METHOD: Method;
    const REQUIRED: &'static [&'static str];
}

// ── Text ─────────────────────────────────────────────────────────────────────

/// A scalar rendered exactly as the node sent it.
///
/// CometBFT encodes heights, powers and priorities as JSON strings, but some
/// nodes send plain numbers. Strings are kept verbatim; numbers and booleans
/// keep their JSON text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Text(pub String);

impl Text {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Text(s)),
            v @ (Value::Number(_) | Value::Bool(_)) => Ok(Text(v.to_string())),
            other => Err(de::Error::custom(format!(
                "expected a string, number or boolean, found {other}"
            ))),
        }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── status ───────────────────────────────────────────────────────────────────

/// Result of `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeStatus {
    pub node_info: NodeInfo,
    pub sync_info: SyncInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeInfo {
    pub id: Text,
    pub moniker: Text,
    pub network: Text,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncInfo {
    pub latest_block_height: Text,
    pub catching_up: bool,
}

impl NodeResponse for NodeStatus {
    const METHOD: Method = Method::Status;
    const REQUIRED: &'static [&'static str] = &[
        "node_info.id",
        "node_info.moniker",
        "node_info.network",
        "sync_info.latest_block_height",
        "sync_info.catching_up",
    ];
}

// ── validators ───────────────────────────────────────────────────────────────

/// Result of `validators`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorSet {
    pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Validator {
    pub address: Text,
    pub voting_power: Text,
    pub proposer_priority: Text,
}

impl NodeResponse for ValidatorSet {
    const METHOD: Method = Method::Validators;
    const REQUIRED: &'static [&'static str] = &[
        "validators[].address",
        "validators[].voting_power",
        "validators[].proposer_priority",
    ];
}

// ── net_info ─────────────────────────────────────────────────────────────────

/// Result of `net_info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetInfo {
    pub peers: Vec<Peer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Peer {
    pub node_info: PeerNodeInfo,
    pub remote_ip: Text,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerNodeInfo {
    pub id: Text,
    pub moniker: Text,
}

impl NodeResponse for NetInfo {
    const METHOD: Method = Method::NetInfo;
    const REQUIRED: &'static [&'static str] = &[
        "peers[].node_info.id",
        "peers[].node_info.moniker",
        "peers[].remote_ip",
    ];
}

// ── block ────────────────────────────────────────────────────────────────────

/// Result of `block`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockResult {
    pub block: Block,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub data: BlockData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockHeader {
    pub height: Text,
    pub last_block_id: BlockId,
    pub proposer_address: Text,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockId {
    pub hash: Text,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockData {
    /// Base64-encoded transactions. Older nodes send `null` for an empty block.
    pub txs: Option<Vec<String>>,
}

impl BlockData {
    pub fn tx_count(&self) -> usize {
        self.txs.as_ref().map_or(0, Vec::len)
    }
}

impl NodeResponse for BlockResult {
    const METHOD: Method = Method::Block;
    const REQUIRED: &'static [&'static str] = &[
        "block.header.height",
        "block.header.last_block_id.hash",
        "block.header.proposer_address",
        "block.data.txs",
    ];
}

// ── syncing ──────────────────────────────────────────────────────────────────

/// Result of `syncing`, reduced to its truthiness.
///
/// `false`, `null`, `0`, `""`, `[]` and `{}` mean not syncing; anything else
/// (including a progress object) means syncing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SyncingStatus(pub bool);

impl SyncingStatus {
    pub fn is_syncing(self) -> bool {
        self.0
    }
}

impl<'de> Deserialize<'de> for SyncingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let truthy = match Value::deserialize(deserializer)? {
            Value::Null => false,
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        };
        Ok(SyncingStatus(truthy))
    }
}

impl NodeResponse for SyncingStatus {
    const METHOD: Method = Method::Syncing;
    const REQUIRED: &'static [&'static str] = &[];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_keeps_strings_verbatim() {
        let t: Text = serde_json::from_value(json!("0012")).unwrap();
        assert_eq!(t.as_str(), "0012");
    }

    #[test]
    fn text_accepts_numbers() {
        let t: Text = serde_json::from_value(json!(-250)).unwrap();
        assert_eq!(t.to_string(), "-250");
    }

    #[test]
    fn text_rejects_objects() {
        assert!(serde_json::from_value::<Text>(json!({"a": 1})).is_err());
    }

    #[test]
    fn syncing_truthiness() {
        let cases = [
            (json!(true), true),
            (json!(false), false),
            (json!(null), false),
            (json!(0), false),
            (json!(3), true),
            (json!(""), false),
            (json!({}), false),
            (json!({"currentBlock": "0x10", "highestBlock": "0x20"}), true),
        ];
        for (value, expected) in cases {
            let status: SyncingStatus = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(status.is_syncing(), expected, "value {value}");
        }
    }

    #[test]
    fn null_txs_count_as_zero() {
        let data: BlockData = serde_json::from_value(json!({"txs": null})).unwrap();
        assert_eq!(data.tx_count(), 0);
        let data: BlockData = serde_json::from_value(json!({"txs": ["AAE=", "AAI="]})).unwrap();
        assert_eq!(data.tx_count(), 2);
    }

    #[test]
    fn status_ignores_extra_fields() {
        let status: NodeStatus = serde_json::from_value(json!({
            "node_info": {
                "id": "f0e1d2c3b4a5",
                "moniker": "story-val-01",
                "network": "odyssey-0",
                "version": "0.38.12"
            },
            "sync_info": {"latest_block_height": "1234567", "catching_up": false},
            "validator_info": {"voting_power": "100"}
        }))
        .unwrap();
        assert_eq!(status.node_info.moniker.as_str(), "story-val-01");
        assert!(!status.sync_info.catching_up);
    }
}
