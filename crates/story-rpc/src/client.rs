use serde_json::Value;
use tracing::debug;

use crate::envelope::{self, RpcRequest};
use crate::error::{Result, RpcError};
use crate::fields::check_required;
use crate::method::Method;
use crate::types::{BlockResult, NetInfo, NodeResponse, NodeStatus, SyncingStatus, ValidatorSet};

/// JSON-RPC 2.0 client for a validator node.
///
/// Uses raw HTTP POST with serde_json. Each call is awaited to completion
/// before the caller issues the next one; there is no retry and no timeout
/// beyond the HTTP client's defaults.
#[derive(Debug, Clone)]
pub struct NodeClient {
    url: String,
    client: reqwest::Client,
}

impl NodeClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Call a JSON-RPC method and return the `result` field.
    pub async fn call(&self, method: Method, params: &[Value]) -> Result<Value> {
        let request = RpcRequest::new(method, params);
        debug!(%method, url = %self.url, "sending RPC request");

        let resp = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|source| RpcError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = resp.status();
        debug!(%method, %status, "RPC response received");
        if !status.is_success() {
            return Err(RpcError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let bytes = resp.bytes().await.map_err(|source| RpcError::Transport {
            url: self.url.clone(),
            source,
        })?;
        let body: Value = serde_json::from_slice(&bytes).map_err(RpcError::Json)?;

        envelope::into_result(method, body)
    }

    /// Call `T::METHOD` with no params, validate required fields and decode.
    pub async fn fetch<T: NodeResponse>(&self) -> Result<T> {
        let result = self.call(T::METHOD, &[]).await?;
        check_required(T::METHOD, &result, T::REQUIRED)?;
        serde_json::from_value(result).map_err(|source| RpcError::Decode {
            method: T::METHOD,
            source,
        })
    }

    /// `status`: node identity and sync info.
    pub async fn get_node_info(&self) -> Result<NodeStatus> {
        self.fetch().await
    }

    /// `validators`: current validator set.
    pub async fn get_validators(&self) -> Result<ValidatorSet> {
        self.fetch().await
    }

    /// `net_info`: connected peers.
    pub async fn get_peers(&self) -> Result<NetInfo> {
        self.fetch().await
    }

    /// `block`: latest committed block.
    pub async fn get_latest_block(&self) -> Result<BlockResult> {
        self.fetch().await
    }

    /// `syncing`: whether the node is still catching up.
    pub async fn get_syncing_status(&self) -> Result<SyncingStatus> {
        self.fetch().await
    }
}
