//! story-rpc
//!
//! JSON-RPC 2.0 client for CometBFT-style validator nodes.
//!
//! Methods:
//!   status     : node identity and sync info
//!   validators : current validator set
//!   net_info   : connected peers
//!   block      : latest committed block
//!   syncing    : whether the node is still catching up

pub mod client;
pub mod envelope;
pub mod error;
pub mod fields;
pub mod method;
pub mod types;

pub use client::NodeClient;
pub use envelope::RpcRequest;
pub use error::{Result, RpcError};
pub use method::Method;
pub use types::{
    Block, BlockData, BlockHeader, BlockId, BlockResult, NetInfo, NodeInfo, NodeResponse,
    NodeStatus, Peer, PeerNodeInfo, SyncInfo, SyncingStatus, Text, ValidatorSet, Validator,
};
