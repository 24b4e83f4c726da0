use std::fmt;

use serde::Serialize;

/// Node RPC methods queried by the utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Node identity and sync info.
    Status,
    /// Current validator set.
    Validators,
    /// Connected peers.
    NetInfo,
    /// Latest committed block.
    Block,
    /// Whether the node is still syncing.
    Syncing,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Status,
        Method::Validators,
        Method::NetInfo,
        Method::Block,
        Method::Syncing,
    ];

    /// Wire name sent in the `method` field of the request envelope.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Status => "status",
            Method::Validators => "validators",
            Method::NetInfo => "net_info",
            Method::Block => "block",
            Method::Syncing => "syncing",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
