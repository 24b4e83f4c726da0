//! story-validator
//!
//! Query a validator node's JSON-RPC endpoint and print a diagnostic summary.
//!
//! Usage:
//!   story-validator [--rpc <url>] [--action <health|node|validators|peers|block|sync>]
//!                   [--format <text|json>] [--no-color]

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use story_rpc::NodeClient;
use story_validator::config::{DEFAULT_LOG_FILTER, DEFAULT_RPC_URL};
use story_validator::{Action, Config, OutputFormat, Reporter};

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "story-validator",
    version,
    about = "Story blockchain validator utility: node, validator, peer and sync diagnostics"
)]
struct Args {
    /// Node RPC endpoint.
    #[arg(long, default_value = DEFAULT_RPC_URL)]
    rpc: String,

    /// Action to perform.
    #[arg(long, value_enum, default_value_t = Action::Health)]
    action: Action,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable colored output.
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            rpc_url: self.rpc,
            action: self.action,
            format: self.format,
            color: !self.no_color,
        }
    }
}

// ── Main ─────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let config = args.into_config();
    debug!(rpc = %config.rpc_url, action = %config.action, "starting");

    let client = NodeClient::new(config.rpc_url.as_str());
    let mut reporter = Reporter::new(io::stdout(), config.palette(), config.format);

    story_validator::run(config.action, &client, &mut reporter)
        .await
        .with_context(|| format!("`{}` against {} failed", config.action, config.rpc_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Args::try_parse_from(["story-validator"]).unwrap().into_config();
        assert_eq!(config.rpc_url, "http://localhost:26657");
        assert_eq!(config.action, Action::Health);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.color);
    }

    #[test]
    fn every_action_parses() {
        for name in ["health", "node", "validators", "peers", "block", "sync"] {
            let args = Args::try_parse_from(["story-validator", "--action", name]).unwrap();
            assert_eq!(args.action.as_str(), name);
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = Args::try_parse_from(["story-validator", "--action", "restart"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn flags_fold_into_config() {
        let config = Args::try_parse_from([
            "story-validator",
            "--rpc",
            "http://10.0.0.5:26657",
            "--format",
            "json",
            "--no-color",
        ])
        .unwrap()
        .into_config();
        assert_eq!(config.rpc_url, "http://10.0.0.5:26657");
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
    }
}
