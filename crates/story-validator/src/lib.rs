//! story-validator
//!
//! Diagnostic CLI for a validator node: queries the node's JSON-RPC endpoint
//! and prints node status, validator set, peers, latest block and sync state.

pub mod action;
pub mod config;
pub mod palette;
pub mod report;

use std::io::Write;

use anyhow::Context;
use tracing::debug;

use story_rpc::NodeClient;

pub use action::Action;
pub use config::{Config, OutputFormat};
pub use palette::{Palette, Tone};
pub use report::{truncate_id, Reporter};

/// Run `action` once against `client`, writing reports to `reporter`.
///
/// The first failure aborts the run; nothing after it is queried or printed.
pub async fn run<W: Write>(
    action: Action,
    client: &NodeClient,
    reporter: &mut Reporter<W>,
) -> anyhow::Result<()> {
    match action {
        Action::Health => run_health_check(client, reporter).await,
        Action::Node => print_node_info(client, reporter).await,
        Action::Validators => print_validators(client, reporter).await,
        Action::Peers => print_peers(client, reporter).await,
        Action::Block => print_latest_block(client, reporter).await,
        Action::Sync => print_syncing_status(client, reporter).await,
    }
}

/// Banner, then node info, syncing status, latest block, validators and
/// peers, strictly in that order.
pub async fn run_health_check<W: Write>(
    client: &NodeClient,
    reporter: &mut Reporter<W>,
) -> anyhow::Result<()> {
    reporter.health_banner()?;
    print_node_info(client, reporter).await?;
    print_syncing_status(client, reporter).await?;
    print_latest_block(client, reporter).await?;
    print_validators(client, reporter).await?;
    print_peers(client, reporter).await?;
    debug!("health check complete");
    Ok(())
}

pub async fn print_node_info<W: Write>(
    client: &NodeClient,
    reporter: &mut Reporter<W>,
) -> anyhow::Result<()> {
    let status = client.get_node_info().await.context("querying node status")?;
    reporter.node_info(&status)?;
    Ok(())
}

pub async fn print_validators<W: Write>(
    client: &NodeClient,
    reporter: &mut Reporter<W>,
) -> anyhow::Result<()> {
    let set = client.get_validators().await.context("querying validator set")?;
    reporter.validators(&set)?;
    Ok(())
}

pub async fn print_peers<W: Write>(
    client: &NodeClient,
    reporter: &mut Reporter<W>,
) -> anyhow::Result<()> {
    let net = client.get_peers().await.context("querying peers")?;
    reporter.peers(&net)?;
    Ok(())
}

pub async fn print_latest_block<W: Write>(
    client: &NodeClient,
    reporter: &mut Reporter<W>,
) -> anyhow::Result<()> {
    let block = client
        .get_latest_block()
        .await
        .context("querying latest block")?;
    reporter.latest_block(&block)?;
    Ok(())
}

pub async fn print_syncing_status<W: Write>(
    client: &NodeClient,
    reporter: &mut Reporter<W>,
) -> anyhow::Result<()> {
    let status = client
        .get_syncing_status()
        .await
        .context("querying syncing status")?;
    reporter.syncing(status)?;
    Ok(())
}
