//! Rendering of RPC results as labeled lines, grid tables or JSON.
//!
//! Printers never touch the network; they only format what they are given.

use std::io::{self, Write};

use prettytable::{Cell, Row, Table};
use serde::Serialize;

use story_rpc::{BlockResult, NetInfo, NodeStatus, SyncingStatus, ValidatorSet};

use crate::config::OutputFormat;
use crate::palette::{Palette, Tone};

/// Characters kept from an identifier shown in a table.
pub const ID_PREFIX_CHARS: usize = 10;

/// First [`ID_PREFIX_CHARS`] characters of `id` followed by `...`.
///
/// The ellipsis is appended even when nothing was cut.
pub fn truncate_id(id: &str) -> String {
    let mut short: String = id.chars().take(ID_PREFIX_CHARS).collect();
    short.push_str("...");
    short
}

/// Writes reports to a sink in the configured format.
pub struct Reporter<W: Write> {
    out: W,
    palette: Palette,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, palette: Palette, format: OutputFormat) -> Self {
        Self {
            out,
            palette,
            format,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// `Running Health Check...`, text format only.
    pub fn health_banner(&mut self) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            let banner = self.palette.paint("Running Health Check...", Tone::Banner);
            writeln!(self.out, "{banner}")?;
        }
        Ok(())
    }

    pub fn node_info(&mut self, status: &NodeStatus) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(status);
        }
        let node = &status.node_info;
        let sync = &status.sync_info;
        writeln!(self.out, "{}", self.palette.paint("Node Information:", Tone::Title))?;
        writeln!(self.out, "Node ID: {}", node.id)?;
        writeln!(self.out, "Moniker: {}", node.moniker)?;
        writeln!(self.out, "Network: {}", node.network)?;
        writeln!(self.out, "Latest Block Height: {}", sync.latest_block_height)?;
        writeln!(self.out, "Catching Up: {}", sync.catching_up)?;
        Ok(())
    }

    pub fn validators(&mut self, set: &ValidatorSet) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(set);
        }
        let rows = set.validators.iter().map(|v| {
            [
                truncate_id(v.address.as_str()),
                v.voting_power.to_string(),
                v.proposer_priority.to_string(),
            ]
        });
        let table = grid(["Address", "Voting Power", "Proposer Priority"], rows);
        writeln!(self.out, "\n{}", self.palette.paint("Validators:", Tone::Title))?;
        write!(self.out, "{table}")
    }

    pub fn peers(&mut self, net: &NetInfo) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(net);
        }
        let rows = net.peers.iter().map(|p| {
            [
                truncate_id(p.node_info.id.as_str()),
                p.node_info.moniker.to_string(),
                p.remote_ip.to_string(),
            ]
        });
        let table = grid(["Node ID", "Moniker", "IP Address"], rows);
        writeln!(self.out, "\n{}", self.palette.paint("Connected Peers:", Tone::Title))?;
        write!(self.out, "{table}")
    }

    pub fn latest_block(&mut self, result: &BlockResult) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(result);
        }
        let header = &result.block.header;
        writeln!(
            self.out,
            "\n{}",
            self.palette.paint("Latest Block Information:", Tone::Title)
        )?;
        writeln!(self.out, "Height: {}", header.height)?;
        writeln!(self.out, "Hash: {}", header.last_block_id.hash)?;
        writeln!(self.out, "Proposer: {}", header.proposer_address)?;
        writeln!(self.out, "Number of Transactions: {}", result.block.data.tx_count())?;
        Ok(())
    }

    pub fn syncing(&mut self, status: SyncingStatus) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(&status);
        }
        let label = if status.is_syncing() {
            self.palette.paint("Syncing", Tone::Warn)
        } else {
            self.palette.paint("Not Syncing", Tone::Normal)
        };
        writeln!(
            self.out,
            "\n{} {label}",
            self.palette.paint("Syncing Status:", Tone::Title)
        )
    }

    fn json<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        writeln!(self.out, "{text}")
    }
}

/// Grid table with a header row, in the `+---+` / `+===+` style.
fn grid<I>(headers: [&str; 3], rows: I) -> Table
where
    I: IntoIterator<Item = [String; 3]>,
{
    let mut table = Table::new();
    table.set_titles(Row::new(headers.iter().map(|h| Cell::new(h)).collect()));
    for row in rows {
        table.add_row(Row::new(row.iter().map(|c| Cell::new(c)).collect()));
    }
    table
}
