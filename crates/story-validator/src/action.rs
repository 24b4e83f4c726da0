use std::fmt;

use clap::ValueEnum;

/// What a single invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Run every report in sequence.
    Health,
    /// Node identity and sync info.
    Node,
    /// Validator set table.
    Validators,
    /// Connected peers table.
    Peers,
    /// Latest block summary.
    Block,
    /// Syncing status.
    Sync,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Health => "health",
            Action::Node => "node",
            Action::Validators => "validators",
            Action::Peers => "peers",
            Action::Block => "block",
            Action::Sync => "sync",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_names_match_display() {
        for action in Action::value_variants() {
            let pv = action.to_possible_value().unwrap();
            assert_eq!(pv.get_name(), action.as_str());
        }
    }
}
