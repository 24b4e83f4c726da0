use clap::ValueEnum;

use crate::action::Action;
use crate::palette::Palette;

/// Default CometBFT RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "http://localhost:26657";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,story_validator=info,story_rpc=info";

/// How reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Labeled lines and grid tables.
    #[default]
    Text,
    /// Pretty-printed JSON of each typed response.
    Json,
}

/// Settings for one invocation, fixed at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON-RPC endpoint.
    pub rpc_url: String,
    pub action: Action,
    pub format: OutputFormat,
    /// Emit ANSI colors (text format only).
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.into(),
            action: Action::Health,
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Config {
    pub fn palette(&self) -> Palette {
        if self.color && self.format == OutputFormat::Text {
            Palette::detect()
        } else {
            Palette::plain()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_output_is_never_colored() {
        let config = Config {
            format: OutputFormat::Json,
            ..Config::default()
        };
        assert!(!config.palette().is_enabled());
    }

    #[test]
    fn color_can_be_disabled() {
        let config = Config {
            color: false,
            ..Config::default()
        };
        assert!(!config.palette().is_enabled());
    }
}
