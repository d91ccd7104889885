//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use clap::Parser;

use crate::config::Config;
use crate::consts::REGISTRY_URL;
use crate::context::DISCLAIMER;

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "bidskit")]
#[command(about = "BIDS conversion toolkit management", version)]
#[command(after_long_help = DISCLAIMER)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Skip all network access (version checks report unknown)
    #[arg(short = 'O', long, global = true)]
    pub(crate) offline: bool,

    /// Registry endpoint queried by version checks
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) registry: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.offline && config.offline {
            self.offline = true;
        }
        if self.registry.is_none() {
            self.registry = config.registry_url.clone();
        }
        self
    }

    pub(crate) fn registry_url(&self) -> &str {
        self.registry.as_deref().unwrap_or(REGISTRY_URL)
    }
}
