//! CLI subcommand definitions
//!
//! The management surface of the toolkit: version and schema queries plus
//! source-tree listing.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the bidskit version
    Version {
        /// Also query the registry for newer releases
        #[arg(long)]
        check: bool,
    },
    /// Show the supported BIDS schema version
    BidsVersion,
    /// List the visible subdirectories of a source folder
    Dirs {
        /// The source folder to list
        folder: PathBuf,
        /// Glob pattern; use a `**` segment for recursive search
        #[arg(short, long, default_value = "*")]
        pattern: String,
    },
    /// Show the package context locations
    Paths,
}
