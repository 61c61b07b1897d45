pub mod scan;

use clap::{Parser, Subcommand};
pub use scan::ScanArgs;

#[derive(Parser, Debug)]
#[command(
    name = "depot",
    version,
    about = "Depot - storage aggregation service tools",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enumerate regular files under a root path.
    ///
    /// Example:
    ///   depot scan /srv/share
    ///   depot scan --threads 8 --json /srv/share
    Scan(ScanArgs),
}
