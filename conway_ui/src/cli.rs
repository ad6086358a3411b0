// cli.rs - Command line flags

use std::path::PathBuf;

use clap::Parser;
use conway::SceneId;

/// Conway's Game of Life on a 16x25 grid.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// TOML settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tick interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub speed: Option<u64>,

    /// Scene loaded at startup: first, second or third
    #[arg(long)]
    pub scene: Option<SceneId>,
}
