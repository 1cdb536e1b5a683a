// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::Variant;

#[derive(Parser, Debug, Clone)]
#[command(name = "bubble-pop")]
#[command(about = "Champagne bubble-popping scene", long_about = None)]
pub struct Cli {
    /// Scene variant to run
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// JSON scene configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Session length in seconds
    #[arg(long)]
    pub duration: Option<u32>,

    /// Number of bubbles in the pool
    #[arg(long)]
    pub bubbles: Option<usize>,

    /// Disable the score/time overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
