use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "solace", about = "Chat with a streaming backend from the terminal")]
pub struct Cli {
    /// Path to a solace.toml config file
    #[arg(long, env = "SOLACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Chat endpoint URL
    #[arg(long, env = "SOLACE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Ask for a single JSON reply instead of an event stream
    #[arg(long)]
    pub json: bool,

    /// Directory the client identity is stored in
    #[arg(long, env = "SOLACE_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, env = "SOLACE_LOG")]
    pub log_level: Option<String>,
}
