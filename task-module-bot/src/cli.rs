//! CLI parser.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "task-module-bot")]
#[command(about = "Task module sample bot on a JSON-lines console channel", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read inbound activities (one JSON object per line) and write outbound activities to stdout.
    Run {
        /// Read activities from this file instead of stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print the task module card for an action label.
    Card {
        #[arg(short, long, default_value = "action 1")]
        action_type: String,
    },
}
