//! Binary for the task module bot on the console channel.

use anyhow::Result;
use clap::Parser;
use task_module_bot::{run_bot, Cli, Commands, HostConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { input } => {
            let config = HostConfig::load()?;
            run_bot(config, input).await
        }
        Commands::Card { action_type } => {
            let card = task_module::task_module_card(&action_type);
            println!("{}", serde_json::to_string_pretty(&card)?);
            Ok(())
        }
    }
}
