//! Wires the handler chain to the console channel and runs it until input ends or Ctrl-C.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use bot_core::{init_tracing, Bot};
use handler_chain::HandlerChain;
use task_module::TaskModuleHandler;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use crate::config::HostConfig;
use crate::console::{open_input, run_console, ConsoleBot};
use crate::handlers::LoggingHandler;

/// Logging first, then the task module handler.
pub fn build_handler_chain() -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(TaskModuleHandler::new()))
}

/// Main entry: validate config, init logging, build the chain, then read turns from `input` (or stdin).
#[instrument(skip(config))]
pub async fn run_bot(config: HostConfig, input: Option<PathBuf>) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        bot_id = %config.bot_id,
        channel_id = %config.channel_id,
        input = ?input,
        "Initializing bot"
    );

    let chain = build_handler_chain();
    let bot: Arc<dyn Bot> = Arc::new(ConsoleBot::new(tokio::io::stdout()));
    let reader = open_input(input.as_deref()).await?;

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Ctrl-C received; cancelling");
            on_ctrl_c.cancel();
        }
    });

    info!("Bot started successfully");
    let turns = run_console(reader, bot, &chain, &config, cancel).await?;
    info!(turns = turns, "Bot stopped");

    Ok(())
}
