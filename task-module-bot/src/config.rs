//! Host config, loaded from environment variables.

use anyhow::Result;
use std::env;

/// Console host config: bot identity, channel id, log file.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// BOT_ID
    pub bot_id: String,
    /// BOT_NAME
    pub bot_name: String,
    /// CHANNEL_ID; stamped on inbound activities that carry none
    pub channel_id: String,
    /// CONVERSATION_ID; conversation of inbound activities that carry none
    pub conversation_id: String,
    /// LOG_FILE
    pub log_file: String,
}

impl HostConfig {
    /// Load from environment variables. Call validate() after load to fail fast before init.
    pub fn load() -> Result<Self> {
        let bot_id = env::var("BOT_ID").unwrap_or_else(|_| "task-module-bot".to_string());
        let bot_name = env::var("BOT_NAME").unwrap_or_else(|_| "Task Module Bot".to_string());
        let channel_id = env::var("CHANNEL_ID").unwrap_or_else(|_| "console".to_string());
        let conversation_id = env::var("CONVERSATION_ID")
            .unwrap_or_else(|_| "console-conversation".to_string());
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/task-module-bot.log".to_string());

        Ok(Self {
            bot_id,
            bot_name,
            channel_id,
            conversation_id,
            log_file,
        })
    }

    /// Validate config (identity and log path must be non-empty).
    pub fn validate(&self) -> Result<()> {
        if self.bot_id.trim().is_empty() {
            anyhow::bail!("BOT_ID is set but empty");
        }
        if self.conversation_id.trim().is_empty() {
            anyhow::bail!("CONVERSATION_ID is set but empty");
        }
        if self.log_file.trim().is_empty() {
            anyhow::bail!("LOG_FILE is set but empty");
        }
        Ok(())
    }
}
