//! Console channel: inbound activities are JSON lines on a reader, outbound activities are JSON
//! lines on a writer. Turns run one at a time in input order.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use bot_core::{
    Activity, ActivityType, Bot, ChannelAccount, ConversationAccount, Result, TurnContext,
};
use chrono::Utc;
use handler_chain::HandlerChain;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::config::HostConfig;

/// [`Bot`] that writes each outbound activity as one compact JSON line.
pub struct ConsoleBot<W> {
    writer: Mutex<W>,
}

impl<W> ConsoleBot<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

#[async_trait]
impl<W> Bot for ConsoleBot<W>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    async fn send_activity(&self, activity: &Activity) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let mut outbound = activity.clone();
        outbound.id = Some(id.clone());
        outbound.timestamp = Some(Utc::now());

        let mut line = serde_json::to_vec(&outbound)?;
        line.push(b'\n');

        let mut writer = self.writer.lock().await;
        writer.write_all(&line).await?;
        writer.flush().await?;
        Ok(id)
    }
}

/// Fills the fields a console user would not bother to type: id, channel, recipient, conversation.
pub fn stamp_inbound(mut activity: Activity, config: &HostConfig) -> Activity {
    if activity.id.is_none() {
        activity.id = Some(Uuid::new_v4().to_string());
    }
    if activity.timestamp.is_none() {
        activity.timestamp = Some(Utc::now());
    }
    if activity.channel_id.is_none() {
        activity.channel_id = Some(config.channel_id.clone());
    }
    if activity.recipient.is_none() {
        activity.recipient = Some(ChannelAccount {
            id: config.bot_id.clone(),
            name: Some(config.bot_name.clone()),
        });
    }
    if activity.conversation.is_none() {
        activity.conversation = Some(ConversationAccount {
            id: config.conversation_id.clone(),
            conversation_type: Some("personal".to_string()),
        });
    }
    activity
}

/// Opens `path` for line reading, or stdin when `None`.
pub async fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn AsyncBufRead + Unpin + Send>> {
    match path {
        Some(path) => {
            let file = tokio::fs::File::open(path).await?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(tokio::io::stdin()))),
    }
}

/// Reads activities line by line and runs each through `chain`. Blank lines are skipped; lines
/// that do not decode are logged and skipped; a failed turn is logged and the next line is read.
/// Stops at end of input or when `cancel` fires. Returns the number of turns run.
#[instrument(skip_all)]
pub async fn run_console<R>(
    reader: R,
    bot: Arc<dyn Bot>,
    chain: &HandlerChain,
    config: &HostConfig,
    cancel: CancellationToken,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut turns = 0;

    loop {
        let line = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("Console input cancelled");
                break;
            }
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let activity = match serde_json::from_str::<Activity>(line) {
            Ok(activity) => stamp_inbound(activity, config),
            Err(e) => {
                warn!(error = %e, "Skipping line that is not an activity");
                continue;
            }
        };
        let is_invoke = activity.activity_type == ActivityType::Invoke;

        let turn = TurnContext::with_cancellation(activity, bot.clone(), cancel.child_token());
        turns += 1;

        match chain.handle(&turn).await {
            Ok(_) => {
                if is_invoke && !turn.invoke_responded() {
                    warn!(
                        invoke_name = %turn.activity().name.as_deref().unwrap_or(""),
                        "Invoke turn finished without an invoke response; the client will time out"
                    );
                }
            }
            Err(e) => {
                error!(error = %e, activity_id = ?turn.activity().id, "Turn failed");
            }
        }
    }

    info!(turns = turns, "Console input finished");
    Ok(turns)
}
