//! Per-turn context: the inbound activity, the bot used to reply, and the turn's cancellation token.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::activity::{Activity, ActivityType, InvokeResponse};
use crate::bot::Bot;
use crate::error::{BotError, Result};

/// One inbound activity plus everything a handler needs to answer it.
pub struct TurnContext {
    activity: Activity,
    bot: Arc<dyn Bot>,
    cancellation: CancellationToken,
    invoke_responded: AtomicBool,
}

impl TurnContext {
    /// Creates a context with a fresh, never-cancelled token.
    pub fn new(activity: Activity, bot: Arc<dyn Bot>) -> Self {
        Self::with_cancellation(activity, bot, CancellationToken::new())
    }

    /// Creates a context whose sends abort once `cancellation` fires.
    pub fn with_cancellation(
        activity: Activity,
        bot: Arc<dyn Bot>,
        cancellation: CancellationToken,
    ) -> Self {
        Self {
            activity,
            bot,
            cancellation,
            invoke_responded: AtomicBool::new(false),
        }
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// True once an `invokeResponse` has been sent on this turn.
    pub fn invoke_responded(&self) -> bool {
        self.invoke_responded.load(Ordering::SeqCst)
    }

    /// Sends `outbound` on the inbound activity's conversation. Fails with [`BotError::Cancelled`]
    /// if the token fires before the bot confirms delivery.
    #[instrument(skip(self, outbound), fields(activity_type = ?outbound.activity_type))]
    pub async fn send_activity(&self, mut outbound: Activity) -> Result<String> {
        self.apply_conversation_reference(&mut outbound);

        if self.cancellation.is_cancelled() {
            return Err(BotError::Cancelled);
        }

        let id = tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => return Err(BotError::Cancelled),
            sent = self.bot.send_activity(&outbound) => sent?,
        };

        if outbound.activity_type == ActivityType::InvokeResponse {
            self.invoke_responded.store(true, Ordering::SeqCst);
        }
        debug!(activity_id = %id, "step: activity sent");
        Ok(id)
    }

    /// Sends a plain text message.
    pub async fn send_text(&self, text: &str) -> Result<String> {
        self.send_activity(Activity::text(text)).await
    }

    /// Acknowledges the inbound invoke with status 200 and the given body (or `null`).
    pub async fn send_invoke_response(&self, body: Option<Value>) -> Result<String> {
        let outbound = Activity::invoke_response(&InvokeResponse::ok(body))?;
        self.send_activity(outbound).await
    }

    /// Addresses `outbound` back to the sender of the inbound activity.
    fn apply_conversation_reference(&self, outbound: &mut Activity) {
        let inbound = &self.activity;
        outbound.channel_id = inbound.channel_id.clone();
        outbound.service_url = inbound.service_url.clone();
        outbound.conversation = inbound.conversation.clone();
        outbound.from = inbound.recipient.clone();
        outbound.recipient = inbound.from.clone();
        if outbound.reply_to_id.is_none() {
            outbound.reply_to_id = inbound.id.clone();
        }
    }
}
