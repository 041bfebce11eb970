//! Logging handler: logs each inbound turn in before() and the final response in after().

use async_trait::async_trait;
use bot_core::{Handler, HandlerResponse, Result, TurnContext};
use tracing::{info, instrument};

/// Always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, turn))]
    async fn before(&self, turn: &TurnContext) -> Result<bool> {
        let activity = turn.activity();
        info!(
            activity_type = ?activity.activity_type,
            from = %activity.from.as_ref().map(|f| f.id.as_str()).unwrap_or("unknown"),
            name = %activity.name.as_deref().unwrap_or(""),
            text = %activity.text.as_deref().unwrap_or(""),
            "Received activity"
        );
        Ok(true)
    }

    #[instrument(skip(self, turn, response))]
    async fn after(&self, turn: &TurnContext, response: &HandlerResponse) -> Result<()> {
        info!(
            activity_id = ?turn.activity().id,
            response = ?response,
            invoke_responded = turn.invoke_responded(),
            "Processed activity"
        );
        Ok(())
    }
}
