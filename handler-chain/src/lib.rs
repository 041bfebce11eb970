//! # Handler chain
//!
//! Runs a sequence of handlers for each turn. Every handler's before runs first (any false stops the
//! turn); then handle runs until one returns Stop; after callbacks run in reverse order.

use bot_core::{Handler, HandlerResponse, Result, TurnContext};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of handlers: before (all) → handle (until Stop) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in order; first Stop ends the handle phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs all before → handle until Stop → all after in reverse. Returns Stop if any handler
    /// (or before) stopped the turn, otherwise Continue.
    #[instrument(skip(self, turn))]
    pub async fn handle(&self, turn: &TurnContext) -> Result<HandlerResponse> {
        let activity = turn.activity();
        let activity_id = activity.id.as_deref().unwrap_or_default();
        let conversation_id = activity
            .conversation
            .as_ref()
            .map(|c| c.id.as_str())
            .unwrap_or_default();
        let mut final_response = HandlerResponse::Continue;

        info!(
            activity_type = ?activity.activity_type,
            activity_id = %activity_id,
            conversation_id = %conversation_id,
            "step: handler_chain started"
        );

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            debug!(handler = %name, "step: handler before");
            let should_continue = h.before(turn).await?;
            if !should_continue {
                info!(handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            debug!(handler = %name, "step: handler handle");
            let response = h.handle(turn).await?;
            info!(
                handler = %name,
                response = ?response,
                "step: handler handle done"
            );

            match response {
                HandlerResponse::Stop => {
                    info!(activity_id = %activity_id, "step: handler chain stopped by handler");
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
            }
        }

        for h in self.handlers.iter().rev() {
            let name = std::any::type_name_of_val(h.as_ref());
            debug!(handler = %name, "step: handler after");
            h.after(turn, &final_response).await?;
        }

        info!(
            activity_id = %activity_id,
            conversation_id = %conversation_id,
            invoke_responded = turn.invoke_responded(),
            "step: handler_chain finished"
        );

        Ok(final_response)
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
