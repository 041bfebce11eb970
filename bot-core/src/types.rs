//! Handler trait and handler response for the chain.

use async_trait::async_trait;

use crate::turn::TurnContext;

/// Handler result for the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Not handled here; pass to the next handler.
    Continue,
    /// Turn handled; stop the handle phase.
    Stop,
    /// The handler recognised the turn kind but explicitly declined it; try the next handler.
    Ignore,
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _turn: &TurnContext) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the turn. Return Stop to end the handle phase. Default: Continue.
    async fn handle(&self, _turn: &TurnContext) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _turn: &TurnContext,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
