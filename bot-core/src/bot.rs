//! Bot abstraction for delivering outbound activities.
//!
//! [`Bot`] is transport-agnostic: the host supplies an implementation that owns the channel
//! (HTTP connector, console, test recorder).

use async_trait::async_trait;

use crate::activity::Activity;
use crate::error::Result;

/// Delivers outbound activities. Implementations map to a transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends one activity and returns the id the channel assigned to it.
    /// Resolves once the transport confirms delivery; a transport failure is [`crate::BotError::Bot`].
    async fn send_activity(&self, activity: &Activity) -> Result<String>;
}
