//! Mock implementation of [`bot_core::Bot`] for integration tests.
//!
//! Records every outbound activity in send order so tests can assert on count, order, and content
//! without a channel. Can be told to fail every send to simulate a broken channel.

use async_trait::async_trait;
use bot_core::{Activity, Bot, BotError, Result};
use std::sync::Mutex;

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Activity>>,
    fail_sends: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bot whose every send fails with [`BotError::Bot`].
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_sends: true,
        }
    }

    /// Snapshot of the activities sent so far.
    pub fn sent(&self) -> Vec<Activity> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_activity(&self, activity: &Activity) -> Result<String> {
        if self.fail_sends {
            return Err(BotError::Bot("channel unavailable".to_string()));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(activity.clone());
        Ok(format!("sent-{}", sent.len()))
    }
}
