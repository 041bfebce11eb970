//! # bot-core
//!
//! Core types and traits for the task-module bot: the activity schema, [`Bot`], [`TurnContext`],
//! [`Handler`], errors, and tracing initialization. Transport-agnostic; used by handler-chain,
//! task-module, and the console host.

pub mod activity;
pub mod bot;
pub mod error;
pub mod logger;
pub mod turn;
pub mod types;

pub use activity::{
    Activity, ActivityType, Attachment, ChannelAccount, ConversationAccount, InvokeActivity,
    InvokeResponse, ADAPTIVE_CARD_CONTENT_TYPE,
};
pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use turn::TurnContext;
pub use types::{Handler, HandlerResponse};

pub use tokio_util::sync::CancellationToken;
