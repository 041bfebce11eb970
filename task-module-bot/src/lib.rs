//! # Task module bot
//!
//! Console host for the task module handler: loads config from env, reads inbound activities as
//! JSON lines, runs them through the handler chain, and writes outbound activities as JSON lines.

pub mod cli;
pub mod config;
pub mod console;
pub mod handlers;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::HostConfig;
pub use console::{open_input, run_console, stamp_inbound, ConsoleBot};
pub use handlers::LoggingHandler;
pub use runner::{build_handler_chain, run_bot};
