use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Turn cancelled")]
    Cancelled,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invoke '{name}' carries no value")]
    MissingValue { name: String },

    #[error("Invalid payload for invoke '{name}': {source}")]
    InvalidPayload {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Activity is not an invoke")]
    NotInvoke,
}

pub type Result<T> = std::result::Result<T, BotError>;
