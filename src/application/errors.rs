//! Application layer errors

use thiserror::Error;

use crate::domain::entities::{ObjectKind, Verb};

/// Top-level error for one invocation
#[derive(Error, Debug)]
pub enum SparkError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Malformed command lines and missing command inputs
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("help requested")]
    HelpRequested,

    #[error("{0}")]
    Arguments(String),

    #[error("no VERB specified")]
    MissingVerb,

    #[error("\"{input}\" is not an OBJECT, must be one of: message, room, people or membership")]
    UnknownObject { input: String },

    #[error("{verb} is not supported for {object}")]
    Unsupported { verb: Verb, object: ObjectKind },

    #[error("expected at most one data argument, got {0}")]
    TooManyArguments(usize),

    #[error("no {0} specified")]
    MissingId(&'static str),

    #[error("no {0} specified")]
    MissingData(&'static str),

    #[error("no match found for \"{id}\"")]
    Unresolved { id: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no authentication token")]
    MissingToken,

    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Errors surfaced by the Spark API client
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Spark API error: status {status}, body: {body}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl SparkError {
    /// Help is not an error worth a message, only the synopsis
    pub fn is_help(&self) -> bool {
        matches!(self, SparkError::Usage(UsageError::HelpRequested))
    }
}
