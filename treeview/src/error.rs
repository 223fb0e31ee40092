//! Error types.
//!
//! The tree component itself never fails; these cover the edges where the
//! host hands it text to parse or runs its commands.

use thiserror::Error;

/// Errors that can occur when parsing a key combination such as `"ctrl+n"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    #[error("empty key combination")]
    Empty,

    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),

    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Errors that can occur when running a command on the async runtime.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The background flatten panicked or was cancelled.
    #[error("rebuild task failed: {0}")]
    RebuildTask(#[from] tokio::task::JoinError),
}
