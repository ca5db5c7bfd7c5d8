//! Chat UI error types

use thiserror::Error;

/// Errors raised while building chat data from untyped input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatUiError {
    /// Role text was neither `user` nor `agent`
    #[error("Unknown message role: {0:?}")]
    UnknownRole(String),
}

pub type Result<T> = std::result::Result<T, ChatUiError>;
