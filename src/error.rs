//! Error type for option resolution and validation

use thiserror::Error;

/// Failure while resolving or validating a transfer option.
///
/// Every failure in this crate surfaces as this one kind; the message is the
/// only discriminator. Callers that need finer detail match on message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct OptionError {
    message: String,
}

impl OptionError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Human-readable description of what was rejected and why.
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T> = std::result::Result<T, OptionError>;
