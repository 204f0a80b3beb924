//! Error types for tagconv

use crate::domain::{Feature, Pos};
use std::fmt;
use thiserror::Error;

/// The step of a conversion run in which an error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Read,
    Convert,
    Write,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Read => "reading",
            Phase::Convert => "converting",
            Phase::Write => "writing",
        };
        f.write_str(label)
    }
}

/// Main error type for tagconv
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Malformed or unknown input: bad tag, wrong field count, unknown value
    #[error("{0}")]
    Read(String),

    /// The output cannot be written in the destination charset
    #[error("{0}")]
    Write(String),

    /// A feature the destination tag requires is not set on the token
    #[error("{pos} requires {feature}, but the token has none")]
    MissingFeature { pos: Pos, feature: Feature },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    pub fn read(message: impl Into<String>) -> Self {
        ConvertError::Read(message.into())
    }

    pub fn write(message: impl Into<String>) -> Self {
        ConvertError::Write(message.into())
    }

    /// The phase this error is reported under, if it is a domain error
    pub fn phase(&self) -> Option<Phase> {
        match self {
            ConvertError::Read(_) => Some(Phase::Read),
            ConvertError::MissingFeature { .. } => Some(Phase::Convert),
            ConvertError::Write(_) => Some(Phase::Write),
            _ => None,
        }
    }

    /// Whether this error points at a bug or an environment failure rather
    /// than at the input data
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ConvertError::MissingFeature { .. } | ConvertError::Io(_)
        )
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_internal() {
            3
        } else {
            1
        }
    }

    /// One-line diagnostic naming the failing phase
    pub fn diagnostic(&self) -> String {
        match self.phase() {
            Some(phase) => format!("Error while {}: {}", phase, self),
            None => format!("Error: {}", self),
        }
    }
}

/// Result type using ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;
