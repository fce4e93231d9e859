use std::fmt;

use crate::models::{Action, Innings};

#[derive(Debug)]
pub enum MatchError {
    /// Action does not belong to the set valid for the active innings.
    InvalidAction { innings: Innings, action: Action },
    InvalidConfig(String),
    SchemaVersion { expected: u8, found: u8 },
    UnknownSession(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchError::InvalidAction { innings, action } => {
                write!(f, "Invalid action for {} innings: {:?}", innings.name(), action)
            }
            MatchError::InvalidConfig(msg) => {
                write!(f, "Invalid match configuration: {}", msg)
            }
            MatchError::SchemaVersion { expected, found } => {
                write!(f, "Unsupported schema version: expected {}, found {}", expected, found)
            }
            MatchError::UnknownSession(id) => {
                write!(f, "Unknown session: {}", id)
            }
            MatchError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            MatchError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for MatchError {}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        // Syntax, EOF and data errors all come from reading a request;
        // only I/O failures originate on the write path here.
        if err.is_io() {
            MatchError::SerializationError(err.to_string())
        } else {
            MatchError::DeserializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
