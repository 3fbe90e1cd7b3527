use std::fmt;

use soco::SocoError;

use crate::command::{VALID_DISCOVERY_COMMANDS, VALID_SPEAKER_COMMANDS};

/// Errors that can occur while resolving or executing a command
#[derive(Debug)]
pub enum CommandError {
    /// Command name not recognized for the "all" target
    UnknownDiscoveryCommand,
    /// Command name not recognized for a single-speaker target
    UnknownSpeakerCommand,
    /// Volume token does not start with + or -
    InvalidOperator,
    /// Volume token has a non-integer adjustment factor
    InvalidFactor,
    /// Queue index not an integer within 1..=max
    InvalidIndex { max: usize },
    /// Failure surfaced by the speaker-control library
    Soco(SocoError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownDiscoveryCommand => write!(f, "{}", VALID_DISCOVERY_COMMANDS),
            CommandError::UnknownSpeakerCommand => write!(f, "{}", VALID_SPEAKER_COMMANDS),
            CommandError::InvalidOperator => write!(f, "Valid operators for volume are + and -"),
            CommandError::InvalidFactor => {
                write!(f, "Adjustment factor for volume has to be an integer")
            }
            CommandError::InvalidIndex { max } => {
                write!(f, "Index has to be an integer within the range 1 - {}", max)
            }
            CommandError::Soco(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<SocoError> for CommandError {
    fn from(error: SocoError) -> Self {
        CommandError::Soco(error)
    }
}
