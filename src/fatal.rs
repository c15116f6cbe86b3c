//! Classification of unrecoverable runtime failures.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Runtime failure categories after which continued execution is unsafe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FatalCondition {
    OutOfMemory,
    RuntimeUnloaded,
    CorruptImage,
    RuntimeUnloadFailed,
    InvalidProgramState,
    ThreadAborted,
    StackOverflow,
}

impl fmt::Display for FatalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OutOfMemory => "out of memory",
            Self::RuntimeUnloaded => "execution context unloaded",
            Self::CorruptImage => "corrupt binary image",
            Self::RuntimeUnloadFailed => "execution context could not be unloaded",
            Self::InvalidProgramState => "invalid program state",
            Self::ThreadAborted => "thread aborted",
            Self::StackOverflow => "stack overflow",
        };
        write!(f, "{}", name)
    }
}

/// Error raised when the runtime surfaces an unrecoverable condition.
#[derive(Debug, Error)]
#[error("fatal runtime condition: {condition}")]
pub struct FatalError {
    pub condition: FatalCondition,
}

impl FatalError {
    pub fn new(condition: FatalCondition) -> Self {
        Self { condition }
    }
}

/// Classify whether an error is an unrecoverable runtime failure.
///
/// Advisory only: performs no action itself. Walks the error's source chain so
/// a wrapped fatal condition is still recognized. Returns false for `None` and
/// for every error kind outside the fatal set.
pub fn is_fatal(error: Option<&(dyn StdError + 'static)>) -> bool {
    let mut current = match error {
        Some(err) => err,
        None => return false,
    };
    loop {
        if current.is::<FatalError>() {
            return true;
        }
        match current.source() {
            Some(source) => current = source,
            None => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug, Error)]
    #[error("account sync failed")]
    struct SyncError {
        #[source]
        cause: FatalError,
    }

    #[test]
    fn test_is_fatal_recognizes_fatal_conditions() {
        let oom = FatalError::new(FatalCondition::OutOfMemory);
        assert!(is_fatal(Some(&oom)));

        let overflow = FatalError::new(FatalCondition::StackOverflow);
        assert!(is_fatal(Some(&overflow)));
    }

    #[test]
    fn test_is_fatal_walks_source_chain() {
        let wrapped = SyncError {
            cause: FatalError::new(FatalCondition::InvalidProgramState),
        };
        assert!(is_fatal(Some(&wrapped)));
    }

    #[test]
    fn test_is_fatal_false_for_ordinary_errors_and_none() {
        let io_err = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset");
        assert!(!is_fatal(Some(&io_err)));
        assert!(!is_fatal(None));
    }

    #[test]
    fn test_fatal_error_display_names_condition() {
        let err = FatalError::new(FatalCondition::OutOfMemory);
        assert_eq!(err.to_string(), "fatal runtime condition: out of memory");
    }
}
