/*
[INPUT]:  Construction inputs, status tokens, action ids, transition requests
[OUTPUT]: Structured error type shared by the whole crate
[POS]:    Error handling layer - unified error types for task logic
[UPDATE]: When adding new failure modes to construction or transitions
*/

use thiserror::Error;

use crate::actions::Action;
use crate::status::Status;

/// Main error type for task workflow operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Missing or malformed identity input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Semantically invalid task configuration
    #[error("Invalid task state: {0}")]
    InvalidTaskState(String),

    /// Status token outside the fixed catalog
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Action id outside the fixed catalog
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Action is not listed for the task's current status
    #[error("Illegal transition: {action} is not available in status {from}")]
    IllegalTransition { from: Status, action: Action },

    /// Acting user fails the action's authorization rule
    #[error("User {user_id} is not allowed to perform {action}")]
    Unauthorized { user_id: i64, action: Action },
}

impl TaskError {
    /// Check if the error was raised while building a task
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            TaskError::InvalidArgument(_) | TaskError::InvalidTaskState(_)
        )
    }

    /// Check if the error was raised by a rejected transition
    pub fn is_transition_error(&self) -> bool {
        matches!(
            self,
            TaskError::IllegalTransition { .. } | TaskError::Unauthorized { .. }
        )
    }
}

/// Result type alias for task workflow operations
pub type Result<T> = std::result::Result<T, TaskError>;
