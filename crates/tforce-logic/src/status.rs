/*
[INPUT]:  Status tokens from callers and stored snapshots
[OUTPUT]: Closed status catalog with tokens and display names
[POS]:    Data layer - type definitions shared by the state machine
[UPDATE]: When the status catalog changes
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// Lifecycle status of a task.
///
/// Transitions:
/// - New -> InProgress (respond) / Cancelled (cancel)
/// - InProgress -> Completed (complete) / Rejected (reject)
/// - Completed, Rejected and Cancelled have no outgoing actions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    New,
    InProgress,
    Completed,
    Rejected,
    Cancelled,
}

impl Status {
    /// Full status catalog in declaration order
    pub const ALL: [Status; 5] = [
        Status::New,
        Status::InProgress,
        Status::Completed,
        Status::Rejected,
        Status::Cancelled,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::New => "new",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::Rejected => "rejected",
            Status::Cancelled => "cancelled",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Status::New => "Новое",
            Status::InProgress => "В работе",
            Status::Completed => "Выполнено",
            Status::Rejected => "Провалено",
            Status::Cancelled => "Отменено",
        }
    }

    /// Returns true when no action is listed for this status.
    pub fn is_terminal(&self) -> bool {
        crate::task::state_machine::actions_in(*self).is_empty()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TaskError::InvalidStatus(s.to_string()))
    }
}
