/*
[INPUT]:  Acting user id plus the task's customer and executor ids
[OUTPUT]: Fixed action catalog with ids, display names and authorization rules
[POS]:    Registry layer - leaf module, no dependency on task state
[UPDATE]: When an action kind is added or its authorization rule changes
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// Participant kind an action is gated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Customer,
    Executor,
}

impl Role {
    /// Resolve the role an acting user holds on a task, if any
    pub fn of(acting_user_id: i64, customer_id: i64, executor_id: i64) -> Option<Role> {
        if acting_user_id == customer_id {
            Some(Role::Customer)
        } else if acting_user_id == executor_id {
            Some(Role::Executor)
        } else {
            None
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Customer => f.write_str("customer"),
            Role::Executor => f.write_str("executor"),
        }
    }
}

/// Actions a participant can invoke on a task.
///
/// Each variant is its own canonical value; there is nothing to construct
/// per task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "act_complete")]
    Complete,
    #[serde(rename = "act_reject")]
    Reject,
    #[serde(rename = "act_respond")]
    Respond,
    #[serde(rename = "act_cancel")]
    Cancel,
}

impl Action {
    /// Full action catalog in declaration order
    pub const ALL: [Action; 4] = [
        Action::Complete,
        Action::Reject,
        Action::Respond,
        Action::Cancel,
    ];

    /// Stable machine token
    pub const fn id(&self) -> &'static str {
        match self {
            Action::Complete => "act_complete",
            Action::Reject => "act_reject",
            Action::Respond => "act_respond",
            Action::Cancel => "act_cancel",
        }
    }

    /// Human-readable label shown on buttons
    pub const fn display_name(&self) -> &'static str {
        match self {
            Action::Complete => "Завершить",
            Action::Reject => "Отказаться",
            Action::Respond => "Откликнуться",
            Action::Cancel => "Отменить",
        }
    }

    /// Role the authorization rule admits
    pub const fn role(&self) -> Role {
        match self {
            Action::Complete | Action::Cancel => Role::Customer,
            Action::Reject | Action::Respond => Role::Executor,
        }
    }

    /// Pure authorization predicate
    pub fn is_available(&self, acting_user_id: i64, customer_id: i64, executor_id: i64) -> bool {
        match self.role() {
            Role::Customer => acting_user_id == customer_id,
            Role::Executor => acting_user_id == executor_id,
        }
    }

    /// Look up an action by its id token
    pub fn from_id(id: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|action| action.id() == id)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Action {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::from_id(s).ok_or_else(|| TaskError::UnknownAction(s.to_string()))
    }
}

/// Canonical value for an action kind
pub const fn get(kind: Action) -> Action {
    kind
}

/// Full action catalog
pub fn catalog() -> &'static [Action] {
    &Action::ALL
}
