/*
[INPUT]:  Customer/executor ids, status tokens, acting user ids, actions
[OUTPUT]: Task with validated identity, authorization queries and transitions
[POS]:    Task domain layer - aggregates transition tables and task state
[UPDATE]: When construction rules, queries or transition semantics change
*/

pub mod snapshot;
pub mod state_machine;

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::actions::{Action, Role};
use crate::error::{Result, TaskError};
use crate::status::Status;

pub use snapshot::TaskSnapshot;

/// One work item owned by a customer and assigned to an executor.
///
/// `current_status` only changes through [`Task::apply_action`] and
/// [`Task::perform`]. The type holds no lock: callers applying actions to the
/// same task from several threads must serialize access themselves, e.g. with
/// one mutex per task id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    customer_id: i64,
    executor_id: i64,
    current_status: Status,
}

impl Task {
    /// Create a task in the initial `new` status
    pub fn new(customer_id: i64, executor_id: i64) -> Result<Self> {
        Self::build(Some(customer_id), Some(executor_id), None)
    }

    /// Create a task in an explicit initial status
    pub fn with_status(customer_id: i64, executor_id: i64, status: &str) -> Result<Self> {
        Self::build(Some(customer_id), Some(executor_id), Some(status))
    }

    pub(crate) fn build(
        customer_id: Option<i64>,
        executor_id: Option<i64>,
        status: Option<&str>,
    ) -> Result<Self> {
        let customer_id = require_id("customer_id", customer_id)?;
        let executor_id = require_id("executor_id", executor_id)?;

        if customer_id == executor_id {
            return Err(TaskError::InvalidTaskState(format!(
                "customer and executor are the same user ({customer_id})"
            )));
        }

        let current_status = match status {
            None => Status::New,
            Some(token) => token.parse::<Status>().map_err(|_| {
                TaskError::InvalidTaskState(format!("unknown initial status: {token}"))
            })?,
        };

        debug!(
            customer_id,
            executor_id,
            status = %current_status,
            "task created"
        );

        Ok(Self {
            customer_id,
            executor_id,
            current_status,
        })
    }

    pub fn customer_id(&self) -> i64 {
        self.customer_id
    }

    pub fn executor_id(&self) -> i64 {
        self.executor_id
    }

    pub fn current_status(&self) -> Status {
        self.current_status
    }

    /// Full status catalog, identical for every task
    pub fn all_statuses(&self) -> &'static [Status] {
        &Status::ALL
    }

    /// Full action catalog, identical for every task
    pub fn all_actions(&self) -> &'static [Action] {
        &Action::ALL
    }

    /// Role the acting user holds on this task, if any
    pub fn role_of(&self, acting_user_id: i64) -> Option<Role> {
        Role::of(acting_user_id, self.customer_id, self.executor_id)
    }

    /// Actions listed for `status` that `acting_user_id` may invoke.
    ///
    /// Fails with [`TaskError::InvalidStatus`] for tokens outside the
    /// catalog. A user with no rights gets an empty vector, not an error.
    pub fn actions_by_status(&self, acting_user_id: i64, status: &str) -> Result<Vec<Action>> {
        let status = status.parse::<Status>()?;
        Ok(self.actions_for(acting_user_id, status))
    }

    pub fn actions_for(&self, acting_user_id: i64, status: Status) -> Vec<Action> {
        state_machine::actions_in(status)
            .iter()
            .copied()
            .filter(|action| action.is_available(acting_user_id, self.customer_id, self.executor_id))
            .collect()
    }

    /// Actions the user may invoke right now
    pub fn available_actions(&self, acting_user_id: i64) -> Vec<Action> {
        self.actions_for(acting_user_id, self.current_status)
    }

    /// Status the task would be in after `action`, whatever it is now
    pub fn status_after_action(&self, action: Action) -> Status {
        state_machine::target_status(action)
    }

    pub fn map_status_to_actions(&self) -> &'static BTreeMap<Status, Vec<Action>> {
        state_machine::status_to_actions()
    }

    pub fn map_action_to_status(&self) -> &'static BTreeMap<Action, Status> {
        state_machine::action_to_status()
    }

    /// Move the task to the action's target status.
    ///
    /// No legality check happens here: the caller is expected to have
    /// confirmed the action through [`Task::actions_by_status`]. Use
    /// [`Task::perform`] for the checked variant.
    pub fn apply_action(&mut self, action: Action) {
        let from = self.current_status;
        self.current_status = state_machine::target_status(action);
        debug!(
            customer_id = self.customer_id,
            executor_id = self.executor_id,
            %action,
            %from,
            to = %self.current_status,
            "task transition applied"
        );
    }

    /// Checked transition on behalf of `acting_user_id`.
    ///
    /// Returns the new status. On error the task is left untouched.
    pub fn perform(&mut self, acting_user_id: i64, action: Action) -> Result<Status> {
        if !state_machine::can_transition(self.current_status, action) {
            warn!(
                acting_user_id,
                %action,
                from = %self.current_status,
                "action not available in current status"
            );
            return Err(TaskError::IllegalTransition {
                from: self.current_status,
                action,
            });
        }

        if !action.is_available(acting_user_id, self.customer_id, self.executor_id) {
            warn!(
                acting_user_id,
                %action,
                required_role = %action.role(),
                "user not authorized for action"
            );
            return Err(TaskError::Unauthorized {
                user_id: acting_user_id,
                action,
            });
        }

        self.apply_action(action);
        Ok(self.current_status)
    }

    /// Overwrite the current status without any transition validation.
    ///
    /// Test setup only; never compiled into production builds.
    #[cfg(test)]
    pub fn force_status(&mut self, status: Status) {
        self.current_status = status;
    }
}

fn require_id(field: &str, value: Option<i64>) -> Result<i64> {
    match value {
        None => Err(TaskError::InvalidArgument(format!("{field} is required"))),
        Some(id) if id <= 0 => Err(TaskError::InvalidArgument(format!(
            "{field} must be positive, got {id}"
        ))),
        Some(id) => Ok(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOMER: i64 = 2;
    const EXECUTOR: i64 = 3;

    fn task() -> Task {
        Task::new(CUSTOMER, EXECUTOR).unwrap()
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(task().current_status(), Status::New);
    }

    #[test]
    fn test_rejects_non_positive_ids() {
        assert!(matches!(Task::new(0, 3), Err(TaskError::InvalidArgument(_))));
        assert!(matches!(Task::new(2, -1), Err(TaskError::InvalidArgument(_))));
        assert!(matches!(
            Task::build(Some(2), None, None),
            Err(TaskError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_self_assignment() {
        assert!(matches!(Task::new(2, 2), Err(TaskError::InvalidTaskState(_))));
        assert!(matches!(
            Task::with_status(2, 2, "ssttrraannggeeSsttaattuuss"),
            Err(TaskError::InvalidTaskState(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_initial_status() {
        let result = Task::with_status(CUSTOMER, EXECUTOR, "ssttrraannggeeSsttaattuuss");
        assert!(matches!(result, Err(TaskError::InvalidTaskState(_))));
    }

    #[test]
    fn test_explicit_initial_status() {
        let task = Task::with_status(CUSTOMER, EXECUTOR, "in_progress").unwrap();
        assert_eq!(task.current_status(), Status::InProgress);
    }

    #[test]
    fn test_actions_by_role_in_new() {
        let task = task();
        assert_eq!(task.available_actions(CUSTOMER), vec![Action::Cancel]);
        assert_eq!(task.available_actions(EXECUTOR), vec![Action::Respond]);
        assert!(task.available_actions(-999).is_empty());
    }

    #[test]
    fn test_actions_by_unknown_status() {
        let result = task().actions_by_status(EXECUTOR, "ssttrraannggeeSSttaattuuss");
        assert_eq!(
            result,
            Err(TaskError::InvalidStatus("ssttrraannggeeSSttaattuuss".to_string()))
        );
    }

    #[test]
    fn test_apply_action_is_unchecked() {
        let mut task = task();
        // Complete is not listed for `new`, apply_action still follows the table.
        task.apply_action(Action::Complete);
        assert_eq!(task.current_status(), Status::Completed);
    }

    #[test]
    fn test_perform_full_lifecycle() {
        let mut task = task();
        assert_eq!(task.perform(EXECUTOR, Action::Respond), Ok(Status::InProgress));
        assert_eq!(task.perform(CUSTOMER, Action::Complete), Ok(Status::Completed));
        assert!(task.current_status().is_terminal());
    }

    #[test]
    fn test_perform_illegal_transition() {
        let mut task = task();
        let result = task.perform(CUSTOMER, Action::Complete);
        assert_eq!(
            result,
            Err(TaskError::IllegalTransition {
                from: Status::New,
                action: Action::Complete,
            })
        );
        assert_eq!(task.current_status(), Status::New);
    }

    #[test]
    fn test_perform_unauthorized() {
        let mut task = task();
        let result = task.perform(CUSTOMER, Action::Respond);
        assert_eq!(
            result,
            Err(TaskError::Unauthorized {
                user_id: CUSTOMER,
                action: Action::Respond,
            })
        );
        assert_eq!(task.current_status(), Status::New);
    }

    #[test]
    fn test_force_status() {
        let mut task = task();
        task.force_status(Status::Rejected);
        assert_eq!(task.current_status(), Status::Rejected);
        assert!(task.available_actions(CUSTOMER).is_empty());
    }
}
