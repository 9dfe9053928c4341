/*
[INPUT]:  Status and Action catalogs
[OUTPUT]: Static status->actions and action->status transition tables
[POS]:    Task domain logic - transition tables for lifecycle management
[UPDATE]: When the status/action mapping changes
*/

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::actions::Action;
use crate::status::Status;

static STATUS_TO_ACTIONS: LazyLock<BTreeMap<Status, Vec<Action>>> = LazyLock::new(|| {
    Status::ALL
        .into_iter()
        .map(|status| (status, actions_in(status).to_vec()))
        .collect()
});

static ACTION_TO_STATUS: LazyLock<BTreeMap<Action, Status>> = LazyLock::new(|| {
    Action::ALL
        .into_iter()
        .map(|action| (action, target_status(action)))
        .collect()
});

/// Actions listed for a status, regardless of who asks
pub const fn actions_in(status: Status) -> &'static [Action] {
    match status {
        Status::New => &[Action::Respond, Action::Cancel],
        Status::InProgress => &[Action::Complete, Action::Reject],
        Status::Completed | Status::Rejected | Status::Cancelled => &[],
    }
}

/// Status a task moves into once the action succeeds
pub const fn target_status(action: Action) -> Status {
    match action {
        Action::Complete => Status::Completed,
        Action::Reject => Status::Rejected,
        Action::Respond => Status::InProgress,
        Action::Cancel => Status::Cancelled,
    }
}

/// Check if an action is listed for the given status
pub fn can_transition(from: Status, action: Action) -> bool {
    actions_in(from).contains(&action)
}

/// Read-only status -> actions table
pub fn status_to_actions() -> &'static BTreeMap<Status, Vec<Action>> {
    &STATUS_TO_ACTIONS
}

/// Read-only action -> status table
pub fn action_to_status() -> &'static BTreeMap<Action, Status> {
    &ACTION_TO_STATUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert!(can_transition(Status::New, Action::Respond));
        assert!(can_transition(Status::New, Action::Cancel));
        assert!(can_transition(Status::InProgress, Action::Complete));
        assert!(can_transition(Status::InProgress, Action::Reject));
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!can_transition(Status::New, Action::Complete));
        assert!(!can_transition(Status::InProgress, Action::Cancel));
        for terminal in [Status::Completed, Status::Rejected, Status::Cancelled] {
            for action in Action::ALL {
                assert!(!can_transition(terminal, action));
            }
        }
    }

    #[test]
    fn test_tables_cover_catalogs() {
        let statuses: Vec<Status> = status_to_actions().keys().copied().collect();
        let mut expected = Status::ALL.to_vec();
        expected.sort();
        assert_eq!(statuses, expected);

        let actions: Vec<Action> = action_to_status().keys().copied().collect();
        let mut expected = Action::ALL.to_vec();
        expected.sort();
        assert_eq!(actions, expected);
    }

    #[test]
    fn test_every_listed_action_leaves_its_status() {
        for (status, actions) in status_to_actions() {
            for action in actions {
                assert_ne!(action_to_status()[action], *status);
            }
        }
    }
}
