/*
[INPUT]:  Stored task records (any serde format)
[OUTPUT]: Validated Task instances and their storable form
[POS]:    Boundary layer - load/save shape used by persistence collaborators
[UPDATE]: When the stored task fields change
*/

use serde::{Deserialize, Serialize};

use super::Task;
use crate::error::TaskError;

/// Storable form of a task.
///
/// Every field is optional so that an incomplete record reaches the
/// construction checks instead of failing inside the deserializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub executor_id: Option<i64>,
    /// Status token; `new` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TryFrom<TaskSnapshot> for Task {
    type Error = TaskError;

    fn try_from(snapshot: TaskSnapshot) -> Result<Self, Self::Error> {
        Task::build(
            snapshot.customer_id,
            snapshot.executor_id,
            snapshot.status.as_deref(),
        )
    }
}

impl Task {
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot {
            customer_id: Some(self.customer_id),
            executor_id: Some(self.executor_id),
            status: Some(self.current_status.as_str().to_string()),
        }
    }
}
