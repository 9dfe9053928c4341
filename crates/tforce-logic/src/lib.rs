/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task workflow crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Task assignment workflow: the status/action state machine behind a
//! customer/executor task.

pub mod actions;
pub mod error;
pub mod status;
pub mod task;

pub use actions::{Action, Role};
pub use error::{Result, TaskError};
pub use status::Status;
pub use task::{Task, TaskSnapshot};
