/*
[INPUT]:  Test configuration
[OUTPUT]: Shared fixtures for task workflow tests
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for tforce-logic tests

use tforce_logic::Task;

pub const TEST_CUSTOMER_ID: i64 = 2;
pub const TEST_EXECUTOR_ID: i64 = 3;

/// User id that takes no part in any test task
#[allow(dead_code)]
pub const STRANGE_USER_ID: i64 = -999;

#[allow(dead_code)]
pub const STRANGE_STATUS: &str = "ssttrraannggeeSsttaattuuss";

/// Task owned by the test customer and assigned to the test executor
pub fn new_task() -> Task {
    Task::new(TEST_CUSTOMER_ID, TEST_EXECUTOR_ID).expect("test ids are valid")
}
