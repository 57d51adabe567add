//! Task module containing counter state and run reports.
//!
//! - `task` - The [`Task`] counter, its [`TaskId`] handle and [`TaskSpec`]
//! - `report` - The [`Report`] returned once a simulation completes

pub mod report;
pub mod task;

pub use report::Report;
pub use task::{Task, TaskId, TaskSpec};
