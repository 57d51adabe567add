//! Task counters.
//!
//! A [`Task`] is one named counter advancing towards a fixed total. The
//! completed count never exceeds the total: advancing past it saturates.
//!
//! # Examples
//!
//! ```rust
//! use lockstep::task::{Task, TaskId, TaskSpec};
//!
//! let mut task = Task::new(TaskId::new(0), TaskSpec::new("[red]Downloading...", 10));
//! task.advance(4);
//! assert_eq!(task.completed(), 4);
//! assert_eq!(task.remaining(), 6);
//!
//! task.advance(100);
//! assert_eq!(task.completed(), 10);
//! assert!(task.is_finished());
//! ```

use std::fmt;

/// Handle to a task registered with a [`ProgressDisplay`](crate::progress::ProgressDisplay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(usize);

impl TaskId {
    /// Create a new [`TaskId`].
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw id.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Description of a task to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    /// Task description, possibly with style markup such as `[red]`.
    pub description: String,
    /// Target count.
    pub total: u64,
}

impl TaskSpec {
    /// Create a new [`TaskSpec`].
    pub fn new(description: impl Into<String>, total: u64) -> Self {
        Self {
            description: description.into(),
            total,
        }
    }
}

/// Live state of a counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    description: String,
    total: u64,
    completed: u64,
}

impl Task {
    /// Create a new [`Task`] from its spec, with nothing completed.
    pub fn new(id: TaskId, spec: TaskSpec) -> Self {
        Self {
            id,
            description: spec.description,
            total: spec.total,
            completed: 0,
        }
    }

    /// Get the task id.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Get the task description, markup included.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the target count.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Get the completed count.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Number of steps left before the task is finished.
    pub fn remaining(&self) -> u64 {
        self.total - self.completed
    }

    /// Return `true` once the completed count reached the total.
    pub fn is_finished(&self) -> bool {
        self.completed >= self.total
    }

    /// Completion percentage, between 0 and 100.
    ///
    /// A task with a total of 0 is reported as complete.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    /// Advance the task by `steps`, saturating at the total.
    ///
    /// Returns the number of steps actually applied.
    pub fn advance(&mut self, steps: u64) -> u64 {
        let applied = steps.min(self.remaining());
        self.completed += applied;
        applied
    }

    /// Set the completed count, clamped to the total.
    pub fn set_completed(&mut self, completed: u64) {
        self.completed = completed.min(self.total);
    }

    /// Change the target count.
    ///
    /// The completed count is clamped if it would exceed the new total.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
        self.completed = self.completed.min(total);
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Set the completed count back to 0.
    pub fn reset(&mut self) {
        self.completed = 0;
    }
}
