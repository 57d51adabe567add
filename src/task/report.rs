//! Simulation report.
//!
//! A [`Report`] is the final state of a run: how many iterations the loop
//! executed and the last snapshot of every task.

use super::task::{Task, TaskId};

/// Represents the outcome of a [`Simulation`](crate::simulation::Simulation) run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Number of loop iterations executed.
    iterations: u64,
    /// Final task states, in registration order.
    tasks: Vec<Task>,
}

impl Report {
    /// Create a new [`Report`].
    pub fn new(iterations: u64, tasks: Vec<Task>) -> Self {
        Self { iterations, tasks }
    }

    /// Get the number of iterations executed.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Get a reference to the final task states.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Find a task by id.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Return `true` if every task reached its total.
    pub fn all_finished(&self) -> bool {
        self.tasks.iter().all(Task::is_finished)
    }
}
