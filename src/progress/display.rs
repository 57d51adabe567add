//! Progress display management and coordination.
//!
//! This module provides the [`ProgressDisplay`] struct that owns every task
//! counter together with the indicatif bar rendering it. Counters are kept
//! in the display and mirrored onto the bars; indicatif takes care of the
//! terminal redraws.
//!
//! # Examples
//!
//! ```rust
//! use lockstep::progress::{ProgressDisplay, StyleOptions};
//! use lockstep::task::TaskSpec;
//!
//! # fn main() -> lockstep::Result<()> {
//! let mut progress = ProgressDisplay::new(StyleOptions::hidden());
//! let download = progress.add_task(TaskSpec::new("[red]Downloading...", 3))?;
//! let process = progress.add_task(TaskSpec::new("[green]Processing...", 3))?;
//!
//! for _ in 0..3 {
//!     progress.advance(download, 1)?;
//!     progress.advance(process, 1)?;
//! }
//! assert!(progress.finished());
//!
//! let tasks = progress.finish();
//! assert_eq!(tasks[0].completed(), 3);
//! # Ok(())
//! # }
//! ```

use crate::progress::{Markup, StyleOptions};
use crate::task::{Task, TaskId, TaskSpec};
use crate::{Error, Result};
use indicatif::{MultiProgress, ProgressBar};
use tracing::{debug, trace};

/// Changes to apply to a task with [`ProgressDisplay::update`].
///
/// Fields left to `None` are not modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// New completed count, clamped to the total.
    pub completed: Option<u64>,
    /// New total.
    pub total: Option<u64>,
    /// New description.
    pub description: Option<String>,
}

impl TaskUpdate {
    /// Set the completed count.
    pub fn completed(mut self, completed: u64) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Set the total.
    pub fn total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A registered task and the bar drawing it.
struct Entry {
    task: Task,
    bar: ProgressBar,
}

/// Progress display manager that coordinates the task bars.
pub struct ProgressDisplay {
    /// The multi-progress instance the task bars are drawn through.
    multi: MultiProgress,
    /// Registered tasks, in registration order.
    entries: Vec<Entry>,
    /// Next id to hand out.
    next_id: usize,
    /// Style options for progress bars.
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display.
    ///
    /// Bars are drawn to stderr at the configured refresh rate, or nowhere
    /// if the style options are disabled.
    pub fn new(style_options: StyleOptions) -> Self {
        let multi = style_options.multi_progress();
        Self::with_multi(style_options, multi)
    }

    /// Create a progress display drawing through an existing multi-progress.
    ///
    /// Share the multi-progress with a [`ProgressMakeWriter`](crate::progress::ProgressMakeWriter)
    /// so log lines are printed above the bars instead of through them.
    pub fn with_multi(style_options: StyleOptions, multi: MultiProgress) -> Self {
        Self {
            multi,
            entries: Vec::new(),
            next_id: 0,
            style_options,
        }
    }

    /// Register a new task and return its id.
    ///
    /// Fails if the bar template configured in the style options is invalid.
    pub fn add_task(&mut self, spec: TaskSpec) -> Result<TaskId> {
        let mut bar = self.style_options.task().to_progress_bar(spec.total)?;
        // Hidden bars stay out of the multi-progress, which would draw them.
        if self.style_options.is_enabled() {
            bar = self.multi.add(bar);
        }
        bar.set_message(Markup::parse(&spec.description).render());

        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        debug!("Registering task {} {:?} with total {}", id, spec.description, spec.total);

        let task = Task::new(id, spec);
        bar.tick();
        self.entries.push(Entry { task, bar });
        Ok(id)
    }

    /// Advance a task by `steps`, saturating at its total.
    pub fn advance(&mut self, id: TaskId, steps: u64) -> Result<()> {
        let entry = self.entry_mut(id)?;
        let applied = entry.task.advance(steps);
        entry.bar.inc(applied);
        trace!("Task {} at {}/{}", id, entry.task.completed(), entry.task.total());
        Ok(())
    }

    /// Apply an update to a task.
    ///
    /// The total is applied before the completed count, so both can be
    /// changed in one call.
    pub fn update(&mut self, id: TaskId, update: TaskUpdate) -> Result<()> {
        let entry = self.entry_mut(id)?;
        if let Some(total) = update.total {
            entry.task.set_total(total);
            entry.bar.set_length(total);
        }
        if let Some(completed) = update.completed {
            entry.task.set_completed(completed);
        }
        if let Some(description) = update.description {
            entry.bar.set_message(Markup::parse(&description).render());
            entry.task.set_description(description);
        }
        entry.bar.set_position(entry.task.completed());
        Ok(())
    }

    /// Set a task back to 0, restarting its elapsed time and eta.
    pub fn reset(&mut self, id: TaskId) -> Result<()> {
        let entry = self.entry_mut(id)?;
        entry.task.reset();
        entry.bar.reset();
        Ok(())
    }

    /// Remove a task from the display and return its last state.
    ///
    /// The id is not reused by later registrations.
    pub fn remove_task(&mut self, id: TaskId) -> Result<Task> {
        let index = self
            .entries
            .iter()
            .position(|e| e.task.id() == id)
            .ok_or(Error::UnknownTask(id))?;
        let entry = self.entries.remove(index);
        entry.bar.finish_and_clear();
        self.multi.remove(&entry.bar);
        debug!("Removed task {}", id);
        Ok(entry.task)
    }

    /// Get a snapshot of a task.
    pub fn task(&self, id: TaskId) -> Result<Task> {
        self.entries
            .iter()
            .find(|e| e.task.id() == id)
            .map(|e| e.task.clone())
            .ok_or(Error::UnknownTask(id))
    }

    /// Get a snapshot of every task, in registration order.
    pub fn tasks(&self) -> Vec<Task> {
        self.entries.iter().map(|e| e.task.clone()).collect()
    }

    /// Return `true` when every registered task reached its total.
    pub fn finished(&self) -> bool {
        self.entries.iter().all(|e| e.task.is_finished())
    }

    /// Print a line above the bars.
    pub fn println(&self, msg: impl AsRef<str>) -> Result<()> {
        self.multi.println(msg)?;
        Ok(())
    }

    /// Finish the progress display, clearing or keeping bars based on
    /// configuration, and return the final task states.
    pub fn finish(self) -> Vec<Task> {
        let clear = self.style_options.task().clear();
        self.entries
            .into_iter()
            .map(|entry| {
                if clear {
                    entry.bar.finish_and_clear();
                } else if entry.task.is_finished() {
                    entry.bar.finish();
                } else {
                    // Leave unfinished bars where they stopped.
                    entry.bar.abandon();
                }
                entry.task
            })
            .collect()
    }

    fn entry_mut(&mut self, id: TaskId) -> Result<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|e| e.task.id() == id)
            .ok_or(Error::UnknownTask(id))
    }
}
