//! Builder pattern implementation for creating Simulation instances.
//!
//! # Examples
//!
//! ```rust
//! use lockstep::simulation::SimulationBuilder;
//! use lockstep::task::TaskSpec;
//! use std::time::Duration;
//!
//! let simulation = SimulationBuilder::new()
//!     .iterations(50)
//!     .delay(Duration::from_millis(2))
//!     .tasks(vec![TaskSpec::new("[cyan]Indexing...", 50)])
//!     .on_tick(|iteration, tasks| {
//!         if iteration == 50 {
//!             assert!(tasks.iter().all(|t| t.is_finished()));
//!         }
//!     })
//!     .build();
//! ```

use super::{config::SimulationConfig, simulation::Simulation};
use crate::task::{Task, TaskSpec};
use crate::StyleOptions;

use indicatif::MultiProgress;
use std::sync::Arc;
use std::time::Duration;

/// A builder used to create a [`Simulation`].
///
/// ```rust
/// # fn main()  {
/// use lockstep::simulation::SimulationBuilder;
///
/// let s = SimulationBuilder::new().iterations(10).step(100).build();
/// # }
/// ```
#[derive(Default)]
pub struct SimulationBuilder {
    config: SimulationConfig,
}

impl SimulationBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        SimulationBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        let mut builder = SimulationBuilder::default();
        builder.config.style_options = StyleOptions::hidden();
        builder
    }

    /// Set the number of loop iterations.
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Set the pause after each iteration.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.config.delay = delay;
        self
    }

    /// Set how many steps every task advances per iteration.
    pub fn step(mut self, step: u64) -> Self {
        self.config.step = step;
        self
    }

    /// Add a task to the ones already configured.
    pub fn task(mut self, task: TaskSpec) -> Self {
        self.config.tasks.push(task);
        self
    }

    /// Replace the configured tasks.
    pub fn tasks(mut self, tasks: Vec<TaskSpec>) -> Self {
        self.config.tasks = tasks;
        self
    }

    /// Set the display style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Set callback invoked after each iteration.
    ///
    /// The callback receives the 1-based iteration number and the task states
    /// once every task has been advanced for that iteration.
    pub fn on_tick<F>(mut self, callback: F) -> Self
    where
        F: Fn(u64, &[Task]) + Send + Sync + 'static,
    {
        self.config.on_tick = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Draw the bars through an existing multi-progress.
    ///
    /// Pass the one given to a [`ProgressMakeWriter`](crate::progress::ProgressMakeWriter)
    /// so log lines and bars share the terminal cleanly.
    pub fn multi_progress(mut self, multi: MultiProgress) -> Self {
        self.config.multi_progress = Some(multi);
        self
    }

    /// Create the [`Simulation`] with the specified options.
    pub fn build(self) -> Simulation {
        Simulation::new(self.config)
    }
}
