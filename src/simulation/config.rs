//! Configuration structures and defaults for the simulation.
//!
//! This module provides the configuration used by the [`Simulation`] and
//! [`SimulationBuilder`]. The defaults reproduce the classic two-bar demo:
//! a red "Downloading..." task and a green "Processing..." task, both with a
//! total of 1000, advanced once per iteration for 1000 iterations with a
//! 10 millisecond pause.
//!
//! [`Simulation`]: super::Simulation
//! [`SimulationBuilder`]: super::SimulationBuilder
//!
//! # Examples
//!
//! ## Using a Tick Callback
//!
//! ```rust
//! use lockstep::simulation::TickCallback;
//! use lockstep::task::Task;
//!
//! let callback: TickCallback = Box::new(|iteration: u64, tasks: &[Task]| {
//!     if iteration % 100 == 0 {
//!         println!("{iteration}: {:?}", tasks.iter().map(Task::completed).collect::<Vec<_>>());
//!     }
//! });
//! ```

use crate::task::{Task, TaskSpec};
use crate::StyleOptions;

use indicatif::MultiProgress;
use std::sync::Arc;
use std::time::Duration;

/// Callback type invoked after every iteration with the 1-based iteration
/// number and the current task states.
pub type TickCallback = Box<dyn Fn(u64, &[Task]) + Send + Sync>;

/// Configuration structure for the simulation
#[derive(Clone)]
pub struct SimulationConfig {
    /// Number of loop iterations.
    pub iterations: u64,
    /// Pause after each iteration.
    pub delay: Duration,
    /// Steps every task advances per iteration.
    pub step: u64,
    /// Tasks to register, in display order.
    pub tasks: Vec<TaskSpec>,
    /// Display style options.
    pub style_options: StyleOptions,
    /// Callback for each completed iteration.
    pub on_tick: Option<Arc<TickCallback>>,
    /// Multi-progress to draw through, shared with a log writer.
    ///
    /// When `None`, one is created from the style options.
    pub multi_progress: Option<MultiProgress>,
}

impl SimulationConfig {
    /// Default number of iterations.
    pub const DEFAULT_ITERATIONS: u64 = 1000;
    /// Default task total.
    pub const DEFAULT_TOTAL: u64 = 1000;
    /// Default pause between iterations.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(10);

    /// The two tasks of the default simulation.
    pub fn default_tasks() -> Vec<TaskSpec> {
        vec![
            TaskSpec::new("[red]Downloading...", Self::DEFAULT_TOTAL),
            TaskSpec::new("[green]Processing...", Self::DEFAULT_TOTAL),
        ]
    }
}

impl std::fmt::Debug for SimulationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationConfig")
            .field("iterations", &self.iterations)
            .field("delay", &self.delay)
            .field("step", &self.step)
            .field("tasks", &self.tasks)
            .field("style_options", &self.style_options)
            .field("on_tick", &self.on_tick.is_some())
            .field("multi_progress", &self.multi_progress.is_some())
            .finish()
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
            delay: Self::DEFAULT_DELAY,
            step: 1,
            tasks: Self::default_tasks(),
            style_options: StyleOptions::default(),
            on_tick: None,
            multi_progress: None,
        }
    }
}
