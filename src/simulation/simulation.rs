//! Core simulation loop.
//!
//! This module contains the [`Simulation`] struct which registers the
//! configured tasks with a [`ProgressDisplay`] and advances all of them in
//! lockstep, one iteration at a time, pausing between iterations.
//!
//! # Examples
//!
//! ```rust
//! use lockstep::simulation::SimulationBuilder;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> lockstep::Result<()> {
//! let report = SimulationBuilder::hidden()
//!     .iterations(1000)
//!     .delay(Duration::ZERO)
//!     .build()
//!     .run()
//!     .await?;
//!
//! assert_eq!(report.iterations(), 1000);
//! assert!(report.tasks().iter().all(|t| t.completed() == 1000));
//! # Ok(())
//! # }
//! ```

use super::config::SimulationConfig;
use crate::progress::ProgressDisplay;
use crate::task::{Report, TaskId, TaskSpec};
use crate::Result;

use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Represents the simulation controller.
///
/// A simulation can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use lockstep::simulation::SimulationBuilder;
///
/// let s = SimulationBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Simulation {
    config: SimulationConfig,
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .finish()
    }
}

impl Simulation {
    /// Creates a new Simulation with the given configuration.
    pub(crate) fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Gets the number of iterations.
    pub fn iterations(&self) -> u64 {
        self.config.iterations
    }

    /// Gets the pause after each iteration.
    pub fn delay(&self) -> Duration {
        self.config.delay
    }

    /// Gets the steps each task advances per iteration.
    pub fn step(&self) -> u64 {
        self.config.step
    }

    /// Gets the configured tasks.
    pub fn tasks(&self) -> &[TaskSpec] {
        &self.config.tasks
    }

    /// Runs the simulation and returns the final state of every task.
    ///
    /// Each iteration advances every task by the configured step, invokes
    /// the tick callback, then sleeps for the configured delay. The display
    /// is finished once the loop completes.
    pub async fn run(&self) -> Result<Report> {
        // Prepare the progress display.
        let style_options = self.config.style_options.clone();
        let mut progress = match &self.config.multi_progress {
            Some(multi) => ProgressDisplay::with_multi(style_options, multi.clone()),
            None => ProgressDisplay::new(style_options),
        };
        let ids = self
            .config
            .tasks
            .iter()
            .cloned()
            .map(|spec| progress.add_task(spec))
            .collect::<Result<Vec<TaskId>>>()?;

        debug!(
            "Starting {} iterations over {} tasks, {:?} apart",
            self.config.iterations,
            ids.len(),
            self.config.delay
        );
        let started = Instant::now();

        for iteration in 1..=self.config.iterations {
            for id in &ids {
                progress.advance(*id, self.config.step)?;
            }

            if let Some(ref callback) = self.config.on_tick {
                callback(iteration, &progress.tasks());
            }
            trace!("Iteration {} done", iteration);

            if !self.config.delay.is_zero() {
                tokio::time::sleep(self.config.delay).await;
            }
        }

        // Finish the progress display.
        let tasks = progress.finish();
        debug!(
            "Finished {} iterations in {:?}",
            self.config.iterations,
            started.elapsed()
        );

        Ok(Report::new(self.config.iterations, tasks))
    }
}
