//! Lockstep drives named progress counters towards their totals, one
//! iteration at a time, and renders them as terminal progress bars through
//! indicatif.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lockstep::{SimulationBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! // "[red]Downloading..." and "[green]Processing...", 1000 steps each.
//! let report = SimulationBuilder::new().build().run().await?;
//! println!("{} iterations", report.iterations());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`progress`] - Progress bar styling, description markup and display management
//! - [`simulation`] - The `Simulation` loop and its `SimulationBuilder`
//! - [`task`] - Task counters and the run `Report`

pub mod error;
pub mod progress;
pub mod simulation;
pub mod task;

pub use error::{Error, Result};
pub use progress::{
    Markup, ProgressBarOpts, ProgressDisplay, ProgressMakeWriter, StyleOptions, TaskUpdate,
};
pub use simulation::{Simulation, SimulationBuilder};
pub use task::{Report, Task, TaskId, TaskSpec};
