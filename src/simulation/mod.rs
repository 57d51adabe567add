//! Simulation module containing the lockstep loop, its builder and configuration.
//!
//! # Overview
//!
//! The simulation module is organized into three main components:
//!
//! - `simulation` - Core Simulation struct running the loop
//! - `builder` - SimulationBuilder for flexible configuration using the builder pattern
//! - `config` - Configuration structure, defaults and callback type
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use lockstep::simulation::SimulationBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Two bars advanced 1000 times, 10ms apart.
//! let report = SimulationBuilder::new().build().run().await?;
//! assert!(report.all_finished());
//! # Ok(())
//! # }
//! ```
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use lockstep::simulation::SimulationBuilder;
//!
//! let simulation = SimulationBuilder::hidden().build();
//! ```

pub mod builder;
pub mod config;
pub mod simulation;

pub use builder::SimulationBuilder;
pub use config::{SimulationConfig, TickCallback};
pub use simulation::Simulation;
