//! Progress module containing progress bar functionality.
//!
//! This module provides progress bar styling, description markup and display
//! management. Rendering itself is left to indicatif.
//!
//! # Overview
//!
//! The progress module is organized into four components:
//!
//! - `style` - Progress bar styling options and templates
//! - `markup` - Style tags such as `[red]` in task descriptions
//! - `display` - The [`ProgressDisplay`] owning the task counters and their bars
//! - `log` - A tracing writer printing log lines above the bars
//!
//! # Examples
//!
//! ## Transient Bars
//!
//! ```rust
//! use lockstep::progress::{ProgressDisplay, StyleOptions};
//!
//! // Bars are cleared from the terminal once the display finishes.
//! let progress = ProgressDisplay::new(StyleOptions::transient());
//! progress.finish();
//! ```

pub(crate) mod display;
pub(crate) mod log;
pub(crate) mod markup;
pub(crate) mod style;

pub use display::{ProgressDisplay, TaskUpdate};
pub use log::{ProgressMakeWriter, ProgressWriter};
pub use markup::Markup;
pub use style::{ProgressBarOpts, StyleOptions};
