//! Progress bar styling and configuration options.
//!
//! This module provides styling and configuration options for the bars that
//! render each task. Bar templates are indicatif templates; the default one
//! shows the task description, the bar, the percentage and the remaining time.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use lockstep::progress::StyleOptions;
//!
//! // Bars stay on the screen upon completion, redrawn 10 times per second.
//! let style_options = StyleOptions::default();
//! assert!(style_options.is_enabled());
//! ```
//!
//! ## Custom Styling
//!
//! ```rust
//! use lockstep::progress::{ProgressBarOpts, StyleOptions};
//!
//! let style_options = StyleOptions::new(
//!     ProgressBarOpts::new(
//!         Some("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len}".to_string()),
//!         Some(ProgressBarOpts::CHARS_FADE_IN.to_string()),
//!         true,
//!         false,
//!     ),
//!     20,
//! );
//! ```
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use lockstep::progress::StyleOptions;
//!
//! let hidden_style = StyleOptions::hidden();
//! assert!(!hidden_style.is_enabled());
//! ```

use crate::{Error, Result};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Define the display style options.
///
/// By default, the task bars stay on the screen upon completion.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Style options for the task bars.
    pub(crate) task: ProgressBarOpts,
    /// How many times per second the bars are redrawn.
    pub(crate) refresh_per_second: u8,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            task: ProgressBarOpts::default(),
            refresh_per_second: StyleOptions::DEFAULT_REFRESH_PER_SECOND,
        }
    }
}

impl StyleOptions {
    /// Default redraw rate.
    pub const DEFAULT_REFRESH_PER_SECOND: u8 = 10;

    /// Create new [`StyleOptions`].
    ///
    /// A refresh rate of 0 is raised to 1.
    pub fn new(task: ProgressBarOpts, refresh_per_second: u8) -> Self {
        Self {
            task,
            refresh_per_second: refresh_per_second.max(1),
        }
    }

    /// Create [`StyleOptions`] which hide every bar.
    pub fn hidden() -> Self {
        Self {
            task: ProgressBarOpts::hidden(),
            ..StyleOptions::default()
        }
    }

    /// Create [`StyleOptions`] whose bars are cleared once the display finishes.
    pub fn transient() -> Self {
        let mut task = ProgressBarOpts::default();
        task.set_clear(true);
        Self {
            task,
            ..StyleOptions::default()
        }
    }

    /// Set the options for the task bars.
    pub fn set_task(&mut self, task: ProgressBarOpts) {
        self.task = task;
    }

    /// Set the redraw rate. A rate of 0 is raised to 1.
    pub fn set_refresh_per_second(&mut self, refresh_per_second: u8) {
        self.refresh_per_second = refresh_per_second.max(1);
    }

    /// Return `false` if the task bars are disabled.
    pub fn is_enabled(&self) -> bool {
        self.task.enabled
    }

    /// Get a reference to the task bar options.
    pub fn task(&self) -> &ProgressBarOpts {
        &self.task
    }

    /// Get the redraw rate.
    pub fn refresh_per_second(&self) -> u8 {
        self.refresh_per_second
    }

    /// Create the [`MultiProgress`] the task bars are drawn through.
    ///
    /// Bars go to stderr at the configured refresh rate, or nowhere if the
    /// style options are disabled.
    pub fn multi_progress(&self) -> MultiProgress {
        let target = match self.is_enabled() {
            true => ProgressDrawTarget::stderr_with_hz(self.refresh_per_second),
            false => ProgressDrawTarget::hidden(),
        };
        MultiProgress::with_draw_target(target)
    }
}

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 2 characters, for the "filled" and "to do" states,
    /// with optional "current" states in between.
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_DESCRIPTION_BAR.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_LINE.into()),
            enabled: true,
            clear: false,
        }
    }
}

impl ProgressBarOpts {
    /// Template showing the description, the bar, the percentage and the eta.
    ///
    /// `Downloading... ━━━━━━━━━━━━━━━━━━━━╸━━━━━━━━━━━━━━━━━━━  51% 0:00:05`
    pub const TEMPLATE_DESCRIPTION_BAR: &'static str =
        "{msg} {bar:40.magenta/black} {percent:>3}% {eta_precise:.cyan}";
    /// Template representing the bar and its position.
    ///
    /// `███████████████████████████████████████ 11/12 (99%) eta 00:00:02`
    pub const TEMPLATE_BAR_WITH_POSITION: &'static str =
        "{msg} {bar:40.blue} {pos:>}/{len} ({percent}%) eta {eta_precise:.blue}";
    /// Template with a spinner and the elapsed time, for tasks without a meaningful eta.
    pub const TEMPLATE_SPINNER: &'static str =
        "{spinner:.green} {msg} {bar:40.green/black} {pos}/{len} [{elapsed_precise}]";
    /// Use increasing quarter blocks as progress characters: `"█▛▌▖  "`.
    pub const CHARS_BLOCKY: &'static str = "█▛▌▖  ";
    /// Use fade-in blocks as progress characters: `"█▓▒░  "`.
    pub const CHARS_FADE_IN: &'static str = "█▓▒░  ";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╸━"`.
    pub const CHARS_LINE: &'static str = "━╸━";
    /// Use rough blocks as progress characters: `"█  "`.
    pub const CHARS_ROUGH: &'static str = "█  ";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    ///
    /// Fails if the template is not a valid indicatif template.
    pub fn to_progress_style(&self) -> Result<ProgressStyle> {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = &self.template {
            style = style.template(template)?;
        }
        if let Some(progress_chars) = &self.progress_chars {
            if progress_chars.chars().count() < 2 {
                return Err(Error::Internal(format!(
                    "progress characters {progress_chars:?} need at least 2 states"
                )));
            }
            style = style.progress_chars(progress_chars);
        }
        Ok(style)
    }

    /// Create a [`ProgressBar`] based on the provided options.
    pub fn to_progress_bar(&self, len: u64) -> Result<ProgressBar> {
        // Return a hidden Progress bar if we disabled it.
        if !self.enabled {
            return Ok(ProgressBar::hidden());
        }

        // Otherwise returns a ProgressBar with the style.
        let style = self.to_progress_style()?;
        Ok(ProgressBar::new(len).with_style(style))
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Return `true` if the bar is cleared upon completion.
    pub fn clear(&self) -> bool {
        self.clear
    }

    /// Return `true` if the bar is drawn.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bars.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }
}
