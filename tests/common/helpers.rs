#![allow(dead_code)]

use lockstep::progress::{ProgressBarOpts, ProgressDisplay, StyleOptions};
use lockstep::task::{Task, TaskId, TaskSpec};
use lockstep::SimulationBuilder;
use std::time::Duration;

// Common test constants
pub const TEST_TOTAL: u64 = 1000;
pub const TEST_DOWNLOADING: &str = "[red]Downloading...";
pub const TEST_PROCESSING: &str = "[green]Processing...";

// === Style Helpers ===

/// Creates style options with every bar hidden
pub fn create_hidden_style_options() -> StyleOptions {
    StyleOptions::hidden()
}

/// Creates progress bar options with a custom template and characters
pub fn create_custom_progress_opts(template: &str, chars: &str) -> ProgressBarOpts {
    ProgressBarOpts::new(Some(template.to_string()), Some(chars.to_string()), true, false)
}

// === Display Helpers ===

/// Creates a hidden display with the two demo tasks registered
pub fn create_demo_display() -> (ProgressDisplay, TaskId, TaskId) {
    let mut display = ProgressDisplay::new(create_hidden_style_options());
    let download = display
        .add_task(TaskSpec::new(TEST_DOWNLOADING, TEST_TOTAL))
        .expect("Failed to add download task");
    let process = display
        .add_task(TaskSpec::new(TEST_PROCESSING, TEST_TOTAL))
        .expect("Failed to add process task");
    (display, download, process)
}

/// Creates a standalone task
pub fn create_test_task(total: u64) -> Task {
    Task::new(TaskId::new(0), TaskSpec::new(TEST_DOWNLOADING, total))
}

// === Simulation Helpers ===

/// Creates a hidden simulation builder without delay
pub fn create_fast_simulation_builder() -> SimulationBuilder {
    SimulationBuilder::hidden().delay(Duration::ZERO)
}

// === Assertions ===

/// Asserts that every task in the slice completed exactly `expected` steps
pub fn assert_all_completed(tasks: &[Task], expected: u64) {
    for task in tasks {
        assert_eq!(
            task.completed(),
            expected,
            "Task {} completed count mismatch",
            task.id()
        );
    }
}

/// Asserts the counter invariant on every task
pub fn assert_within_total(tasks: &[Task]) {
    for task in tasks {
        assert!(
            task.completed() <= task.total(),
            "Task {} exceeded its total: {}/{}",
            task.id(),
            task.completed(),
            task.total()
        );
    }
}
