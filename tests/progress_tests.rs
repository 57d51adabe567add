//! Tests for the progress module functionality.
//!
//! This file contains tests for progress bar styling, configuration,
//! and display management functionality.

use lockstep::progress::{
    ProgressBarOpts, ProgressDisplay, ProgressMakeWriter, StyleOptions, TaskUpdate,
};
use lockstep::task::{TaskId, TaskSpec};
use lockstep::Error;

mod common;
use common::helpers::*;

#[test]
fn test_style_options_default() {
    let style = StyleOptions::default();
    assert!(style.is_enabled());
    assert!(!style.task().clear());
    assert_eq!(
        style.refresh_per_second(),
        StyleOptions::DEFAULT_REFRESH_PER_SECOND
    );
}

#[test]
fn test_style_options_hidden() {
    let style = StyleOptions::hidden();
    assert!(!style.is_enabled());
}

#[test]
fn test_style_options_transient() {
    let style = StyleOptions::transient();
    assert!(style.is_enabled());
    assert!(style.task().clear());
}

#[test]
fn test_style_options_refresh_rate_is_at_least_one() {
    let style = StyleOptions::new(ProgressBarOpts::default(), 0);
    assert_eq!(style.refresh_per_second(), 1);

    let mut style = StyleOptions::default();
    style.set_refresh_per_second(0);
    assert_eq!(style.refresh_per_second(), 1);
    style.set_refresh_per_second(30);
    assert_eq!(style.refresh_per_second(), 30);
}

#[test]
fn test_progress_bar_opts_default() {
    let opts = ProgressBarOpts::default();
    assert!(opts.enabled());
    let pb = opts.to_progress_bar(100).expect("Default template should parse");
    assert_eq!(pb.length(), Some(100));
}

#[test]
fn test_progress_bar_opts_hidden() {
    let opts = ProgressBarOpts::hidden();
    assert!(!opts.enabled());
    let pb = opts.to_progress_bar(100).expect("Hidden bar should build");
    assert!(pb.is_hidden());
}

#[test]
fn test_progress_bar_opts_templates_parse() {
    for template in [
        ProgressBarOpts::TEMPLATE_DESCRIPTION_BAR,
        ProgressBarOpts::TEMPLATE_BAR_WITH_POSITION,
        ProgressBarOpts::TEMPLATE_SPINNER,
    ] {
        let opts = create_custom_progress_opts(template, ProgressBarOpts::CHARS_FINE);
        assert!(opts.to_progress_style().is_ok(), "{template} should parse");
    }
}

#[test]
fn test_progress_bar_opts_invalid_template() {
    let opts = create_custom_progress_opts("{} {bar:40.blue}", ProgressBarOpts::CHARS_LINE);
    assert!(matches!(
        opts.to_progress_style(),
        Err(Error::Template { .. })
    ));
}

#[test]
fn test_progress_bar_opts_too_few_chars() {
    let opts = create_custom_progress_opts(ProgressBarOpts::TEMPLATE_SPINNER, "#");
    assert!(matches!(opts.to_progress_style(), Err(Error::Internal(_))));
}

#[test]
fn test_progress_display_add_task_assigns_distinct_ids() {
    let (display, download, process) = create_demo_display();
    assert_ne!(download, process);

    let tasks = display.tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].description(), TEST_DOWNLOADING);
    assert_eq!(tasks[1].description(), TEST_PROCESSING);
    assert_all_completed(&tasks, 0);
}

#[test]
fn test_progress_display_add_task_invalid_template() {
    let style = StyleOptions::new(create_custom_progress_opts("{} {msg}", "=> "), 10);
    let mut display = ProgressDisplay::new(style);
    let result = display.add_task(TaskSpec::new("broken", 10));
    assert!(matches!(result, Err(Error::Template { .. })));
    assert!(display.tasks().is_empty());
}

#[test]
fn test_progress_display_advance_in_lockstep() {
    let (mut display, download, process) = create_demo_display();
    for _ in 0..TEST_TOTAL {
        display.advance(download, 1).unwrap();
        display.advance(process, 1).unwrap();
    }
    assert!(display.finished());
    assert_all_completed(&display.tasks(), TEST_TOTAL);
}

#[test]
fn test_progress_display_advance_saturates() {
    let (mut display, download, _) = create_demo_display();
    display.advance(download, TEST_TOTAL * 3).unwrap();
    assert_eq!(display.task(download).unwrap().completed(), TEST_TOTAL);
    assert_within_total(&display.tasks());
}

#[test]
fn test_progress_display_unknown_task() {
    let (mut display, _, _) = create_demo_display();
    let unknown = TaskId::new(42);
    assert!(matches!(
        display.advance(unknown, 1),
        Err(Error::UnknownTask(id)) if id == unknown
    ));
    assert!(display.task(unknown).is_err());
    assert!(display.reset(unknown).is_err());
}

#[test]
fn test_progress_display_update() {
    let (mut display, download, _) = create_demo_display();
    display
        .update(
            download,
            TaskUpdate::default()
                .total(50)
                .completed(80)
                .description("[blue]Fetching..."),
        )
        .unwrap();

    let task = display.task(download).unwrap();
    assert_eq!(task.total(), 50);
    assert_eq!(task.completed(), 50);
    assert_eq!(task.description(), "[blue]Fetching...");
}

#[test]
fn test_progress_display_reset() {
    let (mut display, download, process) = create_demo_display();
    display.advance(download, 10).unwrap();
    display.advance(process, 10).unwrap();
    display.reset(download).unwrap();

    assert_eq!(display.task(download).unwrap().completed(), 0);
    assert_eq!(display.task(process).unwrap().completed(), 10);
}

#[test]
fn test_progress_display_remove_task_does_not_reuse_id() {
    let (mut display, download, process) = create_demo_display();
    display.advance(download, 5).unwrap();

    let removed = display.remove_task(download).unwrap();
    assert_eq!(removed.completed(), 5);
    assert!(display.remove_task(download).is_err());
    assert_eq!(display.tasks().len(), 1);

    let added = display.add_task(TaskSpec::new("again", 1)).unwrap();
    assert_ne!(added, download);
    assert_ne!(added, process);
}

#[test]
fn test_progress_display_finished_without_tasks() {
    let display = ProgressDisplay::new(create_hidden_style_options());
    assert!(display.finished());
    assert!(display.finish().is_empty());
}

#[test]
fn test_progress_display_finish_returns_final_state() {
    let (mut display, download, _) = create_demo_display();
    display.advance(download, 400).unwrap();
    display.println("halfway").unwrap();

    let tasks = display.finish();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].completed(), 400);
    assert_eq!(tasks[1].completed(), 0);
}

#[test]
fn test_progress_display_with_shared_multi_and_log_writer() {
    use std::io::Write;
    use tracing_subscriber::fmt::writer::MakeWriter;

    let multi = indicatif::MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden());
    let make_writer = ProgressMakeWriter::new(multi.clone());
    let mut display = ProgressDisplay::with_multi(StyleOptions::default(), multi);
    let download = display.add_task(TaskSpec::new(TEST_DOWNLOADING, 10)).unwrap();

    let mut writer = make_writer.make_writer();
    let line = b"DEBUG lockstep: halfway\n";
    assert_eq!(writer.write(line).unwrap(), line.len());

    display.advance(download, 10).unwrap();
    assert!(display.finished());
}

#[test]
fn test_progress_display_hidden_style_on_visible_multi() {
    let multi = StyleOptions::default().multi_progress();
    let mut display = ProgressDisplay::with_multi(create_hidden_style_options(), multi);
    let download = display.add_task(TaskSpec::new(TEST_DOWNLOADING, 3)).unwrap();
    display.advance(download, 3).unwrap();
    assert_all_completed(&display.finish(), 3);
}
