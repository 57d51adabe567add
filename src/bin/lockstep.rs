//! Run the two-bar lockstep demo and print a completion table.

use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use console::Term;
use lockstep::progress::{Markup, ProgressMakeWriter, StyleOptions};
use lockstep::SimulationBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs and bars share stderr through the same multi-progress.
    let style_options = StyleOptions::default();
    let multi = style_options.multi_progress();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(ProgressMakeWriter::new(multi.clone()))
        .init();

    let term = Term::stdout();

    let report = SimulationBuilder::new()
        .style_options(style_options)
        .multi_progress(multi)
        .build()
        .run()
        .await?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Task", "Completed", "Total", "%"]);
    for task in report.tasks() {
        table.add_row(vec![
            Cell::new(Markup::parse(task.description()).plain()),
            Cell::new(task.completed()),
            Cell::new(task.total()),
            Cell::new(format!("{:.0}", task.percentage())),
        ]);
    }

    term.write_line(&table.to_string())?;
    term.write_line(&format!("{} iterations", report.iterations()))?;

    Ok(())
}
