//! The end-to-end run: execute every task, screenshot its output, then build
//! and save the report.
//!
//! Everything is sequential. The first failure aborts the run before the
//! report is written, so a failed run never replaces a previous report.

use crate::document::{DocumentBuilder, ReportSection};
use crate::executor::ScriptExecutor;
use crate::rendering::render_terminal;
use crate::task::Task;
use crate::{Error, ReportConfig, Result};
use log::info;
use std::path::PathBuf;

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub images: Vec<PathBuf>,
    pub report: PathBuf,
    pub pages: usize,
}

/// Run every task through `executor` and write the report described by `config`.
pub fn run(config: &ReportConfig, tasks: &[Task], executor: &dyn ScriptExecutor) -> Result<RunSummary> {
    if tasks.is_empty() {
        return Err(Error::ConfigError("no tasks to report on".into()));
    }

    let mut captured = Vec::with_capacity(tasks.len());
    let mut images = Vec::with_capacity(tasks.len());
    for (idx, task) in tasks.iter().enumerate() {
        let script = config.script_path(task);
        info!("[{}/{}] {}", idx + 1, tasks.len(), task.name);
        let output = executor.run(&script)?;

        let shot = render_terminal(&output)?;
        let image_path = config.image_path(idx + 1);
        shot.save(&image_path)?;
        info!("  screenshot {}x{} -> {}", shot.width, shot.height, image_path.display());

        images.push(image_path);
        captured.push((output, shot));
    }

    let mut sections = Vec::with_capacity(tasks.len());
    for (task, (output, image)) in tasks.iter().zip(captured) {
        let script = config.script_path(task);
        let source = std::fs::read_to_string(&script).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::MissingSource(script.clone()),
            _ => Error::io(&script, e),
        })?;
        sections.push(ReportSection {
            task: task.clone(),
            source,
            output,
            image,
        });
    }

    let document = DocumentBuilder::new(config.page_format).build(&config.title_page, &sections);
    let report = config.report_path();
    document.save(&report)?;
    info!("report: {} page(s) -> {}", document.page_count(), report.display());

    Ok(RunSummary {
        images,
        report,
        pages: document.page_count(),
    })
}
