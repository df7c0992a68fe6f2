//! Task Report
//!
//! Runs a list of PHP exercise programs, captures what they print, renders
//! each capture as a faux-terminal screenshot and assembles everything into a
//! single PDF report.
//!
//! # Pipeline
//!
//! - **Executor** ([`executor`]): runs each script through an interpreter and
//!   captures stdout; a non-zero exit aborts the run
//! - **Image renderer** ([`rendering`]): layout, paint and raster stages
//!   producing a PNG per task
//! - **Document builder** ([`document`]): lays out a title page and one page
//!   per task, then writes the PDF
//!
//! # Example
//!
//! ```no_run
//! use taskreport::{executor::InterpreterExecutor, task::builtin_tasks, ReportConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReportConfig {
//!     root: "/srv/php-course".into(),
//!     ..Default::default()
//! };
//! let summary = taskreport::pipeline::run(&config, &builtin_tasks(), &InterpreterExecutor::default())?;
//! println!("{} pages written to {}", summary.pages, summary.report.display());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod document;
pub mod executor;
pub mod pipeline;
pub mod rendering;
pub mod task;

use document::{PageFormat, TitlePage};
use task::Task;

/// Where inputs live and outputs go, plus fixed document content.
///
/// Relative directories are resolved against `root`. The defaults match the
/// course repository layout:
/// - scripts in `web/php/`
/// - screenshots in `output/images/`
/// - the report at `web/public/task-report.pdf`
///
/// # Examples
///
/// ```
/// let cfg = taskreport::ReportConfig::default();
/// assert_eq!(cfg.interpreter, "php");
/// assert!(cfg.report_path().ends_with("web/public/task-report.pdf"));
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Repository root
    pub root: PathBuf,
    /// Interpreter binary, looked up on `PATH`
    pub interpreter: String,
    pub scripts_dir: PathBuf,
    pub images_dir: PathBuf,
    pub report: PathBuf,
    pub page_format: PageFormat,
    pub title_page: TitlePage,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            interpreter: "php".to_string(),
            scripts_dir: PathBuf::from("web/php"),
            images_dir: PathBuf::from("output/images"),
            report: PathBuf::from("web/public/task-report.pdf"),
            page_format: PageFormat::default(),
            title_page: TitlePage::default(),
        }
    }
}

impl ReportConfig {
    pub fn script_path(&self, task: &Task) -> PathBuf {
        self.root.join(&self.scripts_dir).join(&task.script)
    }

    /// Screenshot path for the task at 1-based position `index`
    pub fn image_path(&self, index: usize) -> PathBuf {
        self.root
            .join(&self.images_dir)
            .join(format!("task{}_output.png", index))
    }

    pub fn report_path(&self) -> PathBuf {
        self.root.join(&self.report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.scripts_dir, PathBuf::from("web/php"));
        assert_eq!(config.page_format, PageFormat::default());
    }

    #[test]
    fn paths_resolve_against_root() {
        let config = ReportConfig {
            root: PathBuf::from("/repo"),
            ..Default::default()
        };
        let task = &task::builtin_tasks()[1];
        assert_eq!(config.script_path(task), PathBuf::from("/repo/web/php/task2_reverse.php"));
        assert_eq!(config.image_path(2), PathBuf::from("/repo/output/images/task2_output.png"));
        assert_eq!(config.report_path(), PathBuf::from("/repo/web/public/task-report.pdf"));
    }

    #[test]
    fn absolute_report_path_ignores_root() {
        let config = ReportConfig {
            root: PathBuf::from("/repo"),
            report: PathBuf::from("/tmp/out.pdf"),
            ..Default::default()
        };
        assert_eq!(config.report_path(), PathBuf::from("/tmp/out.pdf"));
    }
}
