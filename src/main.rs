use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use taskreport::executor::InterpreterExecutor;
use taskreport::task::{builtin_tasks, load_tasks};
use taskreport::ReportConfig;

/// Run the PHP exercises and build the PDF report.
///
/// With no arguments every path uses the default repository layout relative
/// to the current directory.
#[derive(Parser, Debug)]
#[command(name = "taskreport", version, about)]
struct Cli {
    /// Repository root that the other paths are relative to
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Interpreter used to run each task's script
    #[arg(long, default_value = "php")]
    php: String,

    /// Directory holding the task scripts
    #[arg(long)]
    scripts_dir: Option<PathBuf>,

    /// Directory for output screenshots
    #[arg(long)]
    images_dir: Option<PathBuf>,

    /// Destination of the PDF report
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON file replacing the built-in task list
    #[arg(long)]
    tasks: Option<PathBuf>,

    /// Print the active task list as JSON and exit
    #[arg(long)]
    print_tasks: bool,
}

impl Cli {
    fn config(&self) -> ReportConfig {
        let mut config = ReportConfig {
            root: self.root.clone(),
            interpreter: self.php.clone(),
            ..Default::default()
        };
        if let Some(dir) = &self.scripts_dir {
            config.scripts_dir = dir.clone();
        }
        if let Some(dir) = &self.images_dir {
            config.images_dir = dir.clone();
        }
        if let Some(path) = &self.output {
            config.report = path.clone();
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let tasks = match &cli.tasks {
        Some(path) => load_tasks(path).with_context(|| format!("loading tasks from {}", path.display()))?,
        None => builtin_tasks(),
    };

    if cli.print_tasks {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    let config = cli.config();
    let executor = InterpreterExecutor::new(config.interpreter.clone());
    taskreport::pipeline::run(&config, &tasks, &executor).context("report generation failed")?;
    Ok(())
}
