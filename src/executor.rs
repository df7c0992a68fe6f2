//! Runs task scripts as child processes and harvests their stdout.

use crate::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Something that can turn a script path into its captured output.
pub trait ScriptExecutor {
    /// Run the script to completion and return its stdout with trailing
    /// whitespace trimmed. A non-zero exit is an error.
    fn run(&self, script: &Path) -> Result<String>;
}

/// Launches `<interpreter> <script>` and blocks until it exits.
///
/// There is no timeout: a script that never exits blocks the caller.
#[derive(Debug, Clone)]
pub struct InterpreterExecutor {
    interpreter: String,
}

impl InterpreterExecutor {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl Default for InterpreterExecutor {
    fn default() -> Self {
        Self::new("php")
    }
}

impl ScriptExecutor for InterpreterExecutor {
    fn run(&self, script: &Path) -> Result<String> {
        debug!("running {} {}", self.interpreter, script.display());
        let output = Command::new(&self.interpreter)
            .arg(script)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::Spawn {
                interpreter: self.interpreter.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::ProcessFailed {
                script: script.to_path_buf(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim_end().to_string())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn script(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("script.sh");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn captures_stdout_and_trims_trailing_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = script(&dir, "printf 'Original: hello\\nReversed: olleh\\n\\n  '\n");
        let out = InterpreterExecutor::new("sh").run(&path).unwrap();
        assert_eq!(out, "Original: hello\nReversed: olleh");
    }

    #[test]
    fn keeps_leading_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = script(&dir, "printf '  indented\\n'\n");
        let out = InterpreterExecutor::new("sh").run(&path).unwrap();
        assert_eq!(out, "  indented");
    }

    #[test]
    fn stderr_is_not_part_of_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = script(&dir, "echo noise >&2\necho data\n");
        let out = InterpreterExecutor::new("sh").run(&path).unwrap();
        assert_eq!(out, "data");
    }

    #[test]
    fn non_zero_exit_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = script(&dir, "echo partial\necho broken >&2\nexit 1\n");
        let err = InterpreterExecutor::new("sh").run(&path).unwrap_err();
        match err {
            Error::ProcessFailed { status, stderr, .. } => {
                assert_eq!(status, Some(1));
                assert_eq!(stderr, "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_interpreter_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = script(&dir, "echo hi\n");
        let err = InterpreterExecutor::new("no-such-interpreter-xyz")
            .run(&path)
            .unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }
}
