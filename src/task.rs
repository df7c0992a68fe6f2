//! Task descriptors: the narrative content of each exercise and the script
//! that produces its output.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One exercise in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Heading shown at the top of the task page
    pub name: String,
    /// Single-paragraph aim
    pub aim: String,
    /// Problem statement entries, rendered as dash bullets
    pub problem: Vec<String>,
    /// Constraint entries, rendered as dash bullets
    pub constraints: Vec<String>,
    /// Procedure steps, numbered from 1
    pub procedure: Vec<String>,
    /// Script file name, relative to the configured scripts directory
    pub script: String,
    /// Closing sentence
    pub conclusion: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The exercises covered by the report.
pub fn builtin_tasks() -> Vec<Task> {
    vec![
        Task {
            name: "Task 1: Largest Number Using Nested If".to_string(),
            aim: "Determine the largest of three numbers using nested if statements in PHP."
                .to_string(),
            problem: strings(&[
                "Write a PHP program that accepts three predefined numbers.",
                "Use nested if statements to identify the largest value.",
                "Display the numbers and the largest number in the output.",
            ]),
            constraints: strings(&[
                "Exactly three numeric values must be evaluated.",
                "Decision making must rely on nested if statements (no ternary or built-in max).",
                "Output must clearly identify the input set and the largest value.",
            ]),
            procedure: strings(&[
                "Store three numeric values in an array.",
                "Assign each value to descriptive variables for clarity.",
                "Implement nested if statements comparing the numbers to find the largest.",
                "Print both the input set and the final result.",
            ]),
            script: "task1_largest.php".to_string(),
            conclusion:
                "The program successfully determines the largest number using nested if statements."
                    .to_string(),
        },
        Task {
            name: "Task 2: Reverse String Using strrev()".to_string(),
            aim: "Reverse a string in PHP using the built-in strrev() function.".to_string(),
            problem: strings(&[
                "Write a PHP program that defines an input string.",
                "Reverse the string using the strrev() function.",
                "Display both the original and reversed strings.",
            ]),
            constraints: strings(&[
                "Must utilize the strrev() function for reversing.",
                "Input string should be hard-coded for repeatable output.",
                "Output should clearly show both original and reversed values.",
            ]),
            procedure: strings(&[
                "Define the string to be reversed.",
                "Call strrev() with the string and store the result.",
                "Print the original and reversed strings in separate lines.",
            ]),
            script: "task2_reverse.php".to_string(),
            conclusion: "The program correctly reverses the string using PHP's strrev() function."
                .to_string(),
        },
    ]
}

/// Load a task list from a JSON file (an array of task objects).
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let raw = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let tasks: Vec<Task> = serde_json::from_str(&raw)
        .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
    if tasks.is_empty() {
        return Err(Error::ConfigError(format!(
            "{}: task list is empty",
            path.display()
        )));
    }
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tasks_reference_distinct_scripts() {
        let tasks = builtin_tasks();
        assert_eq!(tasks.len(), 2);
        assert_ne!(tasks[0].script, tasks[1].script);
        assert!(tasks.iter().all(|t| !t.procedure.is_empty()));
    }

    #[test]
    fn load_tasks_reads_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let json = serde_json::to_string(&builtin_tasks()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = load_tasks(&path).unwrap();
        assert_eq!(loaded, builtin_tasks());
    }

    #[test]
    fn load_tasks_rejects_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(matches!(load_tasks(&path), Err(Error::ConfigError(_))));
    }

    #[test]
    fn load_tasks_reports_missing_file() {
        let err = load_tasks(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
