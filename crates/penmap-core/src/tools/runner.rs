use std::process::Command;

use tracing::debug;

use super::errors::ToolError;

/// Captured result of one finished external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Trait defining how external programs are executed.
///
/// Implementations block until the program exits. A non-zero exit is not an
/// error at this level; callers decide what a failed status means.
pub trait ToolRunner {
    /// Run `program` with `args` and capture its output.
    fn run(&self, program: &str, args: &[&str]) -> Result<ToolOutput, ToolError>;

    /// Check if `program` can be found before running it.
    fn is_available(&self, program: &str) -> bool;
}

/// Runs programs as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<ToolOutput, ToolError> {
        debug!(event = "core.tools.run_started", program = program, args = ?args);

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| ToolError::SpawnFailed {
                tool: program.to_string(),
                message: e.to_string(),
            })?;

        debug!(
            event = "core.tools.run_completed",
            program = program,
            code = ?output.status.code()
        );

        Ok(ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_system_runner_captures_stdout() {
        let output = SystemRunner.run("echo", &["hello"]).unwrap();
        assert!(output.success);
        assert_eq!(output.code, Some(0));
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[test]
    fn test_system_runner_reports_failure_status() {
        let output = SystemRunner.run("false", &[]).unwrap();
        assert!(!output.success);
        assert_eq!(output.code, Some(1));
    }

    #[test]
    fn test_system_runner_missing_program() {
        let result = SystemRunner.run("penmap-definitely-missing-tool", &[]);
        assert!(matches!(result, Err(ToolError::SpawnFailed { .. })));
    }

    #[test]
    fn test_is_available() {
        assert!(SystemRunner.is_available("sh"));
        assert!(!SystemRunner.is_available("penmap-definitely-missing-tool"));
    }
}
