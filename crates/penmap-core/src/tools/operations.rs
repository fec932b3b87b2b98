use tracing::warn;

use super::errors::ToolError;
use super::runner::{ToolOutput, ToolRunner};

/// Fail with [`ToolError::NotInstalled`] when `program` cannot be located.
pub fn require_tool(runner: &dyn ToolRunner, program: &str) -> Result<(), ToolError> {
    if runner.is_available(program) {
        Ok(())
    } else {
        warn!(event = "core.tools.not_installed", program = program);
        Err(ToolError::NotInstalled {
            tool: program.to_string(),
        })
    }
}

/// Run a program and treat a non-zero exit as [`ToolError::ExitFailure`].
pub fn run_checked(
    runner: &dyn ToolRunner,
    program: &str,
    args: &[&str],
) -> Result<ToolOutput, ToolError> {
    let output = runner.run(program, args)?;
    if output.success {
        return Ok(output);
    }

    warn!(
        event = "core.tools.exit_failure",
        program = program,
        code = ?output.code,
        stderr = %output.stderr.trim()
    );
    Err(ToolError::ExitFailure {
        tool: program.to_string(),
        code: output.code,
        stderr: output.stderr.trim().to_string(),
    })
}
