use crate::errors::PenmapError;

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("'{tool}' was not found. Make sure {tool} is installed and on PATH.")]
    NotInstalled { tool: String },

    #[error("Failed to execute '{tool}': {message}")]
    SpawnFailed { tool: String, message: String },

    #[error("'{tool}' exited with {}: {stderr}", status_label(.code))]
    ExitFailure {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn status_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

impl ToolError {
    /// Name of the program the error refers to.
    pub fn tool(&self) -> &str {
        match self {
            ToolError::NotInstalled { tool }
            | ToolError::SpawnFailed { tool, .. }
            | ToolError::ExitFailure { tool, .. } => tool,
        }
    }
}

impl PenmapError for ToolError {
    fn error_code(&self) -> &'static str {
        match self {
            ToolError::NotInstalled { .. } => "TOOL_NOT_INSTALLED",
            ToolError::SpawnFailed { .. } => "TOOL_SPAWN_FAILED",
            ToolError::ExitFailure { .. } => "TOOL_EXIT_FAILURE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ToolError::NotInstalled { .. })
    }
}
