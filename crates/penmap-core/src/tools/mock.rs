use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::errors::ToolError;
use super::runner::{ToolOutput, ToolRunner};

enum Scripted {
    Output(ToolOutput),
    SpawnError(String),
}

/// Scripted runner that records every invocation.
///
/// Unscripted invocations succeed with empty output.
#[derive(Default)]
pub(crate) struct MockRunner {
    responses: HashMap<String, Scripted>,
    unavailable: HashSet<String>,
    calls: RefCell<Vec<Vec<String>>>,
}

fn key(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program];
    parts.extend_from_slice(args);
    parts.join(" ")
}

impl MockRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, program: &str, args: &[&str], stdout: &str) -> Self {
        self.responses.insert(
            key(program, args),
            Scripted::Output(ToolOutput {
                success: true,
                code: Some(0),
                stdout: stdout.to_string(),
                stderr: String::new(),
            }),
        );
        self
    }

    pub(crate) fn fail(mut self, program: &str, args: &[&str], code: i32, stderr: &str) -> Self {
        self.responses.insert(
            key(program, args),
            Scripted::Output(ToolOutput {
                success: false,
                code: Some(code),
                stdout: String::new(),
                stderr: stderr.to_string(),
            }),
        );
        self
    }

    pub(crate) fn spawn_error(mut self, program: &str, args: &[&str], message: &str) -> Self {
        self.responses
            .insert(key(program, args), Scripted::SpawnError(message.to_string()));
        self
    }

    pub(crate) fn unavailable(mut self, program: &str) -> Self {
        self.unavailable.insert(program.to_string());
        self
    }

    /// Every invocation so far, as `[program, args...]`.
    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Invocations of one program.
    pub(crate) fn calls_to(&self, program: &str) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|call| call.first().map(String::as_str) == Some(program))
            .collect()
    }
}

impl ToolRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<ToolOutput, ToolError> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.borrow_mut().push(call);

        match self.responses.get(&key(program, args)) {
            Some(Scripted::Output(output)) => Ok(output.clone()),
            Some(Scripted::SpawnError(message)) => Err(ToolError::SpawnFailed {
                tool: program.to_string(),
                message: message.clone(),
            }),
            None => Ok(ToolOutput {
                success: true,
                code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            }),
        }
    }

    fn is_available(&self, program: &str) -> bool {
        !self.unavailable.contains(program)
    }
}
