//! External command execution.
//!
//! Every call to `xsetwacom`, `wmctrl` or `xwininfo` goes through a
//! [`ToolRunner`], so the enumerators and the mapping applier can be driven by
//! a scripted runner in tests.

pub mod errors;
pub mod operations;
pub mod runner;

#[cfg(test)]
pub(crate) mod mock;

pub use errors::ToolError;
pub use operations::{require_tool, run_checked};
pub use runner::{SystemRunner, ToolOutput, ToolRunner};
