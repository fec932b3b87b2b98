//! # Tool configuration
//!
//! penmap reads no configuration files. The only configurable values are the
//! program names of the external utilities, which default to the standard
//! X11 tools and can be overridden from the command line.

pub mod defaults;
pub mod types;

pub use types::ToolConfig;
