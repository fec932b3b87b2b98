//! penmap-core: bind a graphics tablet's pen input to one window's screen region
//!
//! The library wraps three X11 utilities (`xsetwacom`, `wmctrl`, `xwininfo`)
//! and exposes the steps of the mapping flow as separate operations so the
//! CLI can drive them one at a time.
//!
//! # Main Entry Points
//!
//! - [`devices`] - Enumerate pen-like tablet devices
//! - [`windows`] - Enumerate windows and resolve their exact geometry
//! - [`selector`] - Interactive window selection over any reader/writer pair
//! - [`mapping`] - Bind every device to the selected geometry
//! - [`tools`] - External command execution behind the [`ToolRunner`] trait

pub mod config;
pub mod devices;
pub mod errors;
pub mod events;
pub mod logging;
pub mod mapping;
pub mod selector;
pub mod tools;
pub mod windows;

// Re-export commonly used types at crate root for convenience
pub use config::ToolConfig;
pub use devices::{Device, DeviceMap};
pub use errors::PenmapError;
pub use mapping::{MappingOutcome, MappingStatus};
pub use selector::Selection;
pub use tools::{SystemRunner, ToolError, ToolOutput, ToolRunner};
pub use windows::{Geometry, GeometryError, GeometryString, Window, WindowListing};

// Re-export handler modules as the primary API
pub use devices::handler as device_ops;
pub use mapping::handler as mapping_ops;
pub use windows::handler as window_ops;

// Re-export logging initialization
pub use logging::init_logging;
