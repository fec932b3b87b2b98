pub mod errors;
pub mod geometry;
pub mod handler;
pub mod parser;
pub mod types;

pub use errors::GeometryError;
pub use geometry::{Geometry, GeometryResolution, GeometryString, resolve_geometry};
pub use handler::list_windows;
pub use parser::{WindowEntry, parse_window_list};
pub use types::{UnresolvedWindow, Window, WindowListing};
