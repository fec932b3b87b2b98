pub mod handler;
pub mod types;

pub use handler::{announce_devices, choose_window, parse_choice, select};
pub use types::{Choice, Selection};
