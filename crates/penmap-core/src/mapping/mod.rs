pub mod handler;
pub mod types;

pub use handler::apply;
pub use types::{MappingOutcome, MappingStatus};
