pub mod handler;
pub mod parser;
pub mod types;

pub use handler::list_devices;
pub use parser::parse_device_list;
pub use types::{Device, DeviceMap};
