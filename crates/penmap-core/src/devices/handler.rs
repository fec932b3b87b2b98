use tracing::info;

use super::parser::parse_device_list;
use super::types::DeviceMap;
use crate::config::ToolConfig;
use crate::tools::{ToolError, ToolRunner, require_tool, run_checked};

/// List the stylus and eraser devices known to the tablet driver.
///
/// Fails with a [`ToolError`] when the device tool is missing, cannot be
/// spawned or exits non-zero.
pub fn list_devices(runner: &dyn ToolRunner, config: &ToolConfig) -> Result<DeviceMap, ToolError> {
    info!(event = "core.devices.list_started", tool = %config.device_tool);

    require_tool(runner, &config.device_tool)?;
    let output = run_checked(runner, &config.device_tool, &["--list", "devices"])?;
    let devices = parse_device_list(&output.stdout);

    info!(event = "core.devices.list_completed", count = devices.len());
    Ok(devices)
}
