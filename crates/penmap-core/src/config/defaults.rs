//! Default program names for the external utilities.

use crate::config::types::ToolConfig;

/// Tablet device lister and mapper.
pub const DEFAULT_DEVICE_TOOL: &str = "xsetwacom";

/// Top-level window lister.
pub const DEFAULT_WINDOW_LIST_TOOL: &str = "wmctrl";

/// Per-window geometry query.
pub const DEFAULT_WINDOW_INFO_TOOL: &str = "xwininfo";

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            device_tool: DEFAULT_DEVICE_TOOL.to_string(),
            window_list_tool: DEFAULT_WINDOW_LIST_TOOL.to_string(),
            window_info_tool: DEFAULT_WINDOW_INFO_TOOL.to_string(),
        }
    }
}
