/// Program names used for every external invocation.
///
/// Values may be bare names resolved through `PATH` or absolute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Lists tablet devices and applies `MapToOutput`.
    pub device_tool: String,
    /// Lists windows with coarse geometry (`-lG`).
    pub window_list_tool: String,
    /// Reports precise geometry for one window id.
    pub window_info_tool: String,
}

impl ToolConfig {
    /// Override individual programs, keeping defaults for the rest.
    pub fn with_overrides(
        mut self,
        device_tool: Option<&str>,
        window_list_tool: Option<&str>,
        window_info_tool: Option<&str>,
    ) -> Self {
        if let Some(tool) = device_tool {
            self.device_tool = tool.to_string();
        }
        if let Some(tool) = window_list_tool {
            self.window_list_tool = tool.to_string();
        }
        if let Some(tool) = window_info_tool {
            self.window_info_tool = tool.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tools() {
        let config = ToolConfig::default();
        assert_eq!(config.device_tool, "xsetwacom");
        assert_eq!(config.window_list_tool, "wmctrl");
        assert_eq!(config.window_info_tool, "xwininfo");
    }

    #[test]
    fn test_partial_overrides_keep_defaults() {
        let config = ToolConfig::default().with_overrides(None, Some("/opt/bin/wmctrl"), None);
        assert_eq!(config.device_tool, "xsetwacom");
        assert_eq!(config.window_list_tool, "/opt/bin/wmctrl");
        assert_eq!(config.window_info_tool, "xwininfo");
    }
}
