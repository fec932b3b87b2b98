use tracing::{info, warn};

use super::geometry::{GeometryResolution, resolve_geometry};
use super::parser::parse_window_list;
use super::types::{UnresolvedWindow, Window, WindowListing};
use crate::config::ToolConfig;
use crate::errors::PenmapError;
use crate::tools::{ToolError, ToolRunner, require_tool, run_checked};

/// List windows and resolve each one's precise geometry.
///
/// The window lister failing is fatal. A window whose geometry cannot be
/// resolved is moved to [`WindowListing::unresolved`] and enumeration
/// continues.
pub fn list_windows(
    runner: &dyn ToolRunner,
    config: &ToolConfig,
) -> Result<WindowListing, ToolError> {
    info!(
        event = "core.window.list_started",
        list_tool = %config.window_list_tool,
        info_tool = %config.window_info_tool
    );

    require_tool(runner, &config.window_list_tool)?;
    require_tool(runner, &config.window_info_tool)?;

    let output = run_checked(runner, &config.window_list_tool, &["-lG"])?;
    let entries = parse_window_list(&output.stdout);
    let listed_count = entries.len();

    let mut listing = WindowListing::default();
    for entry in entries {
        match query_geometry(runner, config, &entry.id) {
            GeometryResolution::Resolved(geometry) => listing.windows.push(Window {
                title: entry.title,
                geometry,
                id: entry.id,
            }),
            GeometryResolution::Unresolved { reason } => {
                warn!(
                    event = "core.window.geometry_unresolved",
                    window_id = %entry.id,
                    error = %reason,
                    error_code = reason.error_code()
                );
                listing.unresolved.push(UnresolvedWindow {
                    id: entry.id,
                    title: entry.title,
                    reason,
                });
            }
        }
    }

    info!(
        event = "core.window.list_completed",
        listed_count = listed_count,
        count = listing.windows.len(),
        unresolved_count = listing.unresolved.len()
    );
    Ok(listing)
}

/// Ask the window info tool for one window's geometry.
pub fn query_geometry(
    runner: &dyn ToolRunner,
    config: &ToolConfig,
    window_id: &str,
) -> GeometryResolution {
    match run_checked(runner, &config.window_info_tool, &["-id", window_id]) {
        Ok(output) => resolve_geometry(&output.stdout),
        Err(e) => GeometryResolution::Unresolved { reason: e.into() },
    }
}
